//! Extraction of a structured summary from free-form model output.

use log::warn;
use summary_engine::RawSummary;

const MAX_FALLBACK_SUMMARY_CHARS: usize = 200;
const FALLBACK_TOPIC: &str = "General discussion";
const FALLBACK_DECISION: &str = "No specific decisions identified";
const FALLBACK_NEXT_STEPS: &str = "Review and follow up on discussed items";

/// Parse the model's response text into a [`RawSummary`].
///
/// Models are prompted for pure JSON but routinely wrap it in prose, so
/// the object is located by the first `{` and the last `}`. When no object
/// can be found or the candidate does not parse, the raw text itself
/// becomes a degraded summary via [`fallback_summary`]. Total function:
/// any input yields a well-formed summary.
pub fn parse_summary_response(response_text: &str) -> RawSummary {
    let Some(candidate) = extract_json_object(response_text) else {
        warn!("No JSON object in model response, falling back to raw text");
        return fallback_summary(response_text);
    };

    match serde_json::from_str(candidate) {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Failed to parse JSON from model response: {e}");
            fallback_summary(response_text)
        }
    }
}

/// The slice between the first `{` and the last `}`, when both exist in
/// that order.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Degraded summary carrying the raw response text, truncated to 200
/// characters with an ellipsis when longer.
pub fn fallback_summary(raw_text: &str) -> RawSummary {
    let summary = if raw_text.chars().count() > MAX_FALLBACK_SUMMARY_CHARS {
        let truncated: String = raw_text.chars().take(MAX_FALLBACK_SUMMARY_CHARS).collect();
        format!("{truncated}...")
    } else {
        raw_text.to_string()
    };

    RawSummary {
        summary,
        topics_discussed: vec![FALLBACK_TOPIC.to_string()],
        key_decisions: vec![FALLBACK_DECISION.to_string()],
        action_items: Vec::new(),
        next_steps: FALLBACK_NEXT_STEPS.to_string(),
    }
}
