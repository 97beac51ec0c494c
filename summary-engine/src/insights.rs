//! Narrative insight generation.

use crate::types::enriched::EnrichedActionItem;
use crate::types::raw::Priority;

/// Owner name used when an action item has no owner.
const UNKNOWN_OWNER: &str = "Unknown";

/// Derive narrative observations from the enriched meeting data.
///
/// Each rule is evaluated independently and appends in the listed order:
/// workload distribution, urgent-task skew, topic overload, decision count.
/// May return an empty list.
pub fn generate_insights(
    items: &[EnrichedActionItem],
    topics: &[String],
    decisions: &[String],
) -> Vec<String> {
    let mut insights = Vec::new();

    if !items.is_empty() {
        let owner_counts = count_by_owner(items);
        if owner_counts.len() > 1 {
            let parts: Vec<String> = owner_counts
                .iter()
                .map(|(owner, count)| format!("{owner} ({count} tasks)"))
                .collect();
            insights.push(format!("Workload distribution: {}", parts.join(", ")));
        }

        let high_count = items
            .iter()
            .filter(|item| item.priority == Priority::High)
            .count();
        // Strict majority: 2 of 4 is not enough, 3 of 5 is.
        if high_count as f64 > items.len() as f64 / 2.0 {
            insights.push(
                "High number of urgent tasks identified - consider resource allocation"
                    .to_string(),
            );
        }
    }

    if topics.len() > 5 {
        insights
            .push("Meeting covered many topics - consider breaking into focused sessions".to_string());
    }

    if !decisions.is_empty() {
        insights.push(format!(
            "Key decisions made: {} important outcomes",
            decisions.len()
        ));
    }

    insights
}

/// Per-owner task counts in first-seen owner order.
fn count_by_owner(items: &[EnrichedActionItem]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        let owner = item.owner.as_deref().unwrap_or(UNKNOWN_OWNER);
        match counts.iter_mut().find(|(name, _)| name == owner) {
            Some((_, count)) => *count += 1,
            None => counts.push((owner.to_string(), 1)),
        }
    }
    counts
}
