//! The summary enhancer, the engine's single public entry point.

use crate::enrich::enrich_action_items;
use crate::insights::generate_insights;
use crate::keywords::KeywordConfig;
use crate::meeting::{classify_meeting_type, estimate_duration};
use crate::timeline::bucket_action_items;
use crate::types::enriched::{EnrichedSummary, Metadata};
use crate::types::raw::RawSummary;
use chrono::{DateTime, Utc};
use log::debug;

/// Composes classification, enrichment, insights, and bucketing into one
/// enriched summary.
///
/// Holds the immutable keyword tables; safe to share across sessions and
/// call concurrently. Given a fixed raw summary and a fixed `now`, the
/// result is fully deterministic.
#[derive(Debug, Clone)]
pub struct SummaryEnhancer {
    keywords: KeywordConfig,
}

impl SummaryEnhancer {
    pub fn new(keywords: KeywordConfig) -> Self {
        Self { keywords }
    }

    /// Enhance a raw summary into the enriched form.
    ///
    /// `now` is the processing timestamp; callers pass `Utc::now()` in
    /// production and a fixed value in tests. The raw input is only
    /// borrowed and never modified. This never fails: every missing field
    /// has a default and every classifier falls through to a label.
    pub fn enhance(&self, raw: &RawSummary, now: DateTime<Utc>) -> EnrichedSummary {
        debug!(
            "Enhancing summary: {} topics, {} action items",
            raw.topics_discussed.len(),
            raw.action_items.len()
        );

        let metadata = Metadata {
            processed_at: now,
            total_action_items: raw.action_items.len(),
            meeting_type: classify_meeting_type(&self.keywords, raw),
            estimated_duration: estimate_duration(
                raw.topics_discussed.len(),
                raw.action_items.len(),
            ),
        };

        let action_items = enrich_action_items(&self.keywords, &raw.action_items);
        let insights =
            generate_insights(&action_items, &raw.topics_discussed, &raw.key_decisions);
        let timeline = bucket_action_items(&self.keywords, &action_items);

        EnrichedSummary {
            summary: raw.summary.clone(),
            topics_discussed: raw.topics_discussed.clone(),
            key_decisions: raw.key_decisions.clone(),
            action_items,
            next_steps: raw.next_steps.clone(),
            metadata,
            insights,
            timeline,
        }
    }
}

impl Default for SummaryEnhancer {
    fn default() -> Self {
        Self::new(KeywordConfig::default())
    }
}
