//! Deadline-proximity bucketing of action items.

use crate::keywords::{matches_any, KeywordConfig};
use crate::types::enriched::{EnrichedActionItem, Timeline};

/// Partition action items into the four timeline buckets.
///
/// Classification runs over the lower-cased deadline text, first match
/// wins: immediate, then next-week, then this-week, then future. Next-week
/// keywords are deliberately tested before the generic week keywords so a
/// "next week" deadline is not captured by the bare "week" substring.
/// Every item lands in exactly one bucket; empty deadlines go to future.
pub fn bucket_action_items(config: &KeywordConfig, items: &[EnrichedActionItem]) -> Timeline {
    let mut timeline = Timeline::default();

    for item in items {
        if matches_any(&item.deadline, &config.immediate_deadlines) {
            timeline.immediate.push(item.clone());
        } else if matches_any(&item.deadline, &config.next_week_deadlines) {
            timeline.next_week.push(item.clone());
        } else if matches_any(&item.deadline, &config.this_week_deadlines) {
            timeline.this_week.push(item.clone());
        } else {
            timeline.future.push(item.clone());
        }
    }

    timeline
}
