//! Types for enriched summaries, the engine's output.

use crate::types::raw::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an action item.
///
/// Enrichment always creates items as `Pending`; the other states exist for
/// the presentation layer to move items through after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    Pending,
    InProgress,
    Completed,
}

/// An action item with all derived fields populated.
///
/// Same raw fields as the input item, plus a priority that is always
/// present, an effort estimate, a creation status, and an id of the form
/// `task_<n>` where n is the item's 1-based position in the input sequence.
/// Ids are unique within one enriched summary, not globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedActionItem {
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub deadline: String,
    pub priority: Priority,
    pub estimated_effort: String,
    pub status: ActionStatus,
    pub id: String,
}

/// Derived metadata about the processed meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Injected by the caller, never read from the ambient clock.
    pub processed_at: DateTime<Utc>,
    pub total_action_items: usize,
    pub meeting_type: String,
    /// Rendered duration, e.g. "45 minutes" or "1h 15m".
    pub estimated_duration: String,
}

/// Deadline-proximity partition of the action items.
///
/// The four buckets are disjoint and together contain every action item
/// exactly once, in input order within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub immediate: Vec<EnrichedActionItem>,
    #[serde(default)]
    pub this_week: Vec<EnrichedActionItem>,
    #[serde(default)]
    pub next_week: Vec<EnrichedActionItem>,
    #[serde(default)]
    pub future: Vec<EnrichedActionItem>,
}

impl Timeline {
    /// Total number of items across all four buckets.
    pub fn total(&self) -> usize {
        self.immediate.len() + self.this_week.len() + self.next_week.len() + self.future.len()
    }

    /// All buckets in their fixed order, for iteration.
    pub fn buckets(&self) -> [&Vec<EnrichedActionItem>; 4] {
        [
            &self.immediate,
            &self.this_week,
            &self.next_week,
            &self.future,
        ]
    }
}

/// The engine's output: the raw summary plus everything derived from it.
///
/// Held in session state for the duration of a user session and discarded
/// on the next upload; there is no persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSummary {
    pub summary: String,
    pub topics_discussed: Vec<String>,
    pub key_decisions: Vec<String>,
    pub action_items: Vec<EnrichedActionItem>,
    pub next_steps: String,
    pub metadata: Metadata,
    pub insights: Vec<String>,
    pub timeline: Timeline,
}
