//! Types for raw summaries as produced by the upstream summarization provider.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority label for an action item.
///
/// Upstream providers are prompted to emit "High"/"Medium"/"Low" but are not
/// guaranteed to comply; see [`RawActionItem::priority`] for how off-label
/// values are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Deserializes a priority leniently: anything outside High/Medium/Low
/// (case-insensitive) is treated as absent so the enricher derives it
/// instead of the whole summary failing to parse.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| s.parse().ok()))
}

/// A single action item as extracted by the upstream provider.
///
/// Every field is defaulted: model output routinely omits keys, and a
/// missing field must degrade gracefully rather than fail deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawActionItem {
    #[serde(default)]
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Free-form deadline text ("Friday", "next week", ...). Empty when the
    /// transcript mentioned no due date; classifies into the future bucket.
    #[serde(default)]
    pub deadline: String,
    #[serde(
        default,
        deserialize_with = "lenient_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Priority>,
}

/// Structured summary extracted from one meeting transcript.
///
/// Constructed once per processed transcript by the upstream provider (or
/// its canned fallback); never mutated by the enrichment engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSummary {
    #[serde(default)]
    pub summary: String,
    /// Topics in discussion order.
    #[serde(default)]
    pub topics_discussed: Vec<String>,
    #[serde(default)]
    pub key_decisions: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<RawActionItem>,
    #[serde(default)]
    pub next_steps: String,
}
