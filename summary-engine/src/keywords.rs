//! Keyword tables and the substring classifier built on them.
//!
//! All classification in the engine is case-insensitive substring matching
//! against fixed tables, first matching rule wins. The tables live in one
//! immutable [`KeywordConfig`] value owned by the enhancer; there is no
//! module-level singleton, so tests can construct their own tables.

use crate::types::raw::Priority;

const HIGH_PRIORITY: &[&str] = &[
    "urgent",
    "critical",
    "asap",
    "immediately",
    "priority",
    "important",
];
const MEDIUM_PRIORITY: &[&str] = &["soon", "next week", "following week", "moderate"];
const LOW_PRIORITY: &[&str] = &["when possible", "low priority", "nice to have"];

/// Deadline text that forces High priority regardless of task wording.
const DEADLINE_URGENCY: &[&str] = &["today", "tomorrow", "asap", "urgent"];

const EFFORT_RULES: &[(&[&str], &str)] = &[
    (&["review", "check", "verify"], "Low (1-2 hours)"),
    (&["prepare", "create", "draft"], "Medium (4-8 hours)"),
    (&["implement", "develop", "build"], "High (1-3 days)"),
    (&["coordinate", "organize", "plan"], "Medium (1-2 days)"),
];
const DEFAULT_EFFORT: &str = "Medium (1 day)";

const MEETING_TYPE_RULES: &[(&[&str], &str)] = &[
    (&["kickoff", "launch", "start"], "Project Kickoff"),
    (&["review", "status", "progress"], "Status Review"),
    (&["planning", "strategy", "roadmap"], "Planning"),
    (&["retrospective", "post-mortem", "lessons"], "Retrospective"),
    (&["decision", "approval", "sign-off"], "Decision Making"),
];
const DEFAULT_MEETING_TYPE: &str = "General Discussion";

/// Deadline buckets, tested in order. The next-week keywords come before
/// the generic week keywords so "next week" is not captured by the bare
/// "week" substring.
const IMMEDIATE_DEADLINES: &[&str] = &["today", "tomorrow", "asap"];
const NEXT_WEEK_DEADLINES: &[&str] = &["next week", "following week"];
const THIS_WEEK_DEADLINES: &[&str] = &["friday", "this week", "week"];

/// A keyword list paired with the label it classifies to.
#[derive(Debug, Clone)]
pub struct LabelRule {
    pub keywords: Vec<String>,
    pub label: String,
}

impl LabelRule {
    fn new(keywords: &[&str], label: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            label: label.to_string(),
        }
    }
}

/// Immutable keyword tables driving all classification.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    pub high_priority: Vec<String>,
    pub medium_priority: Vec<String>,
    pub low_priority: Vec<String>,
    pub deadline_urgency: Vec<String>,
    pub effort: Vec<LabelRule>,
    pub default_effort: String,
    pub meeting_types: Vec<LabelRule>,
    pub default_meeting_type: String,
    pub immediate_deadlines: Vec<String>,
    pub next_week_deadlines: Vec<String>,
    pub this_week_deadlines: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        let to_vec =
            |words: &[&str]| -> Vec<String> { words.iter().map(|w| w.to_string()).collect() };
        Self {
            high_priority: to_vec(HIGH_PRIORITY),
            medium_priority: to_vec(MEDIUM_PRIORITY),
            low_priority: to_vec(LOW_PRIORITY),
            deadline_urgency: to_vec(DEADLINE_URGENCY),
            effort: EFFORT_RULES
                .iter()
                .map(|(keywords, label)| LabelRule::new(keywords, label))
                .collect(),
            default_effort: DEFAULT_EFFORT.to_string(),
            meeting_types: MEETING_TYPE_RULES
                .iter()
                .map(|(keywords, label)| LabelRule::new(keywords, label))
                .collect(),
            default_meeting_type: DEFAULT_MEETING_TYPE.to_string(),
            immediate_deadlines: to_vec(IMMEDIATE_DEADLINES),
            next_week_deadlines: to_vec(NEXT_WEEK_DEADLINES),
            this_week_deadlines: to_vec(THIS_WEEK_DEADLINES),
        }
    }
}

/// True when the lower-cased text contains any of the keywords.
pub(crate) fn matches_any(text: &str, keywords: &[String]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|keyword| text.contains(keyword.as_str()))
}

impl KeywordConfig {
    /// Derive a priority for an item that did not declare one.
    ///
    /// Precedence: task text high-keyword, then deadline urgency, then task
    /// text medium/low keywords, then Medium as the default.
    pub fn derive_priority(&self, task: &str, deadline: &str) -> Priority {
        if matches_any(task, &self.high_priority) {
            Priority::High
        } else if matches_any(deadline, &self.deadline_urgency) {
            Priority::High
        } else if matches_any(task, &self.medium_priority) {
            Priority::Medium
        } else if matches_any(task, &self.low_priority) {
            Priority::Low
        } else {
            Priority::Medium
        }
    }

    /// Estimate effort from the task's verbs; first matching rule wins.
    pub fn effort_label(&self, task: &str) -> String {
        self.effort
            .iter()
            .find(|rule| matches_any(task, &rule.keywords))
            .map(|rule| rule.label.clone())
            .unwrap_or_else(|| self.default_effort.clone())
    }

    /// Classify the meeting from its combined topic and summary text.
    pub fn meeting_type(&self, text: &str) -> String {
        self.meeting_types
            .iter()
            .find(|rule| matches_any(text, &rule.keywords))
            .map(|rule| rule.label.clone())
            .unwrap_or_else(|| self.default_meeting_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive() {
        let config = KeywordConfig::default();

        assert_eq!(
            config.derive_priority("URGENT: fix the build", ""),
            Priority::High
        );
    }

    #[test]
    fn test_first_matching_meeting_type_rule_wins() {
        let config = KeywordConfig::default();

        // Contains both kickoff and review keywords; kickoff is listed first.
        assert_eq!(
            config.meeting_type("kickoff meeting to review the roadmap"),
            "Project Kickoff"
        );
    }

    #[test]
    fn test_unmatched_text_falls_through_to_defaults() {
        let config = KeywordConfig::default();

        assert_eq!(config.derive_priority("do the thing", ""), Priority::Medium);
        assert_eq!(config.effort_label("do the thing"), "Medium (1 day)");
        assert_eq!(config.meeting_type("weekly sync"), "General Discussion");
    }

    #[test]
    fn test_effort_rules_match_task_verbs() {
        let config = KeywordConfig::default();

        assert_eq!(config.effort_label("Review the PR"), "Low (1-2 hours)");
        assert_eq!(
            config.effort_label("Prepare the slide deck"),
            "Medium (4-8 hours)"
        );
        assert_eq!(
            config.effort_label("Implement the new API"),
            "High (1-3 days)"
        );
        assert_eq!(
            config.effort_label("Coordinate with DevOps"),
            "Medium (1-2 days)"
        );
    }

    #[test]
    fn test_high_task_keyword_beats_low_keyword() {
        let config = KeywordConfig::default();

        // "low priority" contains the high-table keyword "priority"; the
        // high table is checked first, matching the listed precedence.
        assert_eq!(
            config.derive_priority("low priority cleanup", ""),
            Priority::High
        );
    }
}
