//! Rendering enriched summaries for export.

use crate::error::Error;
use crate::types::enriched::{EnrichedActionItem, EnrichedSummary};
use std::fmt;
use std::str::FromStr;

/// Owner name rendered when an action item has no owner.
const UNASSIGNED_OWNER: &str = "Unassigned";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
    Json,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "markdown" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Render an enriched summary in the requested format.
///
/// JSON is a direct serialization of the full enriched structure and
/// round-trips losslessly. Text and markdown render a fixed section order:
/// header metadata, summary, topics, decisions, action items, next steps,
/// and insights (the insights section is omitted entirely when empty).
/// Missing optional fields render as empty section bodies, never as errors.
pub fn export(summary: &EnrichedSummary, format: ExportFormat) -> Result<String, Error> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(summary)
            .map_err(|e| Error::Serialization(e.to_string())),
        ExportFormat::Markdown => Ok(format_markdown(summary)),
        ExportFormat::Text => Ok(format_text(summary)),
    }
}

fn owner_label(item: &EnrichedActionItem) -> &str {
    item.owner.as_deref().unwrap_or(UNASSIGNED_OWNER)
}

fn format_markdown(summary: &EnrichedSummary) -> String {
    let mut md = String::from("# Meeting Summary\n\n");
    md.push_str(&format!(
        "**Date:** {}\n",
        summary.metadata.processed_at.format("%Y-%m-%d")
    ));
    md.push_str(&format!("**Type:** {}\n", summary.metadata.meeting_type));
    md.push_str(&format!(
        "**Duration:** {}\n\n",
        summary.metadata.estimated_duration
    ));

    md.push_str(&format!("## Summary\n{}\n\n", summary.summary));

    md.push_str("## Topics Discussed\n");
    for topic in &summary.topics_discussed {
        md.push_str(&format!("- {topic}\n"));
    }
    md.push('\n');

    md.push_str("## Key Decisions\n");
    for decision in &summary.key_decisions {
        md.push_str(&format!("- {decision}\n"));
    }
    md.push('\n');

    md.push_str("## Action Items\n");
    for item in &summary.action_items {
        md.push_str(&format!(
            "- **{}** (Owner: {}, Priority: {}, Deadline: {})\n",
            item.task,
            owner_label(item),
            item.priority,
            item.deadline
        ));
    }
    md.push('\n');

    md.push_str(&format!("## Next Steps\n{}\n\n", summary.next_steps));

    if !summary.insights.is_empty() {
        md.push_str("## Insights\n");
        for insight in &summary.insights {
            md.push_str(&format!("- {insight}\n"));
        }
    }

    md
}

fn format_text(summary: &EnrichedSummary) -> String {
    let mut text = String::from("MEETING SUMMARY\n");
    text.push_str(&format!(
        "Date: {}\n",
        summary.metadata.processed_at.format("%Y-%m-%d")
    ));
    text.push_str(&format!("Type: {}\n", summary.metadata.meeting_type));
    text.push_str(&format!(
        "Duration: {}\n\n",
        summary.metadata.estimated_duration
    ));

    text.push_str(&format!("SUMMARY:\n{}\n\n", summary.summary));

    text.push_str("TOPICS DISCUSSED:\n");
    for topic in &summary.topics_discussed {
        text.push_str(&format!("- {topic}\n"));
    }
    text.push('\n');

    text.push_str("KEY DECISIONS:\n");
    for decision in &summary.key_decisions {
        text.push_str(&format!("- {decision}\n"));
    }
    text.push('\n');

    text.push_str("ACTION ITEMS:\n");
    for item in &summary.action_items {
        text.push_str(&format!(
            "- {} (Owner: {}, Priority: {}, Deadline: {})\n",
            item.task,
            owner_label(item),
            item.priority,
            item.deadline
        ));
    }
    text.push('\n');

    text.push_str(&format!("NEXT STEPS:\n{}\n", summary.next_steps));

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::enriched::{ActionStatus, Metadata, Timeline};
    use crate::types::raw::Priority;
    use chrono::{TimeZone, Utc};

    fn sample_summary() -> EnrichedSummary {
        let item = EnrichedActionItem {
            task: "Prepare the specs".to_string(),
            owner: Some("Sarah".to_string()),
            deadline: "Friday".to_string(),
            priority: Priority::High,
            estimated_effort: "Medium (4-8 hours)".to_string(),
            status: ActionStatus::Pending,
            id: "task_1".to_string(),
        };
        EnrichedSummary {
            summary: "A productive kickoff.".to_string(),
            topics_discussed: vec!["Scope".to_string()],
            key_decisions: vec!["Go ahead".to_string()],
            action_items: vec![item.clone()],
            next_steps: "Meet again Tuesday.".to_string(),
            metadata: Metadata {
                processed_at: Utc.with_ymd_and_hms(2025, 6, 12, 10, 30, 0).unwrap(),
                total_action_items: 1,
                meeting_type: "Project Kickoff".to_string(),
                estimated_duration: "30 minutes".to_string(),
            },
            insights: vec![],
            timeline: Timeline {
                this_week: vec![item],
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(
            "Markdown".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_markdown_omits_insights_section_when_empty() {
        let output = export(&sample_summary(), ExportFormat::Markdown).unwrap();

        assert!(!output.contains("## Insights"));
    }

    #[test]
    fn test_markdown_renders_fixed_section_order() {
        let mut summary = sample_summary();
        summary.insights = vec!["Key decisions made: 1 important outcomes".to_string()];

        let output = export(&summary, ExportFormat::Markdown).unwrap();

        let sections = [
            "# Meeting Summary",
            "**Date:** 2025-06-12",
            "## Summary",
            "## Topics Discussed",
            "## Key Decisions",
            "## Action Items",
            "## Next Steps",
            "## Insights",
        ];
        let mut last = 0;
        for section in sections {
            let pos = output[last..]
                .find(section)
                .unwrap_or_else(|| panic!("missing or out of order: {section}"));
            last += pos;
        }
    }

    #[test]
    fn test_text_renders_action_item_line() {
        let output = export(&sample_summary(), ExportFormat::Text).unwrap();

        assert!(output.starts_with("MEETING SUMMARY\n"));
        assert!(output
            .contains("- Prepare the specs (Owner: Sarah, Priority: High, Deadline: Friday)"));
    }

    #[test]
    fn test_missing_owner_renders_unassigned() {
        let mut summary = sample_summary();
        summary.action_items[0].owner = None;

        let output = export(&summary, ExportFormat::Text).unwrap();

        assert!(output.contains("(Owner: Unassigned,"));
    }

    #[test]
    fn test_json_round_trips_structurally() {
        let summary = sample_summary();

        let json = export(&summary, ExportFormat::Json).unwrap();
        let parsed: EnrichedSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_empty_summary_renders_empty_section_bodies() {
        let mut summary = sample_summary();
        summary.summary = String::new();
        summary.topics_discussed.clear();
        summary.key_decisions.clear();
        summary.action_items.clear();
        summary.next_steps = String::new();

        let output = export(&summary, ExportFormat::Markdown).unwrap();

        assert!(output.contains("## Summary\n\n"));
        assert!(output.contains("## Topics Discussed\n\n"));
    }
}
