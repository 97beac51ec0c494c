//! Meeting-type classification and duration estimation.

use crate::keywords::KeywordConfig;
use crate::types::raw::RawSummary;

const BASE_MINUTES: usize = 15;
const MINUTES_PER_TOPIC: usize = 10;
const MINUTES_PER_ACTION_ITEM: usize = 5;

/// Classify the meeting from the union of its topic list and summary text.
pub fn classify_meeting_type(config: &KeywordConfig, raw: &RawSummary) -> String {
    let mut text = raw.topics_discussed.join(" ");
    text.push(' ');
    text.push_str(&raw.summary);
    config.meeting_type(&text)
}

/// Estimate the meeting duration from its content volume.
///
/// Minutes = 15 + 10 per topic + 5 per action item, rendered as
/// "<m> minutes" up to an hour and "<h>h <m>m" beyond.
pub fn estimate_duration(topic_count: usize, action_item_count: usize) -> String {
    let minutes =
        BASE_MINUTES + topic_count * MINUTES_PER_TOPIC + action_item_count * MINUTES_PER_ACTION_ITEM;

    if minutes <= 60 {
        format!("{minutes} minutes")
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}
