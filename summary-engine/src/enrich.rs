//! Action item enrichment.

use crate::keywords::KeywordConfig;
use crate::types::enriched::{ActionStatus, EnrichedActionItem};
use crate::types::raw::RawActionItem;

/// Enrich raw action items with derived fields.
///
/// Total function: preserves order and cardinality, never fails. A priority
/// declared upstream is kept verbatim, even when the task text would have
/// classified differently; everything else is always derived.
pub fn enrich_action_items(
    config: &KeywordConfig,
    items: &[RawActionItem],
) -> Vec<EnrichedActionItem> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| EnrichedActionItem {
            task: item.task.clone(),
            owner: item.owner.clone(),
            deadline: item.deadline.clone(),
            priority: item
                .priority
                .unwrap_or_else(|| config.derive_priority(&item.task, &item.deadline)),
            estimated_effort: config.effort_label(&item.task),
            status: ActionStatus::Pending,
            id: format!("task_{}", index + 1),
        })
        .collect()
}
