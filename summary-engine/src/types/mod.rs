//! Data model for raw and enriched meeting summaries.

pub mod enriched;
pub mod raw;
