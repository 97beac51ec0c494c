//! Meeting summary enrichment engine.
//!
//! This crate turns a loosely-structured summary produced by an upstream
//! summarization provider into an enriched summary ready for presentation:
//! - Action items gain derived priorities, effort estimates, and stable ids
//! - Action items are partitioned into deadline-proximity timeline buckets
//! - Narrative insights are derived from workload, priorities, and decisions
//! - The whole meeting is classified by type and its duration estimated
//! - The enriched result renders to plain text, markdown, or JSON
//!
//! Everything here is a pure, synchronous, in-memory transform. The only
//! non-pure input, the processing timestamp, is injected by the caller so
//! enhancement stays deterministic and testable.

pub mod enhance;
pub mod enrich;
pub mod error;
pub mod export;
pub mod insights;
pub mod keywords;
pub mod meeting;
pub mod timeline;
pub mod types;

// Re-export the public entry points
pub use enhance::SummaryEnhancer;
pub use error::Error;
pub use export::{export, ExportFormat};
pub use keywords::KeywordConfig;
pub use types::enriched::{
    ActionStatus, EnrichedActionItem, EnrichedSummary, Metadata, Timeline,
};
pub use types::raw::{Priority, RawActionItem, RawSummary};
