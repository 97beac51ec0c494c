//! Upstream AI boundary for meeting transcription and summarization.
//!
//! This crate owns the contract with the external AI collaborator:
//! - Trait-based provider abstractions for transcription and summarization
//! - A watsonx.ai text-generation gateway client
//! - Extraction of a structured summary from free-form model output, with
//!   degraded-but-well-formed fallbacks
//! - A mock provider returning canned demo data for offline use
//!
//! Failures here never propagate into the enrichment engine; callers
//! substitute the canned fallbacks via [`fallback`] instead.

pub mod error;
pub mod fallback;
pub mod mock;
pub mod parse;
pub mod traits;
pub mod watsonx;

pub use error::Error;
pub use mock::MockProvider;
pub use traits::{SummarizationProvider, TranscriptionProvider};
pub use watsonx::WatsonxClient;
