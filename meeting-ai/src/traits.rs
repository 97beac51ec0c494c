//! Provider traits for the upstream AI collaborator.

use crate::Error;
use async_trait::async_trait;
use summary_engine::RawSummary;

/// Abstraction for speech-to-text transcription services.
///
/// `audio_ref` is a provider-meaningful reference to the recording, a
/// local file path or a media URL. Implementations return the plain
/// transcript text; callers must substitute a fallback transcript on any
/// failure rather than propagate it downstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn transcribe(&self, audio_ref: &str) -> Result<String, Error>;

    /// Unique lowercase identifier for this provider (e.g. "watsonx",
    /// "mock"), used in logs and provider selection.
    fn provider_id(&self) -> &str;
}

/// Abstraction for transcript summarization services.
///
/// Implementations extract a structured [`RawSummary`] from the transcript.
/// A provider that reaches its model but gets malformed output should
/// degrade to a well-formed fallback summary itself (see [`crate::parse`]);
/// only transport-level failures surface as errors, and callers then fall
/// back to canned data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummarizationProvider: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<RawSummary, Error>;

    /// Unique lowercase identifier for this provider.
    fn provider_id(&self) -> &str;
}
