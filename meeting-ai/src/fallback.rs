//! Fallback policy for provider failures.
//!
//! The enrichment engine must always receive well-formed input, so every
//! provider failure is absorbed here and replaced with canned demo data.
//! Worst case the user sees a degraded but complete summary; errors are
//! logged, never propagated.

use crate::mock;
use crate::traits::{SummarizationProvider, TranscriptionProvider};
use log::warn;
use summary_engine::RawSummary;

/// Transcribe with the given provider, substituting the demo transcript on
/// any failure.
pub async fn transcribe_or_fallback(
    provider: &dyn TranscriptionProvider,
    audio_ref: &str,
) -> String {
    match provider.transcribe(audio_ref).await {
        Ok(transcript) => transcript,
        Err(e) => {
            warn!(
                "Transcription via {} failed, using demo transcript: {e}",
                provider.provider_id()
            );
            mock::demo_transcript().to_string()
        }
    }
}

/// Summarize with the given provider, substituting the demo summary on any
/// failure.
pub async fn summarize_or_fallback(
    provider: &dyn SummarizationProvider,
    transcript: &str,
) -> RawSummary {
    match provider.summarize(transcript).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!(
                "Summarization via {} failed, using demo summary: {e}",
                provider.provider_id()
            );
            mock::demo_summary()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockSummarizationProvider, MockTranscriptionProvider};
    use crate::Error;

    #[tokio::test]
    async fn test_successful_summarization_passes_through() {
        let mut provider = MockSummarizationProvider::new();
        provider.expect_summarize().returning(|_| {
            Ok(RawSummary {
                summary: "Real output".to_string(),
                ..Default::default()
            })
        });

        let summary = summarize_or_fallback(&provider, "transcript").await;

        assert_eq!(summary.summary, "Real output");
    }

    #[tokio::test]
    async fn test_failed_summarization_yields_demo_summary() {
        let mut provider = MockSummarizationProvider::new();
        provider
            .expect_summarize()
            .returning(|_| Err(Error::Network("connection refused".to_string())));
        provider.expect_provider_id().return_const("test".to_string());

        let summary = summarize_or_fallback(&provider, "transcript").await;

        assert_eq!(summary, mock::demo_summary());
    }

    #[tokio::test]
    async fn test_failed_transcription_yields_demo_transcript() {
        let mut provider = MockTranscriptionProvider::new();
        provider
            .expect_transcribe()
            .returning(|_| Err(Error::Timeout("120s elapsed".to_string())));
        provider.expect_provider_id().return_const("test".to_string());

        let transcript = transcribe_or_fallback(&provider, "meeting.wav").await;

        assert_eq!(transcript, mock::demo_transcript());
    }
}
