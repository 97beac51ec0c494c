use log::{error, info, warn};
use meeting_ai::fallback::{summarize_or_fallback, transcribe_or_fallback};
use meeting_ai::{MockProvider, WatsonxClient};
use service::{config::Config, logging::Logger};
use summary_engine::{export, ExportFormat, RawSummary};

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    let state = service::AppState::new(config);

    let transcript = load_transcript(&state.config).await;
    info!("Transcript loaded ({} chars)", transcript.len());

    let raw = summarize(&state.config, &transcript).await;
    info!(
        "Raw summary extracted: {} topics, {} action items",
        raw.topics_discussed.len(),
        raw.action_items.len()
    );

    let enriched = state.enhancer_ref().enhance(&raw, chrono::Utc::now());

    let format = match state.config.export_format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let rendered = match export(&enriched, format) {
        Ok(rendered) => rendered,
        Err(e) => {
            error!("Failed to export summary: {e}");
            std::process::exit(1);
        }
    };

    match state.config.output_path() {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &rendered) {
                error!("Failed to write {path}: {e}");
                std::process::exit(1);
            }
            info!("Wrote {format} export to {path}");
        }
        None => println!("{rendered}"),
    }
}

/// Read the transcript from the configured file, or fall back to the
/// transcription provider (demo data in mock mode).
async fn load_transcript(config: &Config) -> String {
    if let Some(path) = config.transcript_path() {
        match std::fs::read_to_string(&path) {
            Ok(transcript) => return transcript,
            Err(e) => {
                error!("Failed to read transcript {path}: {e}");
                std::process::exit(1);
            }
        }
    }

    let audio_ref = config.audio_ref().unwrap_or_else(|| "demo".to_string());
    transcribe_or_fallback(&MockProvider, &audio_ref).await
}

/// Summarize the transcript via watsonx when credentials are configured,
/// otherwise (or on any client setup failure) via the mock provider.
async fn summarize(config: &Config, transcript: &str) -> RawSummary {
    if config.is_mock_mode() {
        info!("Mock mode enabled, using demo summarization");
        return summarize_or_fallback(&MockProvider, transcript).await;
    }

    // is_mock_mode() is false only when both credentials are present.
    let api_key = config.watsonx_api_key().unwrap_or_default();
    let project_id = config.watsonx_project_id().unwrap_or_default();

    match WatsonxClient::new(&api_key, &project_id, config.watsonx_url()) {
        Ok(client) => summarize_or_fallback(&client, transcript).await,
        Err(e) => {
            warn!("Failed to build watsonx client, using demo summarization: {e}");
            summarize_or_fallback(&MockProvider, transcript).await
        }
    }
}
