//! IBM watsonx.ai text-generation gateway.
//!
//! Thin HTTP client for the watsonx.ai generation endpoint used to turn a
//! meeting transcript into a structured raw summary. One request per call,
//! no retries; callers apply the fallback policy on failure.

use crate::error::Error;
use crate::parse::parse_summary_response;
use crate::traits::SummarizationProvider;
use async_trait::async_trait;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GENERATION_PATH: &str = "/ml/v1/text/generation";
const DEFAULT_MODEL_ID: &str = "meta-llama/llama-2-70b-chat";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Request body for the text-generation endpoint.
#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model_id: &'a str,
    input: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
    top_p: f64,
    repetition_penalty: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 1000,
            temperature: 0.3,
            top_p: 0.9,
            repetition_penalty: 1.1,
        }
    }
}

/// Response from the text-generation endpoint. The service has shipped two
/// shapes; both are accepted.
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    results: Vec<GenerationResult>,
    #[serde(default)]
    generated_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerationResult {
    #[serde(default)]
    generated_text: String,
}

impl GenerationResponse {
    fn into_text(self) -> Option<String> {
        if let Some(result) = self.results.into_iter().next() {
            Some(result.generated_text)
        } else {
            self.generated_text
        }
    }
}

/// watsonx.ai API client.
pub struct WatsonxClient {
    client: reqwest::Client,
    base_url: String,
    model_id: String,
}

impl WatsonxClient {
    /// Create a new client with the given API key, project id, and base URL.
    pub fn new(api_key: &str, project_id: &str, base_url: &str) -> Result<Self, Error> {
        let mut headers = reqwest::header::HeaderMap::new();

        let bearer = format!("Bearer {api_key}");
        let mut auth_value = reqwest::header::HeaderValue::from_str(&bearer).map_err(|e| {
            warn!("Failed to create auth header: {:?}", e);
            Error::Authentication("Invalid API key format".to_string())
        })?;
        auth_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let project_value =
            reqwest::header::HeaderValue::from_str(project_id).map_err(|e| {
                warn!("Failed to create project header: {:?}", e);
                Error::Authentication("Invalid project id format".to_string())
            })?;
        headers.insert("x-ibm-project-id", project_value);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Provider(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        })
    }

    /// Override the generation model id.
    pub fn with_model_id(mut self, model_id: &str) -> Self {
        self.model_id = model_id.to_string();
        self
    }

    /// Run one generation request and return the model's text output.
    pub async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let url = format!("{}{}", self.base_url, GENERATION_PATH);
        let request = GenerationRequest {
            model_id: &self.model_id,
            input: prompt,
            parameters: GenerationParameters::default(),
        };

        debug!("Requesting watsonx generation with model {}", self.model_id);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("watsonx generation request failed: {:?}", e);
                Error::from(e)
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            let body = response.text().await.unwrap_or_default();
            error!("watsonx authentication failed: {status} - {body}");
            return Err(Error::Authentication(
                "Check the configured API key and project id".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("watsonx API: {status} - {body}");
            return Err(Error::Provider(body));
        }

        let generation: GenerationResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse watsonx response: {:?}", e);
            Error::Parse("Invalid response from watsonx".to_string())
        })?;

        generation
            .into_text()
            .ok_or_else(|| Error::Parse("Response carried no generated text".to_string()))
    }
}

/// Build the structured summarization prompt for a transcript.
pub fn summarization_prompt(transcript: &str) -> String {
    format!(
        r#"Please analyze the following meeting transcript and provide a structured summary with the following sections:

TRANSCRIPT:
{transcript}

Please provide your analysis in the following JSON format:
{{
    "summary": "A concise 2-3 sentence summary of the main meeting purpose and outcomes",
    "topics_discussed": ["Topic 1", "Topic 2", "Topic 3"],
    "key_decisions": ["Decision 1", "Decision 2"],
    "action_items": [
        {{
            "task": "Description of the task",
            "owner": "Person responsible",
            "deadline": "Due date if mentioned",
            "priority": "High/Medium/Low"
        }}
    ],
    "next_steps": "What should happen next"
}}

Focus on extracting actionable items, identifying who is responsible for what, and capturing any deadlines or important decisions made during the meeting."#
    )
}

#[async_trait]
impl SummarizationProvider for WatsonxClient {
    /// Summarize a transcript via one generation call.
    ///
    /// Malformed model output degrades inside [`parse_summary_response`];
    /// only transport-level failures surface as errors.
    async fn summarize(&self, transcript: &str) -> Result<summary_engine::RawSummary, Error> {
        let prompt = summarization_prompt(transcript);
        let generated = self.generate(&prompt).await?;
        Ok(parse_summary_response(&generated))
    }

    fn provider_id(&self) -> &str {
        "watsonx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> WatsonxClient {
        WatsonxClient::new("test-key", "test-project", base_url).unwrap()
    }

    #[tokio::test]
    async fn test_summarize_parses_results_shape() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "results": [{
                "generated_text": r#"{"summary": "Kickoff.", "topics_discussed": ["Scope"]}"#
            }]
        });
        let mock = server
            .mock("POST", GENERATION_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let summary = client(&server.url()).summarize("transcript").await.unwrap();

        mock.assert_async().await;
        assert_eq!(summary.summary, "Kickoff.");
        assert_eq!(summary.topics_discussed, vec!["Scope"]);
    }

    #[tokio::test]
    async fn test_summarize_accepts_flat_generated_text_shape() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "generated_text": r#"{"summary": "Flat shape."}"#
        });
        server
            .mock("POST", GENERATION_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let summary = client(&server.url()).summarize("transcript").await.unwrap();

        assert_eq!(summary.summary, "Flat shape.");
    }

    #[tokio::test]
    async fn test_unparseable_model_output_degrades_not_errors() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "results": [{ "generated_text": "I could not produce JSON, sorry." }]
        });
        server
            .mock("POST", GENERATION_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let summary = client(&server.url()).summarize("transcript").await.unwrap();

        assert_eq!(summary.summary, "I could not produce JSON, sorry.");
        assert_eq!(summary.topics_discussed, vec!["General discussion"]);
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", GENERATION_PATH)
            .with_status(401)
            .with_body("unauthorized")
            .create_async()
            .await;

        let result = client(&server.url()).summarize("transcript").await;

        assert!(matches!(result, Err(Error::Authentication(_))));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_provider_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", GENERATION_PATH)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let result = client(&server.url()).summarize("transcript").await;

        assert!(matches!(result, Err(Error::Provider(_))));
    }

    #[test]
    fn test_prompt_embeds_the_transcript() {
        let prompt = summarization_prompt("John: hello.");

        assert!(prompt.contains("TRANSCRIPT:\nJohn: hello."));
        assert!(prompt.contains(r#""priority": "High/Medium/Low""#));
    }
}
