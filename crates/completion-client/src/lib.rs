use crate::auth::bearer_header;
use crate::prompt::build_prompt;
use crate::responses::{parse_generated_text, ApiErrorResponse, CompletionRequest};
use async_trait::async_trait;
use configuration::AssistantConfig;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use std::time::Duration;

mod auth;
pub mod error;
pub mod prompt;
pub mod responses;

// --- Public API ---
pub use error::ApiError;
pub use responses::GeneratedText;

/// The abstract interface for a hosted text-completion model.
/// The CLI and the web server only see this trait, so tests can swap in a fake.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends a prompt and returns the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}

/// A concrete implementation of the `CompletionClient` for the Hugging Face
/// inference API (or any endpoint that speaks the same JSON shape).
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HuggingFaceClient {
    /// Creates a new `HuggingFaceClient`.
    ///
    /// Returns `ApiError::NotConfigured` if no token is set, allowing callers to
    /// disable the assistant gracefully.
    pub fn new(config: &AssistantConfig) -> Result<Self, ApiError> {
        if config.token.trim().is_empty() {
            tracing::warn!("Assistant is not configured (missing API token).");
            return Err(ApiError::NotConfigured);
        }

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_header(&config.token)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for HuggingFaceClient {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let payload = CompletionRequest { inputs: prompt };

        let response = self.client.post(&self.endpoint).json(&payload).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            tracing::warn!(status = status.as_u16(), %message, "Completion request failed.");
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        parse_generated_text(&text)
    }
}

/// Asks the assistant a question about a campaign, given its rendered KPI context.
///
/// An empty or whitespace-only question is rejected without a network call.
pub async fn ask_about_kpis(
    client: &dyn CompletionClient,
    context: &str,
    question: &str,
) -> Result<String, ApiError> {
    if question.trim().is_empty() {
        return Err(ApiError::EmptyQuestion);
    }

    let prompt = build_prompt(context, question);
    tracing::info!(prompt_len = prompt.len(), "Sending question to the assistant.");

    let answer = client.complete(&prompt).await?;
    tracing::debug!(answer_len = answer.len(), "Assistant answered.");
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every prompt and replies with a canned answer.
    struct RecordingClient {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("Raise your price.".to_string())
        }
    }

    #[test]
    fn missing_token_is_not_configured() {
        let config = AssistantConfig::default();
        assert!(matches!(HuggingFaceClient::new(&config), Err(ApiError::NotConfigured)));
    }

    #[tokio::test]
    async fn blank_question_never_reaches_the_client() {
        let client = RecordingClient { prompts: Mutex::new(Vec::new()) };

        let err = ask_about_kpis(&client, "CPA: 5.00", "   ").await.unwrap_err();

        assert!(matches!(err, ApiError::EmptyQuestion));
        assert!(client.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn question_is_wrapped_with_context() {
        let client = RecordingClient { prompts: Mutex::new(Vec::new()) };

        let answer = ask_about_kpis(&client, "ROAS: 10.00x", "What now?").await.unwrap();

        assert_eq!(answer, "Raise your price.");
        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("ROAS: 10.00x"));
        assert!(prompts[0].ends_with("User question: What now?\nExpert answer:"));
    }
}
