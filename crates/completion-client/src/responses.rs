use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// The JSON payload for the text-generation endpoint.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub inputs: &'a str,
}

/// One generated candidate. The service answers with an array of these.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// Represents an error response from the completion service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// Extracts the first candidate's text from a successful response body.
pub fn parse_generated_text(body: &str) -> Result<String, ApiError> {
    let candidates: Vec<GeneratedText> =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;

    candidates
        .into_iter()
        .next()
        .map(|c| c.generated_text)
        .ok_or_else(|| ApiError::InvalidData("response contained no generated text".to_string()))
}
