use crate::error::ApiError;
use reqwest::header::HeaderValue;

/// Builds the `Authorization` header value for a bearer token.
///
/// The value is marked sensitive so it is redacted from `Debug` output.
pub fn bearer_header(token: &str) -> Result<HeaderValue, ApiError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
        .map_err(|_| ApiError::InvalidData("API token contains invalid header characters".to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}
