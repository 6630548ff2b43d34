//! HTTP utilities for control plane REST calls

use super::error::{ApiError, ApiResult};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips non-printable characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..MAX_LOG_BODY_LENGTH],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for control plane API calls
///
/// Authenticates every request with the session's bearer token and maps
/// 404/400 responses to distinguishable error kinds.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    token: String,
}

impl HttpClient {
    /// Create a new HTTP client holding a pre-issued bearer token
    pub fn new(token: String) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(format!("ostack/{}", crate::VERSION))
            .build()?;

        Ok(Self { client, token })
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> ApiResult<Value> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).bearer_auth(&self.token).send().await?;
        handle_response(url, response).await
    }

    /// Make a POST request with an optional JSON body
    pub async fn post(&self, url: &str, body: Option<&Value>) -> ApiResult<Value> {
        tracing::debug!("POST {}", url);

        let mut request = self.client.post(url).bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        handle_response(url, response).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put(&self, url: &str, body: &Value) -> ApiResult<Value> {
        tracing::debug!("PUT {}", url);

        let response = self
            .client
            .put(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        handle_response(url, response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str) -> ApiResult<Value> {
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        handle_response(url, response).await
    }
}

/// Read the response body and classify failures.
///
/// 404 and 400 become their own error kinds; the resolver's fallback
/// path depends on being able to tell them apart from other failures.
async fn handle_response(url: &str, response: reqwest::Response) -> ApiResult<Value> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        // Only log sanitized/truncated error body to avoid leaking sensitive data
        tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));

        return Err(match status {
            StatusCode::NOT_FOUND => ApiError::NotFound {
                url: url.to_string(),
            },
            StatusCode::BAD_REQUEST => ApiError::BadRequest {
                url: url.to_string(),
                message: sanitize_for_log(&body),
            },
            _ => ApiError::Status {
                status,
                message: sanitize_for_log(&body),
            },
        });
    }

    // DELETE and property-removal endpoints return no body
    if body.is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&body)?)
}
