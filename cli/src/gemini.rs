//! Gemini `generateContent` client used as the text editor.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use repdf::{EditRequest, Error, Result, TextEditor};

/// Default API host.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Editor that sends the filled prompt to a Gemini model.
pub struct GeminiEditor {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiEditor {
    /// Create a client for the given key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Edit(format!("HTTP client setup failed: {}", e)))?;
        let runtime = tokio::runtime::Runtime::new()?;
        Ok(Self {
            client,
            runtime,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Use a different API host.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn url(&self) -> String {
        generate_url(&self.endpoint, &self.model)
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        log::debug!("POST {} ({} prompt chars)", self.url(), prompt.chars().count());
        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Edit(format!("request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Edit(format!("reading response failed: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Edit(error_message(status.as_u16(), &text)));
        }
        reply_text(&text)
    }
}

impl TextEditor for GeminiEditor {
    fn name(&self) -> &str {
        &self.model
    }

    fn edit(&self, request: &EditRequest) -> Result<String> {
        self.runtime.block_on(self.generate(&request.prompt))
    }
}

fn generate_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    )
}

fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => format!("service returned {}: {}", status, parsed.error.message),
        Err(_) => format!("service returned {}", status),
    }
}

/// Text of the first candidate, trimmed.
fn reply_text(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| Error::Edit(format!("malformed response: {}", e)))?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::Edit("response has no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();
    let text = text.trim();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(Error::Edit(format!(
            "response has no text (finish reason: {})",
            reason
        )));
    }
    Ok(text.to_string())
}
