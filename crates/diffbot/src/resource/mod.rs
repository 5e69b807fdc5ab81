// ABOUTME: Resource handling for Diffbot API calls: sending requests and decoding responses.
// ABOUTME: Maps transport failures, HTTP statuses and error envelopes onto DiffbotError.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::DiffbotError;

/// Longest body excerpt quoted in an error message.
const MAX_ERROR_EXCERPT: usize = 200;

/// Raw response of an API call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the server labelled the body as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|mime| {
                let mime = mime.trim().to_ascii_lowercase();
                mime == "application/json" || mime.ends_with("+json")
            })
            .unwrap_or(false)
    }
}

/// Failure body returned by the service, e.g. `{"error":"...","errorCode":401}`.
///
/// `errorCode` is kept loose: the service has sent it both as a number and
/// as a string.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    #[serde(rename = "errorCode")]
    error_code: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// The envelope's code as an HTTP-style status, when it reads as one.
    fn status(&self) -> Option<u16> {
        match self.error_code.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
            serde_json::Value::String(s) => s.trim().parse::<u16>().ok(),
            _ => None,
        }
    }
}

/// Send a prepared request and capture the status and body.
///
/// `page_url` is the URL being analyzed and is only used for error context.
pub async fn send(
    request: reqwest::RequestBuilder,
    page_url: &str,
    op: &str,
) -> Result<ApiResponse, DiffbotError> {
    let response = request.send().await.map_err(|e| {
        // reqwest includes the request URL, which carries the token
        let e = e.without_url();
        if e.is_timeout() {
            DiffbotError::timeout(page_url, op, Some(anyhow::Error::new(e)))
        } else {
            DiffbotError::request(page_url, op, Some(anyhow::Error::new(e)))
        }
    })?;

    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let body = response.bytes().await.map_err(|e| {
        let e = e.without_url();
        if e.is_timeout() {
            DiffbotError::timeout(page_url, op, Some(anyhow::Error::new(e)))
        } else {
            DiffbotError::request(page_url, op, Some(anyhow::Error::new(e)))
        }
    })?;

    debug!(status, bytes = body.len(), url = page_url, "diffbot response received");

    Ok(ApiResponse {
        status,
        content_type,
        body,
    })
}

/// Decode a response body into a model type.
///
/// Error envelopes and non-2xx statuses become `Api` errors; a body that
/// does not match `T` becomes a `Decode` error.
pub fn decode<T: DeserializeOwned>(
    response: &ApiResponse,
    page_url: &str,
    op: &str,
) -> Result<T, DiffbotError> {
    let envelope = serde_json::from_slice::<ErrorEnvelope>(&response.body).ok();

    if let Some(envelope) = envelope {
        if let Some(message) = &envelope.error {
            let status = envelope.status().or(Some(response.status));
            warn!(status = ?status, url = page_url, "diffbot API error: {}", message);
            return Err(DiffbotError::api(
                page_url,
                op,
                status,
                Some(anyhow::anyhow!(message.clone())),
            ));
        }
    }

    if !response.is_success() {
        warn!(
            status = response.status,
            content_type = response.content_type.as_deref().unwrap_or(""),
            url = page_url,
            "diffbot API returned non-success status"
        );
        let source = error_detail(response).map(|detail| anyhow::anyhow!(detail));
        return Err(DiffbotError::api(
            page_url,
            op,
            Some(response.status),
            source,
        ));
    }

    serde_json::from_slice(&response.body)
        .map_err(|e| DiffbotError::decode(page_url, op, Some(anyhow::Error::new(e))))
}

/// Text quoted in a non-2xx error. Plain text and JSON bodies are quoted;
/// other content types (e.g. an HTML error page) are only named.
fn error_detail(response: &ApiResponse) -> Option<String> {
    match response.content_type.as_deref() {
        Some(ct)
            if !response.is_json()
                && !ct.trim_start().to_ascii_lowercase().starts_with("text/plain") =>
        {
            Some(format!("{} body ({} bytes)", ct, response.body.len()))
        }
        _ => {
            let excerpt = body_excerpt(&response.body);
            (!excerpt.is_empty()).then_some(excerpt)
        }
    }
}

fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    match text.char_indices().nth(MAX_ERROR_EXCERPT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
