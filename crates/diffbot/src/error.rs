// ABOUTME: Error types for the Diffbot client including the ErrorCode enum and DiffbotError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the categories of client failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidUrl,
    InvalidField,
    Config,
    Request,
    Timeout,
    Api,
    Decode,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidUrl => "invalid URL",
            ErrorCode::InvalidField => "invalid field",
            ErrorCode::Config => "configuration error",
            ErrorCode::Request => "request error",
            ErrorCode::Timeout => "timeout",
            ErrorCode::Api => "API error",
            ErrorCode::Decode => "decode error",
        };
        write!(f, "{}", s)
    }
}

/// The error type for every client operation.
///
/// `url` is the page URL being analyzed (not the API endpoint), so that
/// error messages never leak the API token.
#[derive(Debug, thiserror::Error)]
pub struct DiffbotError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    /// HTTP status of the API response, when one was received.
    pub status: Option<u16>,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for DiffbotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diffbot: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(status) = self.status {
            write!(f, " (status {})", status)?;
        }
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl DiffbotError {
    fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            status: None,
            source,
        }
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create an InvalidField error for a field selection token.
    pub fn invalid_field(field: impl Into<String>, op: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            ErrorCode::InvalidField,
            String::new(),
            op,
            Some(anyhow::anyhow!("unknown article field {:?}", field)),
        )
    }

    /// Create a Config error.
    pub fn config(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self::new(ErrorCode::Config, String::new(), op, source)
    }

    /// Create a Request error.
    pub fn request(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Request, url, op, source)
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Timeout, url, op, source)
    }

    /// Create an Api error reported by the remote service.
    pub fn api(
        url: impl Into<String>,
        op: impl Into<String>,
        status: Option<u16>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            status,
            ..Self::new(ErrorCode::Api, url, op, source)
        }
    }

    /// Create a Decode error.
    pub fn decode(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Decode, url, op, source)
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is an InvalidField error.
    pub fn is_invalid_field(&self) -> bool {
        self.code == ErrorCode::InvalidField
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        self.code == ErrorCode::Config
    }

    /// Returns true if this is a Request error.
    pub fn is_request(&self) -> bool {
        self.code == ErrorCode::Request
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// Returns true if this is an Api error.
    pub fn is_api(&self) -> bool {
        self.code == ErrorCode::Api
    }

    /// Returns true if this is a Decode error.
    pub fn is_decode(&self) -> bool {
        self.code == ErrorCode::Decode
    }
}
