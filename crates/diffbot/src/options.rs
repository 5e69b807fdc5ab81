// ABOUTME: Configuration options for the Diffbot client including Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API and environment-based setup for Client instances.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::client::Client;
use crate::error::DiffbotError;

/// Default Diffbot API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.diffbot.com";

/// Default API version path segment.
pub const DEFAULT_API_VERSION: &str = "v2";

/// Environment variable holding the developer token.
pub const TOKEN_ENV: &str = "DIFFBOT_TOKEN";

/// Environment variable overriding the API endpoint.
pub const API_BASE_ENV: &str = "DIFFBOT_API_URL";

/// Configuration options for the Diffbot client.
#[derive(Debug, Clone)]
pub struct Options {
    pub token: Option<String>,
    pub api_base: String,
    pub api_version: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("diffbot-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Create a ClientBuilder seeded from `DIFFBOT_TOKEN` and `DIFFBOT_API_URL`.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(token) = env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                builder = builder.token(token.trim());
            }
        }
        if let Ok(base) = env::var(API_BASE_ENV) {
            if !base.trim().is_empty() {
                builder = builder.api_base(base.trim());
            }
        }
        builder
    }

    /// Set the developer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.opts.token = Some(token.into());
        self
    }

    /// Set the API endpoint, e.g. `https://api.diffbot.com`.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.opts.api_base = base.into();
        self
    }

    /// Set the API version path segment.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.opts.api_version = version.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. Timeout and user agent then come from that client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Result<Client, DiffbotError> {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
