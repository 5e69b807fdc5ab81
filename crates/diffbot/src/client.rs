// ABOUTME: The main Client struct for Diffbot that issues Article API requests.
// ABOUTME: Provides the Analyze request builder with field selection, comments, timeout and HTML upload.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::DiffbotError;
use crate::model::Article;
use crate::options::{ClientBuilder, Options};
use crate::resource::{decode, send};
use crate::schema::Fields;

/// The Diffbot API client.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Result<Self, DiffbotError> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .map_err(|e| {
                    DiffbotError::config("Client", Some(anyhow::Error::new(e)))
                })?,
        };

        Ok(Self { opts, http_client })
    }

    /// Start an Article API request for the given page URL.
    pub fn analyze(&self, url: impl Into<String>) -> Analyze<'_> {
        Analyze {
            client: self,
            url: url.into(),
            fields: Fields::new(),
            comments: false,
            timeout: None,
            html: None,
        }
    }

    fn endpoint(&self, api: &str) -> Result<Url, DiffbotError> {
        let base = self.opts.api_base.trim_end_matches('/');
        let version = self.opts.api_version.trim_matches('/');
        Url::parse(&format!("{}/{}/{}", base, version, api)).map_err(|e| {
            DiffbotError::config(
                "Endpoint",
                Some(anyhow::anyhow!("invalid API base {:?}: {}", self.opts.api_base, e)),
            )
        })
    }

    fn token(&self) -> Result<&str, DiffbotError> {
        self.opts
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                DiffbotError::config("Token", Some(anyhow::anyhow!("no Diffbot token configured")))
            })
    }
}

/// Builder for a single Article API call.
#[derive(Debug, Clone)]
pub struct Analyze<'a> {
    client: &'a Client,
    url: String,
    fields: Fields,
    comments: bool,
    timeout: Option<Duration>,
    html: Option<String>,
}

impl Analyze<'_> {
    /// Request optional fields such as `tags`, `meta` or `querystring`.
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    /// Ask the service to count comments on the page.
    pub fn with_comments(mut self) -> Self {
        self.comments = true;
        self
    }

    /// Server-side extraction timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send this HTML for extraction instead of having the service fetch the URL.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Issue the request and decode the extracted article.
    pub async fn send(self) -> Result<Article, DiffbotError> {
        const OP: &str = "Analyze";

        if self.url.is_empty() {
            return Err(DiffbotError::invalid_url(&self.url, OP, None));
        }
        let page_url = Url::parse(&self.url).map_err(|e| {
            DiffbotError::invalid_url(&self.url, OP, Some(anyhow::anyhow!("invalid URL: {}", e)))
        })?;
        if page_url.scheme() != "http" && page_url.scheme() != "https" {
            return Err(DiffbotError::invalid_url(
                &self.url,
                OP,
                Some(anyhow::anyhow!("scheme must be http or https")),
            ));
        }

        let token = self.client.token()?;
        let mut endpoint = self.client.endpoint("article")?;
        {
            let mut query = endpoint.query_pairs_mut();
            query.append_pair("token", token);
            query.append_pair("url", &self.url);
            if !self.fields.is_empty() {
                query.append_pair("fields", &self.fields.to_string());
            }
            if self.comments {
                query.append_pair("comments", "true");
            }
            if let Some(timeout) = self.timeout {
                query.append_pair("timeout", &timeout.as_millis().to_string());
            }
        }

        let http = &self.client.http_client;
        let mut request = match self.html {
            Some(html) => http
                .post(endpoint)
                .header(reqwest::header::CONTENT_TYPE, "text/html; charset=utf-8")
                .body(html),
            None => http.get(endpoint),
        };
        for (key, value) in &self.client.opts.headers {
            request = request.header(key, value);
        }

        debug!(
            url = self.url.as_str(),
            fields = %self.fields,
            comments = self.comments,
            "sending diffbot article request"
        );

        let response = send(request, &self.url, OP).await?;
        decode(&response, &self.url, OP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::{Model, PageType};
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    const ARTICLE_BODY: &str = r#"{
        "type": "article",
        "url": "http://example.com/post",
        "title": "Hello",
        "text": "Hello world.",
        "tags": ["greeting"],
        "numPages": 1
    }"#;

    fn client_for(server: &MockServer) -> Client {
        Client::builder()
            .token("tok")
            .api_base(server.base_url())
            .build()
            .expect("client should build")
    }

    #[tokio::test]
    async fn analyze_sends_token_and_url() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/article")
                .query_param("token", "tok")
                .query_param("url", "http://example.com/post");
            then.status(200)
                .header("content-type", "application/json")
                .body(ARTICLE_BODY);
        });

        let article = client_for(&server)
            .analyze("http://example.com/post")
            .send()
            .await
            .expect("analyze should succeed");
        mock.assert();

        assert_eq!(article.title(), Some("Hello"));
        assert_eq!(article.page_type(), Some(PageType::Article));
        assert_eq!(article.url(), Some("http://example.com/post"));
        assert_eq!(article.tags(), vec!["greeting"]);
    }

    #[tokio::test]
    async fn analyze_sends_url_as_given() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/article")
                .query_param("url", "http://example.com");
            then.status(200).body(r#"{"url":"http://example.com"}"#);
        });

        let article = client_for(&server)
            .analyze("http://example.com")
            .send()
            .await
            .expect("analyze should succeed");
        mock.assert();
        assert_eq!(article.url(), Some("http://example.com"));
    }

    #[tokio::test]
    async fn analyze_sends_fields_comments_and_timeout() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/article")
                .query_param("fields", "tags,humanLanguage,images(*)")
                .query_param("comments", "true")
                .query_param("timeout", "5000");
            then.status(200).body(r#"{"comments":{"count":4}}"#);
        });

        let fields = Fields::parse("tags,human_language,images(*)").unwrap();
        let article = client_for(&server)
            .analyze("http://example.com/post")
            .with_fields(fields)
            .with_comments()
            .with_timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("analyze should succeed");
        mock.assert();

        assert_eq!(article.comments().map(|c| c.count()), Some(4));
    }

    #[tokio::test]
    async fn analyze_posts_html_when_given() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v2/article")
                .query_param("url", "http://example.com/post")
                .header("content-type", "text/html; charset=utf-8")
                .body("<html><body><p>Hi</p></body></html>");
            then.status(200).body(ARTICLE_BODY);
        });

        let article = client_for(&server)
            .analyze("http://example.com/post")
            .with_html("<html><body><p>Hi</p></body></html>")
            .send()
            .await
            .expect("analyze should succeed");
        mock.assert();
        assert_eq!(article.text(), Some("Hello world."));
    }

    #[tokio::test]
    async fn analyze_sends_custom_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v2/article").header("x-trace", "abc");
            then.status(200).body("{}");
        });

        let client = Client::builder()
            .token("tok")
            .api_base(server.base_url())
            .header("x-trace", "abc")
            .build()
            .unwrap();
        client.analyze("http://example.com").send().await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn error_envelope_becomes_api_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/article");
            then.status(401)
                .body(r#"{"error":"Not authorized API token.","errorCode":401}"#);
        });

        let err = client_for(&server)
            .analyze("http://example.com/post")
            .send()
            .await
            .expect_err("should fail");
        assert_eq!(err.code, ErrorCode::Api);
        assert_eq!(err.status, Some(401));
        assert!(!err.to_string().contains("token=tok"));
    }

    #[tokio::test]
    async fn malformed_body_becomes_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/article");
            then.status(200).body(r#"{"numPages":"many"}"#);
        });

        let err = client_for(&server)
            .analyze("http://example.com/post")
            .send()
            .await
            .expect_err("should fail");
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn client_timeout_becomes_timeout_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v2/article");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .body("{}");
        });

        let client = Client::builder()
            .token("tok")
            .api_base(server.base_url())
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let err = client
            .analyze("http://example.com/post")
            .send()
            .await
            .expect_err("should time out");
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn rejects_bad_urls_before_sending() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.path("/v2/article");
            then.status(200).body("{}");
        });
        let client = client_for(&server);

        for bad in ["", "not a url", "ftp://example.com/file"] {
            let err = client.analyze(bad).send().await.expect_err("should fail");
            assert!(err.is_invalid_url(), "{bad:?} gave {err}");
        }
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn missing_token_is_config_error() {
        let server = MockServer::start();
        let client = Client::builder()
            .api_base(server.base_url())
            .build()
            .unwrap();

        let err = client
            .analyze("http://example.com/post")
            .send()
            .await
            .expect_err("should fail");
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn honours_api_version_and_trailing_slash() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v3/article");
            then.status(200).body("{}");
        });

        let client = Client::builder()
            .token("tok")
            .api_base(format!("{}/", server.base_url()))
            .api_version("v3")
            .build()
            .unwrap();
        client.analyze("http://example.com").send().await.unwrap();
        mock.assert();
    }
}
