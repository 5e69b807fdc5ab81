// ABOUTME: Article and Comments structs holding the result of a Diffbot Article API extraction.
// ABOUTME: Read-only records with getters; tags are handed out as an owned copy.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Categories, Image, Meta, Model, PageType, QueryString, Video};

/// The result of an article extraction by Diffbot (Article API).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "text", skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "title", skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "date", skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(rename = "author", skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(rename = "videos", skip_serializing_if = "Option::is_none")]
    videos: Option<Vec<Video>>,
    #[serde(rename = "images", skip_serializing_if = "Option::is_none")]
    images: Option<Vec<Image>>,
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "resolved_url", skip_serializing_if = "Option::is_none")]
    resolved_url: Option<String>,
    #[serde(rename = "icon", skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(rename = "html", skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(rename = "summary", skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(rename = "categories", skip_serializing_if = "Option::is_none")]
    categories: Option<Categories>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    page_type: Option<PageType>,
    #[serde(rename = "links", skip_serializing_if = "Option::is_none")]
    links: Option<Vec<String>>,
    #[serde(rename = "humanLanguage", skip_serializing_if = "Option::is_none")]
    human_language: Option<String>,
    #[serde(rename = "meta", skip_serializing_if = "Option::is_none")]
    meta: Option<Meta>,
    #[serde(rename = "numPages", skip_serializing_if = "Option::is_none")]
    num_pages: Option<u32>,
    #[serde(rename = "querystring", skip_serializing_if = "Option::is_none")]
    querystring: Option<QueryString>,
    #[serde(rename = "comments", skip_serializing_if = "Option::is_none")]
    comments: Option<Comments>,
}

impl Article {
    /// Decode an article from a JSON string. Unknown keys are ignored.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Decode an article from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Encode the article back to its wire representation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The plain-text content of the extracted article.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The article date as sent by the service, if one was detected.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// The article date interpreted as a timestamp.
    ///
    /// Tries RFC 2822 (the format the v2 API emits) and then RFC 3339.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.as_deref()?.trim();
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn videos(&self) -> Option<&[Video]> {
        self.videos.as_deref()
    }

    pub fn images(&self) -> Option<&[Image]> {
        self.images.as_deref()
    }

    /// The resolved URL, present only when it differs from the submitted
    /// URL (e.g. link shortening services).
    pub fn resolved_url(&self) -> Option<&str> {
        self.resolved_url.as_deref()
    }

    /// The page favicon.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// The article tags. Only returned when requested through field selection.
    ///
    /// Always an owned copy; empty when the service sent no tags.
    pub fn tags(&self) -> Vec<String> {
        self.tags.clone().unwrap_or_default()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Category scores. Only returned when requested through field selection.
    pub fn categories(&self) -> Option<&Categories> {
        self.categories.as_ref()
    }

    /// All anchor `href` values found on the page. Only returned when
    /// requested through field selection.
    pub fn links(&self) -> Option<&[String]> {
        self.links.as_deref()
    }

    /// Two-letter ISO 639-1 code of the page's human language.
    pub fn human_language(&self) -> Option<&str> {
        self.human_language.as_deref()
    }

    /// Full contents of the page meta tags. Only returned when requested
    /// through field selection.
    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Number of pages concatenated to form the text and html.
    pub fn num_pages(&self) -> Option<u32> {
        self.num_pages
    }

    /// The URL query string parameters. Only returned when requested through
    /// field selection.
    pub fn querystring(&self) -> Option<&QueryString> {
        self.querystring.as_ref()
    }

    /// Comment count. Only returned when comments were requested.
    pub fn comments(&self) -> Option<&Comments> {
        self.comments.as_ref()
    }
}

impl Model for Article {
    fn page_type(&self) -> Option<PageType> {
        self.page_type
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article [url={}]", self.url.as_deref().unwrap_or("null"))
    }
}

/// Comments information extracted from an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comments {
    /// An absent `count` key decodes to 0.
    #[serde(rename = "count", default)]
    count: u64,
}

impl Comments {
    /// The number of comments on the article.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl fmt::Display for Comments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comments [count={}]", self.count)
    }
}
