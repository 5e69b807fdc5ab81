// ABOUTME: PageType enum naming the kind of page Diffbot classified a URL as.
// ABOUTME: Unrecognized wire values decode to Unknown rather than failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The page classification returned in the `type` key of an API result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Article,
    FrontPage,
    Product,
    Image,
    Video,
    Discussion,
    Event,
    Location,
    Faq,
    Profile,
    Recipe,
    Download,
    Serp,
    Other,
    #[serde(other)]
    Unknown,
}

impl PageType {
    /// The wire value of this page type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Article => "article",
            PageType::FrontPage => "frontpage",
            PageType::Product => "product",
            PageType::Image => "image",
            PageType::Video => "video",
            PageType::Discussion => "discussion",
            PageType::Event => "event",
            PageType::Location => "location",
            PageType::Faq => "faq",
            PageType::Profile => "profile",
            PageType::Recipe => "recipe",
            PageType::Download => "download",
            PageType::Serp => "serp",
            PageType::Other => "other",
            PageType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
