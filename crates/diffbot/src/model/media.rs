// ABOUTME: Video and Image media items attached to an extracted article.
// ABOUTME: Read-only records decoded from the `videos` and `images` arrays.

use serde::{Deserialize, Serialize};

/// A video detected in an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "pixelHeight", skip_serializing_if = "Option::is_none")]
    pixel_height: Option<u32>,
    #[serde(rename = "pixelWidth", skip_serializing_if = "Option::is_none")]
    pixel_width: Option<u32>,
    #[serde(rename = "primary", skip_serializing_if = "Option::is_none")]
    primary: Option<bool>,
}

impl Video {
    /// Direct URL of the video.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn pixel_height(&self) -> Option<u32> {
        self.pixel_height
    }

    pub fn pixel_width(&self) -> Option<u32> {
        self.pixel_width
    }

    /// True when Diffbot judged this the main video of the article.
    pub fn is_primary(&self) -> bool {
        self.primary.unwrap_or(false)
    }
}

/// An image detected in an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "pixelHeight", skip_serializing_if = "Option::is_none")]
    pixel_height: Option<u32>,
    #[serde(rename = "pixelWidth", skip_serializing_if = "Option::is_none")]
    pixel_width: Option<u32>,
    #[serde(rename = "caption", skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(rename = "primary", skip_serializing_if = "Option::is_none")]
    primary: Option<bool>,
}

impl Image {
    /// Direct URL of the image.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn pixel_height(&self) -> Option<u32> {
        self.pixel_height
    }

    pub fn pixel_width(&self) -> Option<u32> {
        self.pixel_width
    }

    /// Caption text, if one was found next to the image.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// True when Diffbot judged this the main image of the article.
    pub fn is_primary(&self) -> bool {
        self.primary.unwrap_or(false)
    }
}
