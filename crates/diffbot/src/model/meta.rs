// ABOUTME: Meta object holding the page's meta tags as returned by Diffbot.
// ABOUTME: Exposes OpenGraph, Twitter card, schema.org microdata and oEmbed sub-objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A free-form group of meta values (e.g. all `og:*` tags).
pub type MetaGroup = BTreeMap<String, Value>;

/// Full contents of a page's meta tags.
///
/// Keys other than the well-known groups are kept in [`Meta::other`] so the
/// object encodes back to the same shape it was decoded from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "title", skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "og", skip_serializing_if = "Option::is_none")]
    og: Option<MetaGroup>,
    #[serde(rename = "twitter", skip_serializing_if = "Option::is_none")]
    twitter: Option<MetaGroup>,
    #[serde(rename = "microdata", skip_serializing_if = "Option::is_none")]
    microdata: Option<Value>,
    #[serde(rename = "oembed", skip_serializing_if = "Option::is_none")]
    oembed: Option<MetaGroup>,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

impl Meta {
    /// Content of the page's `<title>` element.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// OpenGraph tags, keyed as sent (e.g. `og:title`).
    pub fn og(&self) -> Option<&MetaGroup> {
        self.og.as_ref()
    }

    /// Twitter card tags.
    pub fn twitter(&self) -> Option<&MetaGroup> {
        self.twitter.as_ref()
    }

    /// schema.org microdata. Diffbot sends either an object or an array here.
    pub fn microdata(&self) -> Option<&Value> {
        self.microdata.as_ref()
    }

    /// oEmbed metadata, if the page advertises an oEmbed endpoint.
    pub fn oembed(&self) -> Option<&MetaGroup> {
        self.oembed.as_ref()
    }

    /// Every other meta key, such as `description` or `keywords`.
    pub fn other(&self) -> &BTreeMap<String, Value> {
        &self.other
    }

    /// Look up a plain meta value by name, returning it only if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.other.get(name).and_then(Value::as_str)
    }
}
