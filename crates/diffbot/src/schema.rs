// ABOUTME: Explicit serialization schema mapping model attributes to Diffbot wire keys.
// ABOUTME: Also provides Fields, the validated field selection sent with Analyze requests.

use std::fmt;

use crate::error::DiffbotError;
use crate::model::{Article, Comments, Image, Video};

/// The JSON shape of a field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
    StringArray,
    ObjectArray,
    Object,
    Enumeration,
}

/// One row of a model's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust accessor name.
    pub attribute: &'static str,
    /// Literal JSON key.
    pub wire_key: &'static str,
    pub kind: FieldKind,
}

const fn field(attribute: &'static str, wire_key: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        attribute,
        wire_key,
        kind,
    }
}

pub const ARTICLE_FIELDS: &[FieldSpec] = &[
    field("text", "text", FieldKind::String),
    field("title", "title", FieldKind::String),
    field("date", "date", FieldKind::String),
    field("author", "author", FieldKind::String),
    field("videos", "videos", FieldKind::ObjectArray),
    field("images", "images", FieldKind::ObjectArray),
    field("url", "url", FieldKind::String),
    field("resolved_url", "resolved_url", FieldKind::String),
    field("icon", "icon", FieldKind::String),
    field("html", "html", FieldKind::String),
    field("tags", "tags", FieldKind::StringArray),
    field("summary", "summary", FieldKind::String),
    field("categories", "categories", FieldKind::Object),
    field("page_type", "type", FieldKind::Enumeration),
    field("links", "links", FieldKind::StringArray),
    field("human_language", "humanLanguage", FieldKind::String),
    field("meta", "meta", FieldKind::Object),
    field("num_pages", "numPages", FieldKind::Integer),
    field("querystring", "querystring", FieldKind::Object),
    field("comments", "comments", FieldKind::Object),
];

pub const COMMENTS_FIELDS: &[FieldSpec] = &[field("count", "count", FieldKind::Integer)];

pub const VIDEO_FIELDS: &[FieldSpec] = &[
    field("url", "url", FieldKind::String),
    field("pixel_height", "pixelHeight", FieldKind::Integer),
    field("pixel_width", "pixelWidth", FieldKind::Integer),
    field("primary", "primary", FieldKind::Boolean),
];

pub const IMAGE_FIELDS: &[FieldSpec] = &[
    field("url", "url", FieldKind::String),
    field("pixel_height", "pixelHeight", FieldKind::Integer),
    field("pixel_width", "pixelWidth", FieldKind::Integer),
    field("caption", "caption", FieldKind::String),
    field("primary", "primary", FieldKind::Boolean),
];

/// A model type with a published attribute/wire-key table.
pub trait Schema {
    const FIELDS: &'static [FieldSpec];

    /// Wire key for a Rust attribute name.
    fn wire_key(attribute: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|f| f.attribute == attribute)
            .map(|f| f.wire_key)
    }

    /// Rust attribute name for a wire key.
    fn attribute(wire_key: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|f| f.wire_key == wire_key)
            .map(|f| f.attribute)
    }
}

impl Schema for Article {
    const FIELDS: &'static [FieldSpec] = ARTICLE_FIELDS;
}

impl Schema for Comments {
    const FIELDS: &'static [FieldSpec] = COMMENTS_FIELDS;
}

impl Schema for Video {
    const FIELDS: &'static [FieldSpec] = VIDEO_FIELDS;
}

impl Schema for Image {
    const FIELDS: &'static [FieldSpec] = IMAGE_FIELDS;
}

/// Optional article fields requested with the `fields` parameter.
///
/// Tokens keep their order and are de-duplicated. A token may carry a
/// sub-selector, e.g. `images(*)` or `meta(title)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    tokens: Vec<String>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list, validating each base name against the
    /// Article schema. Rust attribute names are accepted and sent as wire keys.
    pub fn parse(list: &str) -> Result<Self, DiffbotError> {
        let mut fields = Self::new();
        for token in split_tokens(list) {
            fields = fields.with(token)?;
        }
        Ok(fields)
    }

    /// Build a selection without validation, for fields this crate does not model.
    pub fn raw(list: &str) -> Self {
        let mut fields = Self::new();
        for token in split_tokens(list) {
            fields.push(token.to_string());
        }
        fields
    }

    /// Add one validated field token.
    pub fn with(mut self, token: &str) -> Result<Self, DiffbotError> {
        let token = token.trim();
        let (base, selector) = match token.find('(') {
            Some(idx) => token.split_at(idx),
            None => (token, ""),
        };
        let wire_key = Article::FIELDS
            .iter()
            .find(|f| f.wire_key == base || f.attribute == base)
            .map(|f| f.wire_key)
            .ok_or_else(|| DiffbotError::invalid_field(token, "Fields"))?;
        self.push(format!("{}{}", wire_key, selector));
        Ok(self)
    }

    fn push(&mut self, token: String) {
        if !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(","))
    }
}

/// Split on commas that are not inside a parenthesized sub-selector.
fn split_tokens(list: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut out = Vec::new();
    for (i, ch) in list.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                out.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&list[start..]);
    out.into_iter().map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    const FULL_ARTICLE: &str = r#"{
        "text": "t", "title": "t", "date": "d", "author": "a",
        "videos": [{"url": "v"}], "images": [{"url": "i"}],
        "url": "u", "resolved_url": "r", "icon": "i", "html": "h",
        "tags": ["x"], "summary": "s", "categories": {"c": 1.0},
        "type": "article", "links": ["l"], "humanLanguage": "en",
        "meta": {"title": "m"}, "numPages": 1, "querystring": {"q": true},
        "comments": {"count": 3}
    }"#;

    #[test]
    fn article_schema_matches_encoded_keys() {
        let article = Article::from_json(FULL_ARTICLE).unwrap();
        let value = serde_json::to_value(&article).unwrap();
        let encoded: BTreeSet<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let schema: BTreeSet<&str> = ARTICLE_FIELDS.iter().map(|f| f.wire_key).collect();
        assert_eq!(encoded, schema);
    }

    #[test]
    fn image_schema_matches_encoded_keys() {
        let image: Image = serde_json::from_str(
            r#"{"url":"u","pixelHeight":1,"pixelWidth":2,"caption":"c","primary":false}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&image).unwrap();
        let encoded: BTreeSet<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let schema: BTreeSet<&str> = IMAGE_FIELDS.iter().map(|f| f.wire_key).collect();
        assert_eq!(encoded, schema);
    }

    #[test]
    fn video_schema_matches_encoded_keys() {
        let video: Video = serde_json::from_str(
            r#"{"url":"u","pixelHeight":1,"pixelWidth":2,"primary":true}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&video).unwrap();
        let encoded: BTreeSet<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let schema: BTreeSet<&str> = VIDEO_FIELDS.iter().map(|f| f.wire_key).collect();
        assert_eq!(encoded, schema);
    }

    #[test]
    fn comments_schema_matches_encoded_keys() {
        let comments: Comments = serde_json::from_str(r#"{"count":3}"#).unwrap();
        let value = serde_json::to_value(&comments).unwrap();
        let encoded: BTreeSet<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let schema: BTreeSet<&str> = COMMENTS_FIELDS.iter().map(|f| f.wire_key).collect();
        assert_eq!(encoded, schema);
    }

    #[test]
    fn lookups_in_both_directions() {
        assert_eq!(Article::wire_key("resolved_url"), Some("resolved_url"));
        assert_eq!(Article::wire_key("human_language"), Some("humanLanguage"));
        assert_eq!(Article::attribute("type"), Some("page_type"));
        assert_eq!(Article::attribute("numPages"), Some("num_pages"));
        assert_eq!(Article::wire_key("nope"), None);
        assert_eq!(Comments::wire_key("count"), Some("count"));
        assert_eq!(Video::attribute("pixelWidth"), Some("pixel_width"));
    }

    #[test]
    fn fields_parse_resolves_attributes_and_keeps_selectors() {
        let f = Fields::parse("tags, human_language,images(*),meta(title,og),tags").unwrap();
        assert_eq!(f.to_string(), "tags,humanLanguage,images(*),meta(title,og)");
    }

    #[test]
    fn fields_parse_rejects_unknown_names() {
        let err = Fields::parse("tags,sentiment").unwrap_err();
        assert!(err.is_invalid_field());
    }

    #[test]
    fn raw_fields_skip_validation() {
        let f = Fields::raw("sentiment,tags");
        assert_eq!(f.iter().collect::<Vec<_>>(), vec!["sentiment", "tags"]);
    }

    #[test]
    fn empty_list_gives_empty_selection() {
        assert!(Fields::parse(" , ").unwrap().is_empty());
    }
}
