// ABOUTME: Data model for Diffbot API results: Article, Comments and their nested types.
// ABOUTME: Defines the Model trait shared by every top-level API result.

pub mod article;
pub mod categories;
pub mod media;
pub mod meta;
pub mod page_type;
pub mod querystring;

pub use article::{Article, Comments};
pub use categories::Categories;
pub use media::{Image, Video};
pub use meta::{Meta, MetaGroup};
pub use page_type::PageType;
pub use querystring::{QueryString, QueryValue};

/// A top-level result returned by one of the Diffbot APIs.
pub trait Model {
    /// The page classification reported by the service.
    fn page_type(&self) -> Option<PageType>;

    /// The submitted URL.
    fn url(&self) -> Option<&str>;
}
