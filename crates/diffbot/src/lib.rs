// ABOUTME: Main library entry point for the Diffbot Article API client.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, the model types, Fields and DiffbotError.

//! Diffbot - typed access to the Diffbot Article API.
//!
//! The [`model`] types are read-only snapshots of an extraction result,
//! decoded from the service's JSON. [`Client`] issues the HTTP request.
//!
//! # Example
//!
//! ```no_run
//! use diffbot::{Client, DiffbotError, Fields};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DiffbotError> {
//!     let client = Client::builder().token("my-token").build()?;
//!     let article = client
//!         .analyze("https://example.com/article")
//!         .with_fields(Fields::parse("tags,meta")?)
//!         .send()
//!         .await?;
//!     println!("{} {:?}", article, article.tags());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod options;
pub mod resource;
pub mod schema;

pub use crate::client::{Analyze, Client};
pub use crate::error::{DiffbotError, ErrorCode};
pub use crate::model::{
    Article, Categories, Comments, Image, Meta, Model, PageType, QueryString, QueryValue, Video,
};
pub use crate::options::{ClientBuilder, Options};
pub use crate::schema::{FieldKind, FieldSpec, Fields, Schema};
