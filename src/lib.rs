//! # content-bridge
//!
//! Uniform adapter layer over content backends, with cross-source link
//! rewriting: absolute URLs that point at a source's content are resolved to
//! a [`ContentRef`] and rewritten to app-relative paths.
//!
//! ## Example
//!
//! ```
//! use content_bridge::{rewrite_internal_links, ContentRef};
//!
//! let matcher = |url: &str| {
//!     let id = url.strip_prefix("https://old.example.com/thread/")?;
//!     ContentRef::parse("post", id).ok()
//! };
//!
//! let html = r#"<a href="https://old.example.com/thread/42">x</a>"#;
//! let out = rewrite_internal_links(&matcher, html, "https://new.example.com/");
//! assert_eq!(out, r#"<a href="https://new.example.com/posts/42">x</a>"#);
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod query;
pub mod render;
pub mod rewrite;
pub mod source;

pub use adapters::{PatternMatcher, UrlRule};
pub use config::{RuleConfig, SourceConfig};
pub use crate::core::{ContentRef, ContentType, Intent};
pub use error::{Error, Result};
pub use query::{build_in_placeholders, build_numbered_placeholders, parse_json_int_array};
pub use render::{decode_entities, rendered_content, rendered_title};
pub use rewrite::{content_path, get_content_path, rewrite_internal_links, LinkRewriter, UrlMatcher};
pub use source::{
    CapabilitiesMap, Content, ContentSource, EntityTypeMap, SourceBase, SourceRegistry,
};
