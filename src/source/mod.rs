//! Content source contract and the pieces concrete backends compose.

mod base;
mod maps;
mod registry;

use crate::core::{ContentRef, ContentType, Intent};
use crate::Result;
use serde_json::Value;
use std::borrow::Cow;

pub use base::SourceBase;
pub use maps::{CapabilitiesMap, EntityTypeMap};
pub use registry::SourceRegistry;

/// A content item fetched from a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub content: ContentRef,
    pub title: String,
    pub body: String,
    /// Parent item id within the backend, if any.
    pub parent_id: Option<u64>,
}

/// Operations a backend adapter (a forum engine, a CMS, ...) supplies.
///
/// Backends hold a [`SourceBase`] and expose it through [`ContentSource::base`];
/// link rewriting, rendering and entity-type lookups come from there.
pub trait ContentSource: Send + Sync {
    /// Stable id the source is registered under.
    fn id(&self) -> &str;

    fn base(&self) -> &SourceBase;

    /// Whether `user` may perform `intent` on the content. `content_id` of
    /// `None` asks about the content type as a whole.
    fn user_can(
        &self,
        user: u64,
        intent: Intent,
        content_type: ContentType,
        content_id: Option<u64>,
    ) -> Result<bool>;

    fn current_user_can(
        &self,
        intent: Intent,
        content_type: ContentType,
        content_id: Option<u64>,
    ) -> Result<bool>;

    fn get_content(&self, content_type: ContentType, id: u64) -> Result<Option<Content>>;

    /// Backend entity type for a content type.
    fn get_content_type(&self, content_type: ContentType) -> Result<&str> {
        self.base().entity_type(content_type)
    }

    fn get_root_section_id(&self) -> Result<Option<u64>>;

    /// Top-level section that contains the item.
    fn get_root_parent_id(&self, content_type: ContentType, id: u64) -> Result<Option<u64>>;

    /// Canonical link to the item inside the backend.
    fn get_link(&self, content_type: ContentType, id: u64) -> Result<String>;

    fn resolve_incoming_url(&self, url: &str) -> Option<ContentRef> {
        self.base().resolve_incoming_url(url)
    }

    fn get_options_data(&self) -> Value;

    fn get_features_data(&self) -> Value;

    /// Host integration hook, run once when the source is registered.
    fn register(&self) -> Result<()>;

    fn rewrite_internal_links<'h>(&self, html: &'h str, home_url: &str) -> Cow<'h, str> {
        self.base().rewrite_internal_links(html, home_url)
    }

    fn get_rendered_title(&self, title: &str) -> String {
        self.base().rendered_title(title)
    }

    fn get_rendered_content(&self, content: &str, home_url: &str) -> String {
        self.base().rendered_content(content, home_url)
    }
}
