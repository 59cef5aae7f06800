use super::{CapabilitiesMap, EntityTypeMap};
use crate::adapters::PatternMatcher;
use crate::config::SourceConfig;
use crate::core::{ContentRef, ContentType};
use crate::render;
use crate::rewrite::{rewrite_internal_links, UrlMatcher};
use crate::Result;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Shared state and helpers a concrete content source is composed from.
///
/// Read-only after construction, so one instance can serve many requests.
#[derive(Clone)]
pub struct SourceBase {
    matcher: Arc<dyn UrlMatcher>,
    entity_types: EntityTypeMap,
    capabilities: CapabilitiesMap,
}

impl SourceBase {
    pub fn new(matcher: Arc<dyn UrlMatcher>, entity_types: EntityTypeMap) -> Self {
        Self {
            matcher,
            entity_types,
            capabilities: CapabilitiesMap::default(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: CapabilitiesMap) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Builds a base backed by a [`PatternMatcher`] from config.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let matcher = PatternMatcher::from_config(config)?;
        let entity_types = EntityTypeMap::from_json(&config.entity_types)?;
        let capabilities = CapabilitiesMap::default().extend(&config.capabilities);
        Ok(Self::new(Arc::new(matcher), entity_types).with_capabilities(capabilities))
    }

    pub fn matcher(&self) -> &dyn UrlMatcher {
        self.matcher.as_ref()
    }

    pub fn capabilities(&self) -> &CapabilitiesMap {
        &self.capabilities
    }

    pub fn entity_type(&self, content_type: ContentType) -> Result<&str> {
        self.entity_types.entity_type(content_type)
    }

    pub fn resolve_incoming_url(&self, url: &str) -> Option<ContentRef> {
        self.matcher.resolve(url)
    }

    pub fn rewrite_internal_links<'h>(&self, html: &'h str, home_url: &str) -> Cow<'h, str> {
        rewrite_internal_links(self.matcher(), html, home_url)
    }

    pub fn rendered_title(&self, title: &str) -> String {
        render::rendered_title(title)
    }

    pub fn rendered_content(&self, content: &str, home_url: &str) -> String {
        render::rendered_content(self.matcher(), content, home_url)
    }
}

impl fmt::Debug for SourceBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceBase")
            .field("entity_types", &self.entity_types)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}
