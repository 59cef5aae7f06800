use super::ContentSource;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Content sources by id. Built by the host and passed to whatever needs to
/// look sources up.
#[derive(Default)]
pub struct SourceRegistry {
    sources: BTreeMap<String, Arc<dyn ContentSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the source's registration hook and stores it under its id.
    pub fn register(&mut self, source: Arc<dyn ContentSource>) -> Result<()> {
        let id = source.id().to_string();
        if self.sources.contains_key(&id) {
            warn!(source = %id, "content source already registered");
            return Err(Error::DuplicateSource(id));
        }
        source.register()?;
        debug!(source = %id, "registered content source");
        self.sources.insert(id, source);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Arc<dyn ContentSource>> {
        self.sources
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownSource(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Option<Arc<dyn ContentSource>> {
        self.sources.remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
