//! Per-instance lookup tables: backend entity types and capability checks.

use crate::core::{ContentType, Intent};
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Maps each content type to the backend's own entity type identifier
/// (a taxonomy, a post type, ...). Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct EntityTypeMap {
    entries: HashMap<ContentType, Value>,
}

impl EntityTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, content_type: ContentType, entity_type: impl Into<String>) -> Self {
        self.entries
            .insert(content_type, Value::String(entity_type.into()));
        self
    }

    /// Builds the map from raw JSON. Keys must be known content types; values
    /// are checked on lookup, so a non-string value reads as "not configured".
    pub fn from_json(map: &Map<String, Value>) -> Result<Self> {
        let mut entries = HashMap::with_capacity(map.len());
        for (key, value) in map {
            let content_type: ContentType = key.parse()?;
            entries.insert(content_type, value.clone());
        }
        Ok(Self { entries })
    }

    /// Backend entity type for `content_type`.
    pub fn entity_type(&self, content_type: ContentType) -> Result<&str> {
        match self.entries.get(&content_type) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.as_str()),
            _ => Err(Error::EntityTypeNotConfigured(content_type)),
        }
    }
}

/// Capability identifier per `(content type, intent)`.
///
/// An intent present with `None` is declared but has no backend check
/// attached; an absent intent is not supported for that content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitiesMap {
    entries: BTreeMap<ContentType, BTreeMap<Intent, Option<String>>>,
}

impl Default for CapabilitiesMap {
    fn default() -> Self {
        let shape: [(ContentType, &[Intent]); 3] = [
            (ContentType::Section, &[Intent::View, Intent::Post]),
            (ContentType::Post, &[Intent::View, Intent::Edit, Intent::Comment]),
            (ContentType::Comment, &[Intent::View, Intent::Edit]),
        ];
        let entries = shape
            .into_iter()
            .map(|(ty, intents)| (ty, intents.iter().map(|i| (*i, None)).collect()))
            .collect();
        Self { entries }
    }
}

impl CapabilitiesMap {
    /// Declares (or replaces) the capability for one intent.
    pub fn set(&mut self, content_type: ContentType, intent: Intent, capability: Option<String>) {
        self.entries
            .entry(content_type)
            .or_default()
            .insert(intent, capability);
    }

    /// Layers `overrides` on top of the current table.
    pub fn extend(
        mut self,
        overrides: &BTreeMap<ContentType, BTreeMap<Intent, Option<String>>>,
    ) -> Self {
        for (content_type, intents) in overrides {
            for (intent, capability) in intents {
                self.set(*content_type, *intent, capability.clone());
            }
        }
        self
    }

    pub fn defines(&self, content_type: ContentType, intent: Intent) -> bool {
        self.entries
            .get(&content_type)
            .is_some_and(|intents| intents.contains_key(&intent))
    }

    pub fn capability(&self, content_type: ContentType, intent: Intent) -> Option<&str> {
        self.entries
            .get(&content_type)?
            .get(&intent)?
            .as_deref()
    }

    pub fn intents(&self, content_type: ContentType) -> impl Iterator<Item = Intent> + '_ {
        self.entries
            .get(&content_type)
            .into_iter()
            .flat_map(|intents| intents.keys().copied())
    }
}
