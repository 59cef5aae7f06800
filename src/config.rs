//! Content source configuration loaded from JSON.

use crate::core::{ContentType, Intent};
use crate::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration for one content source instance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Id the source is registered under.
    pub id: String,
    /// Prefix for generated app-relative links.
    pub home_url: String,
    /// Hosts whose URLs the source owns. Empty accepts any host.
    pub hosts: Vec<String>,
    /// URL rules tried in order when resolving incoming links.
    pub rules: Vec<RuleConfig>,
    /// Raw content type to backend entity type table.
    pub entity_types: Map<String, Value>,
    /// Capability overrides on top of the default table.
    pub capabilities: BTreeMap<ContentType, BTreeMap<Intent, Option<String>>>,
}

/// One URL rule: a regex with a named `id` group and the content type the
/// captured id refers to.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub content_type: String,
    pub pattern: String,
}

impl SourceConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
