//! Content identity: types, permission intents and resolved references.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed content type to collection table. Every [`ContentType`] appears once.
pub const COLLECTIONS: [(ContentType, &str); 3] = [
    (ContentType::Section, "sections"),
    (ContentType::Post, "posts"),
    (ContentType::Comment, "comments"),
];

/// Kind of content exposed by a content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Section,
    Post,
    Comment,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Section, ContentType::Post, ContentType::Comment];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Section => "section",
            ContentType::Post => "post",
            ContentType::Comment => "comment",
        }
    }

    /// Plural path segment used in generated app-relative paths.
    pub fn collection(self) -> &'static str {
        COLLECTIONS
            .iter()
            .find(|(ty, _)| *ty == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ContentType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| Error::UnrecognizedContentType(s.to_string()))
    }
}

/// Permission intent checked against a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    View,
    Post,
    Edit,
    Comment,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::View => "view",
            Intent::Post => "post",
            Intent::Edit => "edit",
            Intent::Comment => "comment",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "view" => Ok(Intent::View),
            "post" => Ok(Intent::Post),
            "edit" => Ok(Intent::Edit),
            "comment" => Ok(Intent::Comment),
            other => Err(Error::Config(format!("unknown intent: {}", other))),
        }
    }
}

/// Resolved identity of a piece of content.
///
/// Only built through the validating constructors, so `id` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentRef {
    content_type: ContentType,
    id: u64,
}

impl ContentRef {
    pub fn new(content_type: ContentType, id: u64) -> Result<Self> {
        if id == 0 {
            return Err(Error::InvalidContentId(id.to_string()));
        }
        Ok(Self { content_type, id })
    }

    /// Builds a reference from the loosely typed pair a resolver extracts
    /// from a URL (`"post"`, `"42"`).
    pub fn parse(content_type: &str, id: &str) -> Result<Self> {
        let content_type: ContentType = content_type.parse()?;
        let id = id
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidContentId(id.to_string()))?;
        Self::new(content_type, id)
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// App-relative path, e.g. `/posts/42`.
    pub fn path(&self) -> String {
        crate::rewrite::content_path(self.content_type, self.id)
    }
}
