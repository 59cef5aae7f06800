//! App-relative path building.

use crate::core::ContentType;
use crate::Result;

/// Builds `/{collection}/{id}` for a content type.
///
/// All generated links go through here so paths stay consistent.
pub fn content_path(content_type: ContentType, id: u64) -> String {
    format!("/{}/{}", content_type.collection(), id)
}

/// String-keyed variant of [`content_path`] for callers holding a raw key.
///
/// Fails with [`crate::Error::UnrecognizedContentType`] for keys outside the
/// collection table.
pub fn get_content_path(content_type: &str, id: u64) -> Result<String> {
    let content_type: ContentType = content_type.parse()?;
    Ok(content_path(content_type, id))
}
