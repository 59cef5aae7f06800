//! Display rendering for titles and content bodies.

mod entities;

use crate::rewrite::{rewrite_internal_links, UrlMatcher};

pub use entities::decode_entities;

/// Decodes a stored title for display.
pub fn rendered_title(title: &str) -> String {
    decode_entities(title).into_owned()
}

/// Rewrites internal links in `content`, then decodes entities for display.
///
/// Links are rewritten first so the matcher sees each URL exactly as stored;
/// each candidate is decoded individually during the rewrite.
pub fn rendered_content<M: UrlMatcher + ?Sized>(
    matcher: &M,
    content: &str,
    home_url: &str,
) -> String {
    let rewritten = rewrite_internal_links(matcher, content, home_url);
    decode_entities(&rewritten).into_owned()
}
