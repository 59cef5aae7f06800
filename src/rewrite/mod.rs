//! Incoming-link resolution and internal link rewriting.

mod links;
mod path;

use crate::core::ContentRef;

pub use links::{rewrite_internal_links, LinkRewriter};
pub use path::{content_path, get_content_path};

/// Host-supplied capability that recognises URLs belonging to one content
/// source and resolves them to a [`ContentRef`].
///
/// Implementations must be cheap and side-effect free; the rewriter calls
/// [`UrlMatcher::resolve`] once per candidate URL in a document.
pub trait UrlMatcher: Send + Sync {
    /// Resolves `url` to a content reference, or `None` when the URL is not
    /// owned by this source or cannot be parsed.
    fn resolve(&self, url: &str) -> Option<ContentRef>;

    /// Reports whether `url` belongs to this source.
    fn matches(&self, url: &str) -> bool {
        self.resolve(url).is_some()
    }
}

impl<F> UrlMatcher for F
where
    F: Fn(&str) -> Option<ContentRef> + Send + Sync,
{
    fn resolve(&self, url: &str) -> Option<ContentRef> {
        self(url)
    }
}
