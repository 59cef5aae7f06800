use super::UrlMatcher;
use crate::core::ContentRef;
use crate::render::decode_entities;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Absolute http(s) URL candidate, stopped by whitespace and `<>"'()`.
static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s<>"'()]+"#).expect("valid regex literal")
});

/// Rewrites absolute URLs owned by a content source into app-relative paths.
pub struct LinkRewriter<'m, M: ?Sized> {
    matcher: &'m M,
}

impl<'m, M: UrlMatcher + ?Sized> LinkRewriter<'m, M> {
    pub fn new(matcher: &'m M) -> Self {
        Self { matcher }
    }

    /// Replaces every resolvable absolute URL in `html` with
    /// `home_url` (trailing slashes stripped) followed by the content path.
    ///
    /// Unresolved URLs and all surrounding text are left byte-identical.
    /// Returns the input borrowed when it holds no URL candidates.
    pub fn rewrite<'h>(&self, html: &'h str, home_url: &str) -> Cow<'h, str> {
        if html.is_empty() {
            return Cow::Borrowed(html);
        }

        let base = home_url.trim_end_matches('/');
        let mut matched = 0usize;
        let mut rewritten = 0usize;

        let output = ABSOLUTE_URL.replace_all(html, |caps: &Captures<'_>| {
            let candidate = &caps[0];
            matched += 1;
            match self.resolve_candidate(candidate) {
                Some(content) => {
                    rewritten += 1;
                    format!("{}{}", base, content.path())
                }
                None => candidate.to_string(),
            }
        });

        if matched > 0 {
            debug!(matched, rewritten, "rewrote internal links");
        }
        output
    }

    fn resolve_candidate(&self, candidate: &str) -> Option<ContentRef> {
        // Attribute values carry escaped URLs (`&amp;`), resolvers expect raw ones.
        let url = decode_entities(candidate);
        let resolved = self.matcher.resolve(&url);
        match &resolved {
            Some(content) => debug!(
                url = %url,
                content_type = %content.content_type(),
                id = content.id(),
                "resolved incoming url"
            ),
            None => trace!(url = %url, "url not owned by this source"),
        }
        resolved
    }
}

/// Convenience wrapper around [`LinkRewriter::rewrite`].
pub fn rewrite_internal_links<'h, M: UrlMatcher + ?Sized>(
    matcher: &M,
    html: &'h str,
    home_url: &str,
) -> Cow<'h, str> {
    LinkRewriter::new(matcher).rewrite(html, home_url)
}
