use crate::config::SourceConfig;
use crate::core::{ContentRef, ContentType};
use crate::error::{Error, Result};
use crate::rewrite::UrlMatcher;
use regex::Regex;
use url::Url;

/// A content type bound to a URL regex with a named `id` group.
#[derive(Debug, Clone)]
pub struct UrlRule {
    content_type: ContentType,
    pattern: Regex,
}

impl UrlRule {
    pub fn new(content_type: ContentType, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        if !pattern.capture_names().any(|name| name == Some("id")) {
            return Err(Error::Config(format!(
                "URL pattern `{}` has no named `id` group",
                pattern.as_str()
            )));
        }
        Ok(Self {
            content_type,
            pattern,
        })
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    fn resolve(&self, url: &str) -> Option<ContentRef> {
        let caps = self.pattern.captures(url)?;
        let id = caps.name("id")?.as_str().parse::<u64>().ok()?;
        ContentRef::new(self.content_type, id).ok()
    }
}

/// Resolves URLs with an ordered list of [`UrlRule`]s, optionally limited to
/// a set of hosts. The first rule that yields a valid id wins.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    hosts: Vec<String>,
    rules: Vec<UrlRule>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.hosts.push(host.into().to_ascii_lowercase());
        self
    }

    pub fn with_rule(mut self, rule: UrlRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let mut matcher = Self::new();
        for host in &config.hosts {
            matcher = matcher.with_host(host.as_str());
        }
        for rule in &config.rules {
            let content_type: ContentType = rule.content_type.parse()?;
            matcher = matcher.with_rule(UrlRule::new(content_type, &rule.pattern)?);
        }
        Ok(matcher)
    }

    pub fn rules(&self) -> &[UrlRule] {
        &self.rules
    }

    fn owns_host(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if self.hosts.is_empty() {
            return parsed.host_str().is_some();
        }
        parsed
            .host_str()
            .is_some_and(|host| self.hosts.iter().any(|h| h == host))
    }
}

impl UrlMatcher for PatternMatcher {
    fn resolve(&self, url: &str) -> Option<ContentRef> {
        if !self.owns_host(url) {
            return None;
        }
        self.rules.iter().find_map(|rule| rule.resolve(url))
    }

    fn matches(&self, url: &str) -> bool {
        self.owns_host(url) && self.rules.iter().any(|rule| rule.pattern.is_match(url))
    }
}
