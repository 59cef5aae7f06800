use content_bridge::{
    CapabilitiesMap, Content, ContentRef, ContentSource, ContentType, EntityTypeMap, Error,
    Intent, PatternMatcher, Result, SourceBase, SourceConfig, SourceRegistry, UrlRule,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory backend: a handful of items and a per-user intent grant list.
struct MemorySource {
    id: String,
    base: SourceBase,
    items: HashMap<(ContentType, u64), Content>,
    grants: Vec<(u64, Intent, ContentType)>,
    current_user: u64,
    registrations: AtomicUsize,
}

impl MemorySource {
    fn new(id: &str) -> Self {
        let matcher = PatternMatcher::new()
            .with_host("old.example.com")
            .with_rule(UrlRule::new(ContentType::Post, r"/thread/(?P<id>\d+)").unwrap());
        let entity_types = EntityTypeMap::new()
            .with(ContentType::Section, "forum")
            .with(ContentType::Post, "topic");

        let post = Content {
            content: ContentRef::new(ContentType::Post, 42).unwrap(),
            title: "Tips &amp; tricks".to_string(),
            body: r#"Moved from <a href="https://old.example.com/thread/7">here</a>"#.to_string(),
            parent_id: Some(3),
        };
        let section = Content {
            content: ContentRef::new(ContentType::Section, 3).unwrap(),
            title: "General".to_string(),
            body: String::new(),
            parent_id: None,
        };

        Self {
            id: id.to_string(),
            base: SourceBase::new(Arc::new(matcher), entity_types),
            items: HashMap::from([
                ((ContentType::Post, 42), post),
                ((ContentType::Section, 3), section),
            ]),
            grants: vec![(1, Intent::View, ContentType::Post)],
            current_user: 1,
            registrations: AtomicUsize::new(0),
        }
    }
}

impl ContentSource for MemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn base(&self) -> &SourceBase {
        &self.base
    }

    fn user_can(
        &self,
        user: u64,
        intent: Intent,
        content_type: ContentType,
        _content_id: Option<u64>,
    ) -> Result<bool> {
        if !self.base.capabilities().defines(content_type, intent) {
            return Ok(false);
        }
        Ok(self.grants.contains(&(user, intent, content_type)))
    }

    fn current_user_can(
        &self,
        intent: Intent,
        content_type: ContentType,
        content_id: Option<u64>,
    ) -> Result<bool> {
        self.user_can(self.current_user, intent, content_type, content_id)
    }

    fn get_content(&self, content_type: ContentType, id: u64) -> Result<Option<Content>> {
        Ok(self.items.get(&(content_type, id)).cloned())
    }

    fn get_root_section_id(&self) -> Result<Option<u64>> {
        Ok(Some(3))
    }

    fn get_root_parent_id(&self, content_type: ContentType, id: u64) -> Result<Option<u64>> {
        let mut current = self.get_content(content_type, id)?;
        let mut root = None;
        while let Some(item) = current {
            match item.parent_id {
                Some(parent) => {
                    root = Some(parent);
                    current = self.get_content(ContentType::Section, parent)?;
                }
                None => break,
            }
        }
        Ok(root)
    }

    fn get_link(&self, content_type: ContentType, id: u64) -> Result<String> {
        let entity = self.get_content_type(content_type)?;
        Ok(format!("https://old.example.com/{}/{}", entity, id))
    }

    fn get_options_data(&self) -> Value {
        json!({ "root_section": 3 })
    }

    fn get_features_data(&self) -> Value {
        json!({ "comments": false })
    }

    fn register(&self) -> Result<()> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn content_source_renders_with_rewritten_links() {
    let source = MemorySource::new("memory");
    let post = source
        .get_content(ContentType::Post, 42)
        .unwrap()
        .expect("post exists");

    assert_eq!(source.get_rendered_title(&post.title), "Tips & tricks");
    assert_eq!(
        source.get_rendered_content(&post.body, "https://app.test"),
        r#"Moved from <a href="https://app.test/posts/7">here</a>"#
    );
}

#[test]
fn content_source_lookups() {
    let source = MemorySource::new("memory");

    assert_eq!(source.get_content_type(ContentType::Post).unwrap(), "topic");
    assert!(matches!(
        source.get_content_type(ContentType::Comment),
        Err(Error::EntityTypeNotConfigured(ContentType::Comment))
    ));
    assert_eq!(
        source.get_link(ContentType::Section, 3).unwrap(),
        "https://old.example.com/forum/3"
    );
    assert!(source.get_link(ContentType::Comment, 1).is_err());
    assert_eq!(source.get_root_parent_id(ContentType::Post, 42).unwrap(), Some(3));
    assert_eq!(source.get_root_section_id().unwrap(), Some(3));
    assert_eq!(source.get_options_data()["root_section"], 3);
    assert_eq!(source.get_features_data()["comments"], false);

    let resolved = source
        .resolve_incoming_url("https://old.example.com/thread/9")
        .expect("owned url resolves");
    assert_eq!(resolved.path(), "/posts/9");
    assert!(source
        .resolve_incoming_url("https://new.example.com/thread/9")
        .is_none());
}

#[test]
fn content_source_permission_checks_respect_capabilities() {
    let source = MemorySource::new("memory");

    assert!(source.current_user_can(Intent::View, ContentType::Post, Some(42)).unwrap());
    assert!(!source.current_user_can(Intent::Edit, ContentType::Post, Some(42)).unwrap());
    assert!(!source.user_can(2, Intent::View, ContentType::Post, None).unwrap());
    // Comment intent is not declared for comments in the default table.
    assert!(!source.user_can(1, Intent::Comment, ContentType::Comment, None).unwrap());
}

#[test]
fn registry_registers_and_looks_up_sources() {
    let mut registry = SourceRegistry::new();
    assert!(registry.is_empty());

    let forum = Arc::new(MemorySource::new("forum"));
    registry.register(forum.clone()).unwrap();
    registry.register(Arc::new(MemorySource::new("blog"))).unwrap();

    assert_eq!(forum.registrations.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["blog", "forum"]);

    let found = registry.get("forum").unwrap();
    assert_eq!(found.id(), "forum");
    assert!(matches!(registry.get("wiki"), Err(Error::UnknownSource(_))));

    let dup = registry.register(Arc::new(MemorySource::new("forum")));
    assert!(matches!(dup, Err(Error::DuplicateSource(ref id)) if id == "forum"));
    assert_eq!(forum.registrations.load(Ordering::SeqCst), 1);

    assert!(registry.remove("blog").is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn source_base_from_config() {
    let config = SourceConfig::from_json_str(
        r#"{
            "id": "forum",
            "hosts": ["old.example.com"],
            "rules": [{"content_type": "section", "pattern": "/f/(?P<id>\\d+)"}],
            "entity_types": {"section": "forum"},
            "capabilities": {"section": {"edit": "moderate_forums"}}
        }"#,
    )
    .unwrap();
    let base = SourceBase::from_config(&config).unwrap();

    assert_eq!(base.entity_type(ContentType::Section).unwrap(), "forum");
    assert_eq!(
        base.capabilities()
            .capability(ContentType::Section, Intent::Edit),
        Some("moderate_forums")
    );
    assert_ne!(base.capabilities(), &CapabilitiesMap::default());
    assert_eq!(
        base.rewrite_internal_links("go https://old.example.com/f/2 now", "/"),
        "go /sections/2 now"
    );
}
