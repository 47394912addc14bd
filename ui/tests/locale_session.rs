use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;
use futures::executor::block_on;
use ui::core::config::I18nConfig;
use ui::core::locale::Locale;
use ui::core::storage::{MemoryStorage, PreferenceStore, StorageError};
use ui::i18n::{Catalog, CatalogError, CatalogSource, EmbeddedCatalogSource};
use ui::page::{MemoryDocument, PageDocument, PageElement};
use ui::session::LocaleSession;
use unic_langid::LanguageIdentifier;

const CATALOG: &str = r#"{"en":{"meta":{"title":"Home","description":"Welcome"},"hero":{"title":"Hello"}},"fr":{"meta":{"title":"Accueil","description":"Bienvenue"},"hero":{"title":"Bonjour"}}}"#;

fn page() -> MemoryDocument {
    let doc = MemoryDocument::new().with_title("Home");
    doc.add("h1", &[("data-i18n", "hero.title")]).with_text("Hello");
    doc.add("select", &[("id", "language-selector")]).with_value("en");
    doc
}

fn browser(tags: &[&str]) -> Vec<LanguageIdentifier> {
    tags.iter().map(|t| t.parse().unwrap()).collect()
}

struct StaticSource;

impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_json(CATALOG)
    }
}

struct Offline;

impl CatalogSource for Offline {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        Err(CatalogError::Network("offline".into()))
    }
}

#[test]
fn initial_locale_prefers_stored_choice_then_browser() {
    let stored = LocaleSession::new(
        I18nConfig::default(),
        StaticSource,
        page(),
        MemoryStorage::with_entry("preferredLanguage", "fr"),
    );
    assert_eq!(stored.resolve_initial(&browser(&["en-GB"])).as_str(), "fr");

    let fresh = LocaleSession::new(I18nConfig::default(), StaticSource, page(), MemoryStorage::new());
    assert_eq!(fresh.resolve_initial(&browser(&["fr-CA", "en"])).as_str(), "fr");
    assert_eq!(fresh.resolve_initial(&browser(&["es-ES"])).as_str(), "en");
}

#[test]
fn start_applies_and_names_the_preload_target() {
    let session = LocaleSession::new(I18nConfig::default(), StaticSource, page(), MemoryStorage::new());

    let alternate = block_on(session.start(Locale::new("fr")));

    assert_eq!(alternate, Some(Locale::new("en")));
    assert_eq!(session.active().as_str(), "fr");
    let doc = session.document();
    assert_eq!(doc.title(), "Accueil");
    assert_eq!(doc.lang().as_deref(), Some("fr"));
}

#[test]
fn switch_persists_and_replaces_content() {
    let session = LocaleSession::new(I18nConfig::default(), StaticSource, page(), MemoryStorage::new());

    block_on(async {
        session.start(Locale::new("en")).await;
        assert!(session.switch(Locale::new("fr")).await);
    });

    let doc = session.document();
    assert_eq!(doc.title(), "Accueil");
    let heading = doc
        .query_one(ui::page::Selector::HasAttribute("data-i18n"))
        .unwrap();
    assert_eq!(heading.text_content(), "Bonjour");
    assert_eq!(
        session.resolve_initial(&browser(&["en-US"])).as_str(),
        "fr",
        "switch should have been remembered"
    );
}

#[test]
fn offline_start_leaves_page_untouched() {
    let session = LocaleSession::new(I18nConfig::default(), Offline, page(), MemoryStorage::new());
    let before = session.document().snapshot();

    let alternate = block_on(async {
        let alternate = session.start(Locale::new("fr")).await;
        if let Some(locale) = alternate.clone() {
            session.preload_task(locale).await;
        }
        alternate
    });

    assert_eq!(alternate, Some(Locale::new("en")));
    assert_eq!(session.document().snapshot(), before);
}

#[test]
fn preload_warms_the_cache() {
    let session = LocaleSession::new(
        I18nConfig::default(),
        EmbeddedCatalogSource,
        page(),
        MemoryStorage::new(),
    );
    assert!(session.store().cached().is_none());
    block_on(session.preload_task(Locale::new("fr")));
    assert!(session.store().cached().is_some());
}

struct BrokenStorage;

impl PreferenceStore for BrokenStorage {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write(key.to_string()))
    }
}

#[test]
fn storage_failure_does_not_block_the_switch() {
    let session = LocaleSession::new(I18nConfig::default(), StaticSource, page(), BrokenStorage);
    assert!(block_on(session.switch(Locale::new("fr"))));
    assert_eq!(session.document().title(), "Accueil");
}

/// Fetches park until the test releases them.
struct GatedSource {
    gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

impl CatalogSource for GatedSource {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let gate = self
            .gates
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| CatalogError::Network("no gate".into()))?;
        gate.await
            .map_err(|_| CatalogError::Network("cancelled".into()))?;
        Catalog::from_json(CATALOG)
    }
}

#[test]
fn stale_switch_response_is_discarded() {
    let (fr_tx, fr_rx) = oneshot::channel();
    let (en_tx, en_rx) = oneshot::channel();
    let session = LocaleSession::new(
        I18nConfig::default(),
        GatedSource {
            gates: RefCell::new(VecDeque::from([fr_rx, en_rx])),
        },
        page(),
        MemoryStorage::new(),
    );

    let (fr_applied, en_applied, ()) = block_on(async {
        futures::join!(
            session.switch(Locale::new("fr")),
            session.switch(Locale::new("en")),
            async move {
                // the older request answers last
                en_tx.send(()).unwrap();
                futures::pending!();
                fr_tx.send(()).unwrap();
            }
        )
    });

    assert!(en_applied);
    assert!(!fr_applied);
    assert_eq!(session.active().as_str(), "en");
    let doc = session.document();
    assert_eq!(doc.title(), "Home");
    assert_eq!(doc.lang().as_deref(), Some("en"));
}
