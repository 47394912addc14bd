//! Locale lifecycle for one page session: pick the first locale, apply it,
//! warm the alternate, and handle user switches.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use unic_langid::LanguageIdentifier;

use crate::core::config::I18nConfig;
use crate::core::locale::{alternate_locale, initial_locale, Locale};
use crate::core::storage::PreferenceStore;
use crate::i18n::{CatalogSource, TranslationStore};
use crate::page::{ContentApplier, PageDocument};

/// Owns the catalog cache, the page applier and the preference store.
///
/// Every load is stamped with a generation number. When a later switch
/// starts before an earlier load returns, the earlier response is dropped
/// instead of overwriting the newer locale.
pub struct LocaleSession<S, D, P> {
    config: Rc<I18nConfig>,
    store: TranslationStore<S>,
    applier: ContentApplier<D>,
    preferences: P,
    active: RefCell<Locale>,
    generation: Cell<u64>,
}

impl<S, D, P> LocaleSession<S, D, P>
where
    S: CatalogSource,
    D: PageDocument,
    P: PreferenceStore,
{
    pub fn new(config: I18nConfig, source: S, document: D, preferences: P) -> Self {
        let config = Rc::new(config);
        Self {
            active: RefCell::new(config.default_locale.clone()),
            store: TranslationStore::new(source),
            applier: ContentApplier::new(document, Rc::clone(&config)),
            preferences,
            config,
            generation: Cell::new(0),
        }
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    pub fn active(&self) -> Locale {
        self.active.borrow().clone()
    }

    pub fn store(&self) -> &TranslationStore<S> {
        &self.store
    }

    pub fn document(&self) -> &D {
        self.applier.document()
    }

    /// Stored preference, else browser languages, else the default.
    pub fn resolve_initial(&self, requested: &[LanguageIdentifier]) -> Locale {
        let stored = self.preferences.load(&self.config.storage_key);
        initial_locale(&self.config, stored.as_deref(), requested)
    }

    /// Page-ready path. Applies `locale` and returns the locale worth
    /// preloading next, if any.
    pub async fn start(&self, locale: Locale) -> Option<Locale> {
        self.load_and_apply(locale.clone()).await;
        alternate_locale(&self.config, &locale)
    }

    /// User-driven switch. The choice is persisted before loading so it
    /// sticks even if the catalog is unreachable right now.
    ///
    /// Returns `false` when a newer switch superseded this one.
    pub async fn switch(&self, locale: Locale) -> bool {
        if let Err(err) = self.preferences.save(&self.config.storage_key, locale.as_str()) {
            tracing::warn!(target: "i18n", %err, %locale, "could not persist language preference");
        }
        self.load_and_apply(locale).await
    }

    /// Background warm-up for `locale`. Detached from the session so it can
    /// be handed to `platform::spawn_future`.
    pub fn preload_task(&self, locale: Locale) -> impl Future<Output = ()> + 'static
    where
        S: 'static,
    {
        let store = self.store.clone();
        async move { store.preload(locale).await }
    }

    async fn load_and_apply(&self, locale: Locale) -> bool {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        *self.active.borrow_mut() = locale.clone();

        let bundle = self.store.get(&locale).await;

        if self.generation.get() != generation {
            tracing::debug!(target: "i18n", %locale, "discarding stale translation response");
            return false;
        }
        self.applier.apply(&bundle, &locale);
        true
    }
}
