//! Session-scoped catalog cache.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::bundle::TranslationBundle;
use super::catalog::Catalog;
use super::source::CatalogSource;
use crate::core::locale::Locale;

/// Hands out per-locale bundles, fetching the whole catalog at most once
/// per successful load.
///
/// Clones share the same cache slot, so a background preload and the
/// foreground load fill one cache. The slot is written at most once: the
/// first successful fetch wins and later completions are dropped. A failed
/// fetch leaves the slot untouched so the next `get` tries again.
pub struct TranslationStore<S> {
    source: Rc<S>,
    catalog: Rc<OnceCell<Catalog>>,
}

impl<S> Clone for TranslationStore<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            catalog: Rc::clone(&self.catalog),
        }
    }
}

impl<S: CatalogSource> TranslationStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Rc::new(source),
            catalog: Rc::new(OnceCell::new()),
        }
    }

    /// The cached catalog, if a fetch has succeeded.
    pub fn cached(&self) -> Option<&Catalog> {
        self.catalog.get()
    }

    /// Bundle for `locale`. Never fails: an unreachable or malformed catalog
    /// yields an empty bundle, as does a locale the catalog doesn't carry.
    pub async fn get(&self, locale: &Locale) -> TranslationBundle {
        if let Some(catalog) = self.catalog.get() {
            return catalog.bundle(locale);
        }

        match self.source.fetch().await {
            Ok(fetched) => {
                if self.catalog.set(fetched).is_err() {
                    tracing::debug!(target: "i18n", "catalog already cached; dropping late response");
                }
                self.catalog
                    .get()
                    .map(|catalog| catalog.bundle(locale))
                    .unwrap_or_default()
            }
            Err(err) => {
                tracing::error!(target: "i18n", %err, %locale, "error loading translations");
                TranslationBundle::empty()
            }
        }
    }

    /// Best-effort warm-up for a locale the user may switch to. The result is
    /// discarded; failure only logs.
    pub async fn preload(&self, locale: Locale) {
        let bundle = self.get(&locale).await;
        match self.catalog.get() {
            // `get` already reported the fetch failure
            None => tracing::debug!(target: "i18n", %locale, "preload skipped; catalog unavailable"),
            Some(_) if bundle.is_empty() => {
                tracing::debug!(target: "i18n", %locale, "catalog has no translations for preloaded locale")
            }
            Some(_) => {}
        }
    }
}
