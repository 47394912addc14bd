//! Translation catalogs for the landing page.
//!
//! The catalog is one JSON document whose top-level keys are locale codes:
//! ```text
//! {
//!   "en": { "meta": { "title": "…", "description": "…" }, "hero": { … } },
//!   "fr": { "meta": { "title": "…", "description": "…" }, "hero": { … } }
//! }
//! ```
//! It is fetched once per page session (`i18n.json` next to the page) and
//! kept in memory. Native builds read the copy embedded from `ui/i18n/`.
//!
//! Usage:
//! ```ignore
//! let store = TranslationStore::new(EmbeddedCatalogSource);
//! let bundle = store.get(&Locale::new("fr")).await;
//! assert_eq!(bundle.resolve("meta.title"), Some("Accueil"));
//! ```

pub mod bundle;
pub mod catalog;
pub mod source;
pub mod store;

pub use bundle::TranslationBundle;
pub use catalog::Catalog;
#[cfg(target_arch = "wasm32")]
pub use source::HttpCatalogSource;
pub use source::{CatalogError, CatalogSource, EmbeddedCatalogSource};
pub use store::TranslationStore;
