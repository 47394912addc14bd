//! The full multi-locale payload, fetched wholesale.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::bundle::TranslationBundle;
use super::source::CatalogError;
use crate::core::locale::Locale;

/// Locale code -> bundle. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog(BTreeMap<String, TranslationBundle>);

impl Catalog {
    /// Parse a catalog document. The top level must be an object whose
    /// values are objects; anything else is a malformed body.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(CatalogError::Malformed)
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self, CatalogError> {
        serde_json::from_slice(raw).map_err(CatalogError::Malformed)
    }

    /// The bundle for `locale`, or an empty bundle if the catalog lacks it.
    pub fn bundle(&self, locale: &Locale) -> TranslationBundle {
        self.0.get(locale.as_str()).cloned().unwrap_or_default()
    }

    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.0.keys().map(|k| Locale::new(k.as_str()))
    }
}
