//! Locale identifiers and the small amount of policy attached to them.

use std::fmt;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use super::config::I18nConfig;

/// An opaque locale code such as `"en"` or `"fr"`.
///
/// The page works with bare language codes; region subtags reported by the
/// browser are folded away by [`Locale::from_language_tag`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new<T: Into<String>>(code: T) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reduce a BCP 47 tag (`fr-CA`, `en_US`) to its primary language subtag.
    ///
    /// Returns `None` when the tag cannot be parsed.
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let lang: LanguageIdentifier = tag.trim().replace('_', "-").parse().ok()?;
        Some(Self(lang.language.as_str().to_string()))
    }

    /// Open Graph locale (`og:locale`) for this code, e.g. `fr` -> `fr_FR`.
    ///
    /// Unknown codes map to the configured fallback.
    pub fn og_locale<'a>(&self, config: &'a I18nConfig) -> &'a str {
        config
            .og_locales
            .get(self.as_str())
            .map(String::as_str)
            .unwrap_or(config.og_fallback.as_str())
    }

    pub fn is_supported(&self, config: &I18nConfig) -> bool {
        config.supported_locales.iter().any(|l| l == self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Pick the locale to show on first paint.
///
/// Order: stored preference (if supported), then the first requested
/// language whose primary subtag is supported, then the default.
pub fn initial_locale(
    config: &I18nConfig,
    stored: Option<&str>,
    requested: &[LanguageIdentifier],
) -> Locale {
    if let Some(locale) = stored.and_then(Locale::from_language_tag) {
        if locale.is_supported(config) {
            return locale;
        }
    }

    requested
        .iter()
        .map(|lang| Locale::new(lang.language.as_str()))
        .find(|locale| locale.is_supported(config))
        .unwrap_or_else(|| config.default_locale.clone())
}

/// First supported locale other than `active`; the preload candidate.
pub fn alternate_locale(config: &I18nConfig, active: &Locale) -> Option<Locale> {
    config
        .supported_locales
        .iter()
        .find(|l| *l != active)
        .cloned()
}
