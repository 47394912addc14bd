//! Page-level i18n settings. Everything has a default matching the shipped
//! landing page markup, so most callers just use `I18nConfig::default()`.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use super::locale::Locale;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid i18n config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no supported locales configured")]
    NoLocales,
    #[error("default locale `{0}` is not in the supported list")]
    UnsupportedDefault(Locale),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Relative path of the catalog resource (one GET per page session).
    pub catalog_url: String,
    /// Durable storage key holding the user's explicit locale choice.
    pub storage_key: String,
    /// Marker attribute carrying a dotted translation key.
    pub key_attribute: String,
    /// Secondary marker on input-like elements naming the placeholder key.
    pub placeholder_attribute: String,
    /// Id of the locale `<select>`.
    pub selector_id: String,
    pub default_locale: Locale,
    pub supported_locales: Vec<Locale>,
    pub og_locales: BTreeMap<String, String>,
    pub og_fallback: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            catalog_url: "i18n.json".into(),
            storage_key: "preferredLanguage".into(),
            key_attribute: "data-i18n".into(),
            placeholder_attribute: "data-i18n-placeholder".into(),
            selector_id: "language-selector".into(),
            default_locale: Locale::new("en"),
            supported_locales: vec![Locale::new("en"), Locale::new("fr")],
            og_locales: BTreeMap::from([
                ("en".to_string(), "en_US".to_string()),
                ("fr".to_string(), "fr_FR".to_string()),
            ]),
            og_fallback: "en_US".into(),
        }
    }
}

impl I18nConfig {
    /// Parse a (possibly partial) JSON object over the defaults and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supported_locales.is_empty() {
            return Err(ConfigError::NoLocales);
        }
        if !self.default_locale.is_supported(self) {
            return Err(ConfigError::UnsupportedDefault(self.default_locale.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(I18nConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = I18nConfig::from_json(r#"{ "catalog_url": "/static/lang.json" }"#).unwrap();
        assert_eq!(config.catalog_url, "/static/lang.json");
        assert_eq!(config.storage_key, "preferredLanguage");
        assert_eq!(config.supported_locales.len(), 2);
    }

    #[test]
    fn default_outside_supported_set_is_rejected() {
        let err = I18nConfig::from_json(r#"{ "default_locale": "de" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedDefault(_)));
    }

    #[test]
    fn empty_locale_list_is_rejected() {
        let err = I18nConfig::from_json(r#"{ "supported_locales": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoLocales));
    }
}
