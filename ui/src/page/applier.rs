//! Writes a translation bundle onto the page.

use std::rc::Rc;

use serde_json::Value;

use super::binding::Binding;
use super::document::{PageDocument, PageElement, Selector};
use crate::core::config::I18nConfig;
use crate::core::locale::Locale;
use crate::i18n::bundle::TranslationBundle;

const STRUCTURED_DATA_TYPE: &str = "application/ld+json";

/// Rewrites page metadata and every marked element for one locale.
///
/// `apply` never fails. Missing meta tags are created in `<head>`; missing
/// optional anchors (selector, structured data) are skipped; keys that
/// don't resolve leave their element as it was.
pub struct ContentApplier<D> {
    document: D,
    config: Rc<I18nConfig>,
}

impl<D: PageDocument> ContentApplier<D> {
    pub fn new(document: D, config: Rc<I18nConfig>) -> Self {
        Self { document, config }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn apply(&self, bundle: &TranslationBundle, locale: &Locale) {
        if !bundle.has_meta() {
            tracing::debug!(target: "i18n", %locale, "bundle has no meta section; leaving page as-is");
            return;
        }

        self.apply_metadata(bundle, locale);
        let bound = self.apply_bindings(bundle);

        self.document.set_lang(locale.as_str());
        if let Some(selector) = self.document.query_one(Selector::Id(&self.config.selector_id)) {
            selector.set_form_value(locale.as_str());
        }

        self.refresh_structured_data(bundle);
        tracing::info!(target: "i18n", %locale, bound, "translations applied");
    }

    fn apply_metadata(&self, bundle: &TranslationBundle, locale: &Locale) {
        if let Some(title) = bundle.resolve("meta.title") {
            self.document.set_title(title);
            self.upsert_meta(Selector::MetaProperty("og:title"), title);
        }
        if let Some(description) = bundle.resolve("meta.description") {
            self.upsert_meta(Selector::MetaName("description"), description);
            self.upsert_meta(Selector::MetaProperty("og:description"), description);
        }
        self.upsert_meta(
            Selector::MetaProperty("og:locale"),
            locale.og_locale(&self.config),
        );
    }

    /// Set `content` on the meta tag `selector` names, creating it if needed.
    fn upsert_meta(&self, selector: Selector<'_>, content: &str) {
        let Some((attr, key)) = selector.meta_attribute() else {
            return;
        };
        let tag = self
            .document
            .query_one(selector)
            .or_else(|| self.document.append_to_head("meta", &[(attr, key)]));
        match tag {
            Some(tag) => tag.set_attribute("content", content),
            None => tracing::debug!(target: "i18n", key, "no <head> to hold meta tag"),
        }
    }

    /// Returns how many elements received a value.
    fn apply_bindings(&self, bundle: &TranslationBundle) -> usize {
        let marker = self.config.key_attribute.as_str();
        let mut bound = 0;
        for element in self.document.query_all(Selector::HasAttribute(marker)) {
            let Some(key) = element.attribute(marker) else {
                continue;
            };
            let Some(value) = bundle.resolve(&key) else {
                continue;
            };
            Binding::classify(&element, &self.config.placeholder_attribute)
                .write(&element, value, bundle);
            bound += 1;
        }
        bound
    }

    /// Point the JSON-LD `description` at the localized one, if the page has
    /// a schema block that carries a description.
    fn refresh_structured_data(&self, bundle: &TranslationBundle) {
        let Some(description) = bundle.resolve("meta.description") else {
            return;
        };
        let Some(script) = self
            .document
            .query_one(Selector::ScriptType(STRUCTURED_DATA_TYPE))
        else {
            return;
        };

        let mut schema: Value = match serde_json::from_str(&script.text_content()) {
            Ok(schema) => schema,
            Err(err) => {
                tracing::warn!(target: "i18n", %err, "could not update structured data");
                return;
            }
        };
        // only a schema that already describes itself gets the localized text
        let Some(field) = schema
            .get_mut("description")
            .filter(|v| v.as_str().is_some_and(|s| !s.is_empty()))
        else {
            return;
        };
        *field = Value::String(description.to_string());

        match serde_json::to_string(&schema) {
            Ok(serialized) => script.set_text_content(&serialized),
            Err(err) => tracing::warn!(target: "i18n", %err, "could not update structured data"),
        }
    }
}
