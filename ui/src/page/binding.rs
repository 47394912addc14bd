//! How a resolved string lands on an element.

use super::document::PageElement;
use crate::i18n::bundle::TranslationBundle;

/// The kinds of element a translation key can be bound to. Chosen once per
/// element from its tag and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// `<input>`/`<textarea>`: optional placeholder key, value filled only
    /// while the control is empty.
    FormValue { placeholder_key: Option<String> },
    /// Rewrites an existing attribute (`alt` on images, `aria-label`).
    Attribute(&'static str),
    TextContent,
}

impl Binding {
    pub fn classify<E: PageElement>(element: &E, placeholder_attribute: &str) -> Self {
        match element.tag_name().as_str() {
            "input" | "textarea" => Binding::FormValue {
                placeholder_key: element.attribute(placeholder_attribute),
            },
            "img" if element.has_attribute("alt") => Binding::Attribute("alt"),
            _ if element.has_attribute("aria-label") => Binding::Attribute("aria-label"),
            _ => Binding::TextContent,
        }
    }

    /// Write `value` (already resolved from the element's key) to `element`.
    pub fn write<E: PageElement>(&self, element: &E, value: &str, bundle: &TranslationBundle) {
        match self {
            Binding::FormValue { placeholder_key } => {
                let placeholder = placeholder_key
                    .as_deref()
                    .and_then(|key| bundle.resolve(key))
                    .filter(|text| !text.is_empty());
                if let Some(text) = placeholder {
                    element.set_attribute("placeholder", text);
                }
                // user input always wins
                if element.form_value().unwrap_or_default().is_empty() {
                    element.set_form_value(value);
                }
            }
            Binding::Attribute(name) => element.set_attribute(name, value),
            Binding::TextContent => element.set_text_content(value),
        }
    }
}
