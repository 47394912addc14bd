//! Live browser DOM via `web-sys`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::document::{PageDocument, PageElement, Selector};

#[derive(Debug, Clone)]
pub struct WebElement(Element);

impl PageElement for WebElement {
    fn tag_name(&self) -> String {
        self.0.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if self.0.set_attribute(name, value).is_err() {
            tracing::debug!(target: "i18n", attribute = name, "setAttribute rejected");
        }
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, value: &str) {
        self.0.set_text_content(Some(value));
    }

    fn form_value(&self) -> Option<String> {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        self.0.dyn_ref::<HtmlSelectElement>().map(|s| s.value())
    }

    fn set_form_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebDocument(Document);

impl WebDocument {
    /// The current window's document, if running in a page.
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self)
    }
}

impl PageDocument for WebDocument {
    type Element = WebElement;

    fn title(&self) -> String {
        self.0.title()
    }

    fn set_title(&self, title: &str) {
        self.0.set_title(title);
    }

    fn lang(&self) -> Option<String> {
        self.0.document_element()?.get_attribute("lang")
    }

    fn set_lang(&self, lang: &str) {
        if let Some(root) = self.0.document_element() {
            root.set_attribute("lang", lang).ok();
        }
    }

    fn query_one(&self, selector: Selector<'_>) -> Option<WebElement> {
        self.0
            .query_selector(&selector.to_css())
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn query_all(&self, selector: Selector<'_>) -> Vec<WebElement> {
        let Ok(nodes) = self.0.query_selector_all(&selector.to_css()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn append_to_head(&self, tag: &str, attrs: &[(&str, &str)]) -> Option<WebElement> {
        let head = self.0.head()?;
        let element = self.0.create_element(tag).ok()?;
        for (name, value) in attrs {
            element.set_attribute(name, value).ok()?;
        }
        head.append_child(&element).ok()?;
        Some(WebElement(element))
    }
}
