//! In-memory page model. Native builds and tests render into this instead of
//! a browser DOM.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::document::{PageDocument, PageElement, Selector};

const FORM_TAGS: &[&str] = &["input", "textarea", "select"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementData {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    /// Only form controls carry a value.
    pub value: Option<String>,
    pub in_head: bool,
}

#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl MemoryElement {
    fn new(tag: &str, attrs: &[(&str, &str)], in_head: bool) -> Self {
        let tag = tag.to_ascii_lowercase();
        let value = FORM_TAGS.contains(&tag.as_str()).then(String::new);
        Self(Rc::new(RefCell::new(ElementData {
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            tag,
            text: String::new(),
            value,
            in_head,
        })))
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    /// Simulate user input on a form control.
    pub fn with_value(self, value: &str) -> Self {
        self.set_form_value(value);
        self
    }

    pub fn data(&self) -> ElementData {
        self.0.borrow().clone()
    }

    fn matches(&self, selector: Selector<'_>) -> bool {
        let data = self.0.borrow();
        let attr_is = |name: &str, expected: &str| {
            data.attributes.get(name).map(String::as_str) == Some(expected)
        };
        match selector {
            Selector::MetaName(name) => data.tag == "meta" && attr_is("name", name),
            Selector::MetaProperty(prop) => data.tag == "meta" && attr_is("property", prop),
            Selector::HasAttribute(attr) => data.attributes.contains_key(attr),
            Selector::Id(id) => attr_is("id", id),
            Selector::ScriptType(ty) => data.tag == "script" && attr_is("type", ty),
        }
    }
}

impl PageElement for MemoryElement {
    fn tag_name(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn text_content(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text_content(&self, value: &str) {
        self.0.borrow_mut().text = value.to_string();
    }

    fn form_value(&self) -> Option<String> {
        self.0.borrow().value.clone()
    }

    fn set_form_value(&self, value: &str) {
        let mut data = self.0.borrow_mut();
        if data.value.is_some() {
            data.value = Some(value.to_string());
        }
    }
}

/// Observable state of a [`MemoryDocument`], for equality checks.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub title: String,
    pub lang: Option<String>,
    pub elements: Vec<ElementData>,
}

#[derive(Debug)]
struct Inner {
    title: String,
    lang: Option<String>,
    has_head: bool,
    elements: Vec<MemoryElement>,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument(Rc<RefCell<Inner>>);

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Inner {
            title: String::new(),
            lang: None,
            has_head: true,
            elements: Vec::new(),
        })))
    }

    /// A document fragment with nowhere to put new head elements.
    pub fn without_head() -> Self {
        let doc = Self::new();
        doc.0.borrow_mut().has_head = false;
        doc
    }

    pub fn with_title(self, title: &str) -> Self {
        self.set_title(title);
        self
    }

    /// Append a body element.
    pub fn add(&self, tag: &str, attrs: &[(&str, &str)]) -> MemoryElement {
        let element = MemoryElement::new(tag, attrs, false);
        self.0.borrow_mut().elements.push(element.clone());
        element
    }

    pub fn head_elements(&self) -> Vec<MemoryElement> {
        self.0
            .borrow()
            .elements
            .iter()
            .filter(|e| e.0.borrow().in_head)
            .cloned()
            .collect()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        let inner = self.0.borrow();
        DocumentSnapshot {
            title: inner.title.clone(),
            lang: inner.lang.clone(),
            elements: inner.elements.iter().map(MemoryElement::data).collect(),
        }
    }
}

impl PageDocument for MemoryDocument {
    type Element = MemoryElement;

    fn title(&self) -> String {
        self.0.borrow().title.clone()
    }

    fn set_title(&self, title: &str) {
        self.0.borrow_mut().title = title.to_string();
    }

    fn lang(&self) -> Option<String> {
        self.0.borrow().lang.clone()
    }

    fn set_lang(&self, lang: &str) {
        self.0.borrow_mut().lang = Some(lang.to_string());
    }

    fn query_one(&self, selector: Selector<'_>) -> Option<MemoryElement> {
        self.0
            .borrow()
            .elements
            .iter()
            .find(|e| e.matches(selector))
            .cloned()
    }

    fn query_all(&self, selector: Selector<'_>) -> Vec<MemoryElement> {
        self.0
            .borrow()
            .elements
            .iter()
            .filter(|e| e.matches(selector))
            .cloned()
            .collect()
    }

    fn append_to_head(&self, tag: &str, attrs: &[(&str, &str)]) -> Option<MemoryElement> {
        let mut inner = self.0.borrow_mut();
        if !inner.has_head {
            return None;
        }
        let element = MemoryElement::new(tag, attrs, true);
        inner.elements.push(element.clone());
        Some(element)
    }
}
