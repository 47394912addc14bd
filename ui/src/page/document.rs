//! The read/write contract the content applier has with "whatever renders the
//! page". Implemented over the live DOM (`page::web`) and an in-memory model
//! (`page::memory`).

/// The handful of lookups the applier performs, typed so non-browser
/// documents don't need a CSS engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `meta[name="…"]`
    MetaName(&'a str),
    /// `meta[property="…"]`
    MetaProperty(&'a str),
    /// `[attr]`
    HasAttribute(&'a str),
    /// `#id`
    Id(&'a str),
    /// `script[type="…"]`
    ScriptType(&'a str),
}

impl<'a> Selector<'a> {
    pub fn to_css(&self) -> String {
        match self {
            Selector::MetaName(name) => format!(r#"meta[name="{name}"]"#),
            Selector::MetaProperty(prop) => format!(r#"meta[property="{prop}"]"#),
            Selector::HasAttribute(attr) => format!("[{attr}]"),
            Selector::Id(id) => format!("#{id}"),
            Selector::ScriptType(ty) => format!(r#"script[type="{ty}"]"#),
        }
    }

    /// The `(attribute, value)` pair identifying a meta tag, for creating
    /// one that matches this selector. `None` for non-meta selectors.
    pub fn meta_attribute(&self) -> Option<(&'static str, &'a str)> {
        match *self {
            Selector::MetaName(name) => Some(("name", name)),
            Selector::MetaProperty(prop) => Some(("property", prop)),
            _ => None,
        }
    }
}

/// One element. Handles are cheap clones that refer to the same node.
pub trait PageElement: Clone {
    /// Lower-case tag name (`input`, `img`, …).
    fn tag_name(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn text_content(&self) -> String;
    fn set_text_content(&self, value: &str);
    /// Current value of a form control; `None` for anything else.
    fn form_value(&self) -> Option<String>;
    fn set_form_value(&self, value: &str);

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

pub trait PageDocument {
    type Element: PageElement;

    fn title(&self) -> String;
    fn set_title(&self, title: &str);
    fn lang(&self) -> Option<String>;
    /// Set the root element's `lang` attribute.
    fn set_lang(&self, lang: &str);

    fn query_one(&self, selector: Selector<'_>) -> Option<Self::Element>;
    /// All matches in document order.
    fn query_all(&self, selector: Selector<'_>) -> Vec<Self::Element>;
    /// Create `<tag>` with `attrs` and append it to `<head>`. `None` if the
    /// document has no head to append to.
    fn append_to_head(&self, tag: &str, attrs: &[(&str, &str)]) -> Option<Self::Element>;
}
