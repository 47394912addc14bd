//! One locale's translations: a tree of string leaves addressed by dotted keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nested string tree for a single locale.
///
/// Kept as raw JSON so authors can nest sections as deep as they like; only
/// string leaves are ever handed to the page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationBundle(Map<String, Value>);

impl TranslationBundle {
    /// The "nothing to apply" bundle returned when a catalog can't be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Walk `key` one `.`-separated segment at a time.
    ///
    /// Returns `None` if any intermediate level is missing or is not an
    /// object, or if the final value is not a string.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        current.as_str()
    }

    /// Whether a `meta` section exists (the guard `apply` checks first).
    pub fn has_meta(&self) -> bool {
        self.0.get("meta").is_some_and(Value::is_object)
    }

    /// Every dotted path that leads to a string leaf, sorted.
    pub fn leaf_keys(&self) -> Vec<String> {
        fn walk(prefix: &str, map: &Map<String, Value>, out: &mut Vec<String>) {
            for (name, value) in map {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                match value {
                    Value::String(_) => out.push(path),
                    Value::Object(child) => walk(&path, child, out),
                    _ => {}
                }
            }
        }

        let mut keys = Vec::new();
        walk("", &self.0, &mut keys);
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle(value: Value) -> TranslationBundle {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn resolves_nested_leaf() {
        let b = bundle(json!({ "hero": { "cta": { "label": "Book a call" } } }));
        assert_eq!(b.resolve("hero.cta.label"), Some("Book a call"));
    }

    #[test]
    fn missing_or_scalar_intermediate_is_absent() {
        let b = bundle(json!({ "hero": { "title": "Hi" }, "count": 3 }));
        assert_eq!(b.resolve("hero.cta.label"), None);
        assert_eq!(b.resolve("hero.title.more"), None);
        assert_eq!(b.resolve("count.value"), None);
        assert_eq!(b.resolve("nav"), None);
    }

    #[test]
    fn non_string_leaves_are_absent() {
        let b = bundle(json!({ "a": null, "b": { "c": 1 }, "d": ["x"], "e": { "f": {} } }));
        assert_eq!(b.resolve("a"), None);
        assert_eq!(b.resolve("b.c"), None);
        assert_eq!(b.resolve("d"), None);
        assert_eq!(b.resolve("d.0"), None);
        assert_eq!(b.resolve("e.f"), None);
    }

    #[test]
    fn malformed_paths_never_panic() {
        let b = bundle(json!({ "": { "": "blank" }, "meta": { "title": "T" } }));
        assert_eq!(b.resolve(""), None);
        assert_eq!(b.resolve("."), Some("blank"));
        assert_eq!(b.resolve("meta."), None);
        assert_eq!(b.resolve("..."), None);
    }

    #[test]
    fn meta_guard() {
        assert!(!TranslationBundle::empty().has_meta());
        assert!(!bundle(json!({ "meta": "x" })).has_meta());
        assert!(bundle(json!({ "meta": { "title": "T" } })).has_meta());
    }

    #[test]
    fn leaf_keys_are_sorted_dotted_paths() {
        let b = bundle(json!({ "nav": { "home": "Home", "about": "About" }, "meta": { "title": "T" }, "n": 1 }));
        assert_eq!(b.leaf_keys(), vec!["meta.title", "nav.about", "nav.home"]);
    }
}
