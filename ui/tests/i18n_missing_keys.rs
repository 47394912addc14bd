use std::collections::BTreeSet;

use ui::core::config::I18nConfig;
use ui::core::locale::Locale;
use ui::i18n::Catalog;

/// Translation completeness test.
/// Ensures every supported locale in the bundled `i18n.json` provides *at
/// least* the keys present in the default locale, and that each one carries
/// the `meta.title` / `meta.description` leaves the page head is built from.
///
/// If you add a new locale:
/// 1. Add a top-level `"<code>": { … }` object to `ui/i18n/i18n.json`
/// 2. Copy every key from `"en"` and translate the values
/// 3. Add the code to `I18nConfig::supported_locales`
/// 4. Run `cargo test -p landing-ui` to confirm completeness.
const CATALOG: &str = include_str!("../i18n/i18n.json");

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG).expect("bundled i18n.json must parse")
}

#[test]
fn every_supported_locale_is_present() {
    let config = I18nConfig::default();
    let shipped: BTreeSet<Locale> = catalog().locales().collect();
    for locale in &config.supported_locales {
        assert!(shipped.contains(locale), "i18n.json has no `{locale}` section");
    }
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let config = I18nConfig::default();
    let catalog = catalog();
    let fallback: BTreeSet<String> = catalog
        .bundle(&config.default_locale)
        .leaf_keys()
        .into_iter()
        .collect();
    assert!(!fallback.is_empty(), "Fallback locale contains no keys.");

    let mut failures = Vec::new();
    for locale in catalog.locales() {
        let keys: BTreeSet<String> = catalog.bundle(&locale).leaf_keys().into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from the default locale, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn every_locale_has_page_metadata() {
    let catalog = catalog();
    for locale in catalog.locales() {
        let bundle = catalog.bundle(&locale);
        for key in ["meta.title", "meta.description"] {
            let value = bundle.resolve(key);
            assert!(
                value.is_some_and(|v| !v.trim().is_empty()),
                "{locale} is missing a non-empty `{key}`"
            );
        }
    }
}
