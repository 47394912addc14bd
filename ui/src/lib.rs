//! Shared crate for the landing page. Localization logic and the small
//! Dioxus components the platform crates mount live here.

pub mod core;
pub mod i18n;
pub mod page;
pub mod session;

pub mod components {
    // Locale picker island (components/language_selector.rs)
    pub mod language_selector;
    pub use language_selector::LanguageSelector;
}
