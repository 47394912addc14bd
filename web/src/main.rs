use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use ui::core::{config::I18nConfig, locale::Locale, platform, storage::LocalStorage};
#[cfg(target_arch = "wasm32")]
use ui::i18n::HttpCatalogSource;
#[cfg(target_arch = "wasm32")]
use ui::page::WebDocument;
#[cfg(target_arch = "wasm32")]
use ui::session::LocaleSession;

use ui::components::LanguageSelector;

#[cfg(target_arch = "wasm32")]
type WebSession = LocaleSession<HttpCatalogSource, WebDocument, LocalStorage>;

fn main() {
    if let Err(err) = dioxus::logger::init(dioxus::logger::tracing::Level::INFO) {
        eprintln!("[i18n] Failed initializing logger ({err}); continuing without logs");
    }
    dioxus::launch(App);
}

#[cfg(target_arch = "wasm32")]
fn build_session() -> Option<Rc<WebSession>> {
    let config = I18nConfig::default();
    let document = WebDocument::current()?;
    let source = HttpCatalogSource::new(config.catalog_url.clone());
    Some(Rc::new(LocaleSession::new(
        config,
        source,
        document,
        LocalStorage,
    )))
}

#[cfg(target_arch = "wasm32")]
#[component]
fn App() -> Element {
    let session = use_hook(build_session);
    let Some(session) = session else {
        tracing::error!(target: "i18n", "no document available; localization disabled");
        return rsx! { Landing {} };
    };

    let initial = use_hook({
        let session = session.clone();
        move || session.resolve_initial(&platform::requested_languages())
    });

    // First paint: apply the initial locale, then warm the other one.
    use_hook({
        let session = session.clone();
        let initial = initial.clone();
        move || {
            platform::spawn_future(async move {
                if let Some(alternate) = session.start(initial).await {
                    platform::spawn_future(session.preload_task(alternate));
                }
            })
        }
    });

    let locales: Vec<String> = session
        .config()
        .supported_locales
        .iter()
        .map(|l| l.to_string())
        .collect();
    let selector_id = session.config().selector_id.clone();

    let on_select = move |code: String| {
        let session = session.clone();
        platform::spawn_future(async move {
            session.switch(Locale::new(code)).await;
        });
    };

    rsx! {
        header { class: "navbar",
            LanguageSelector {
                selector_id,
                locales,
                initial: initial.to_string(),
                on_select,
            }
        }
        Landing {}
    }
}

/// Static page skeleton rendered in English; `data-i18n` markers are
/// rewritten in place by the session once translations arrive.
#[component]
fn Landing() -> Element {
    rsx! {
        nav { class: "nav-menu",
            button { class: "hamburger", "data-i18n": "nav.menu", aria_label: "Open menu", aria_expanded: "false" }
            a { class: "nav-link", href: "#services", "data-i18n": "nav.services", "Services" }
            a { class: "nav-link", href: "#pricing", "data-i18n": "nav.pricing", "Pricing" }
            a { class: "nav-link", href: "#contact", "data-i18n": "nav.contact", "Contact" }
        }
        main {
            section { class: "hero",
                h1 { "data-i18n": "hero.title", "Events your team will talk about" }
                p { "data-i18n": "hero.subtitle" }
                img { src: "/assets/hero.webp", alt: "", "data-i18n": "hero.image_alt" }
                div { class: "cta-container",
                    a { class: "btn", href: "https://calendly.com", span { class: "btn-text", "data-i18n": "hero.cta.label", "Book a discovery call" } }
                }
                p { class: "live-counter",
                    span { id: "liveCounter", "142" }
                    " "
                    span { "data-i18n": "hero.counter", "events delivered this year" }
                }
            }
            section { id: "services",
                h2 { "data-i18n": "services.title", "What we do" }
                ul {
                    li { "data-i18n": "services.conferences" }
                    li { "data-i18n": "services.launches" }
                    li { "data-i18n": "services.retreats" }
                }
            }
            section { id: "pricing",
                h2 { "data-i18n": "pricing.title", "Simple pricing" }
                div { class: "pricing-card", h3 { "data-i18n": "pricing.essential", "Essential" } }
                div { class: "pricing-card featured", h3 { "data-i18n": "pricing.signature", "Signature" } }
            }
            section { id: "contact",
                h2 { "data-i18n": "contact.title", "Tell us about your event" }
                form { id: "event-lead-form", method: "post",
                    input { r#type: "hidden", name: "_subject", "data-i18n": "contact.subject" }
                    label { r#for: "name", "data-i18n": "contact.name", "Name" }
                    input { id: "name", name: "name", r#type: "text" }
                    label { r#for: "email", "data-i18n": "contact.email", "Email" }
                    input { id: "email", name: "email", r#type: "email" }
                    label { r#for: "message", "data-i18n": "contact.message", "Your event" }
                    textarea { id: "message", name: "message" }
                    button { r#type: "submit", span { class: "btn-text", "data-i18n": "contact.submit", "Send request" } }
                }
            }
        }
        footer { p { "data-i18n": "footer.rights", "All rights reserved." } }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
fn App() -> Element {
    // Native builds have no page to localize; render the skeleton with a
    // selector that does nothing beyond tracking its own value.
    rsx! {
        header { class: "navbar",
            LanguageSelector {
                selector_id: "language-selector".to_string(),
                locales: vec!["en".to_string(), "fr".to_string()],
                initial: "en".to_string(),
                on_select: move |_code: String| {},
            }
        }
        Landing {}
    }
}
