use dioxus::prelude::*;

/// Locale `<select>` for the navbar.
///
/// The component only owns the control. Loading and applying translations is
/// the platform crate's job: it passes an `on_select` handler that forwards
/// the chosen code to its `LocaleSession`. The session also writes the
/// active code back into this control (by `selector_id`) after each apply,
/// so both stay in step.
#[component]
pub fn LanguageSelector(
    selector_id: String,
    locales: Vec<String>,
    initial: String,
    on_select: EventHandler<String>,
) -> Element {
    let mut current = use_signal(|| initial.clone());

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        current.set(val.clone());
        on_select.call(val);
    };

    rsx! {
        div { class: "language-selector",
            select {
                id: "{selector_id}",
                value: "{current()}",
                "data-i18n": "nav.language",
                aria_label: "Language",
                onchange: on_change,
                { locales.iter().map(|code| {
                    let label = code.to_uppercase();
                    rsx! {
                        option { key: "{code}", value: "{code}", "{label}" }
                    }
                })}
            }
        }
    }
}
