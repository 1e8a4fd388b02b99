use dioxus::prelude::*;

use crate::components::Icon;
use crate::db;
use crate::theme::Theme;

/// Navbar dropdown for switching between the three themes. Selecting an
/// option applies it, persists it for the session, and closes the list.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let mut open = use_signal(|| false);
    let current = theme();

    rsx! {
        div { class: "theme-toggle",
            button {
                id: "theme-toggle",
                r#type: "button",
                class: if open() { "theme-toggle__button theme-toggle__button--open" } else { "theme-toggle__button" },
                onclick: move |_| {
                    let next = !*open.peek();
                    open.set(next);
                },
                Icon {
                    name: current.icon().to_string(),
                    class: "theme-toggle__icon".to_string(),
                }
                span { class: "theme-toggle__text", {current.label()} }
                Icon {
                    name: "chevron-down".to_string(),
                    class: "theme-toggle__chevron".to_string(),
                }
            }
            if open() {
                div { id: "theme-dropdown", class: "theme-toggle__dropdown",
                    for option in Theme::ALL {
                        button {
                            r#type: "button",
                            class: if option == current { "theme-option theme-option--active" } else { "theme-option" },
                            onclick: move |_| {
                                theme.set(option);
                                db::save_theme(option);
                                open.set(false);
                            },
                            Icon {
                                name: option.icon().to_string(),
                                class: "theme-option__icon".to_string(),
                            }
                            span { {option.label()} }
                        }
                    }
                }
            }
        }
    }
}
