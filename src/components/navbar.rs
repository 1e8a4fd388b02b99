use dioxus::prelude::*;

use crate::components::{view_label, AppView, ClockSignal, NavPlayer, ThemeToggle};

/// Top navigation bar: brand, page links, the compact player surface, the
/// shared clock, and the theme dropdown.
#[component]
pub fn NavBar() -> Element {
    let mut current_view = use_context::<Signal<AppView>>();
    let clock = use_context::<ClockSignal>().0;
    let view = current_view();

    rsx! {
        header { class: "navbar",
            button {
                class: "navbar__brand",
                onclick: move |_| current_view.set(AppView::Splash),
                "porchlight"
            }
            nav { class: "navbar__links",
                for target in [AppView::Home, AppView::About] {
                    button {
                        class: if view == target { "navbar__link navbar__link--active" } else { "navbar__link" },
                        onclick: move |_| current_view.set(target),
                        {view_label(&target)}
                    }
                }
            }
            NavPlayer {}
            span { id: "nav-clock", class: "navbar__clock", "{clock}" }
            ThemeToggle {}
        }
    }
}
