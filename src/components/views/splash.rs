use dioxus::prelude::*;

use crate::components::{AppView, ClockSignal, SplashPlayer};

/// The landing view: a welcome clock, the large player surface, and the way
/// into the rest of the site. There is no navigation bar here, so the splash
/// player is the only surface on this page.
#[component]
pub fn SplashView() -> Element {
    let mut current_view = use_context::<Signal<AppView>>();
    let clock = use_context::<ClockSignal>().0;

    rsx! {
        section { class: "splash",
            p { id: "welcome-clock", class: "splash__clock", "{clock}" }
            h1 { class: "splash__title", "Hello, it's quiet out here." }
            p { class: "splash__subtitle",
                "A small porch on the web — a clock, a record spinning, and a light that knows the hour."
            }
            SplashPlayer {}
            button {
                class: "splash__enter",
                onclick: move |_| current_view.set(AppView::Home),
                "Step inside"
            }
        }
    }
}
