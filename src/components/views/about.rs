use dioxus::prelude::*;

use super::SiteFooter;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        section { class: "page__content",
            h2 { class: "page__heading", "About this place" }
            p { class: "page__text",
                "porchlight is a one-person corner of the web. The record player in the \
                 bar remembers where it was for as long as the tab lives, so the music \
                 doesn't stop when you change rooms."
            }
            p { class: "page__text",
                "Built with a handful of parts and no servers to speak of."
            }
            SiteFooter {}
        }
    }
}
