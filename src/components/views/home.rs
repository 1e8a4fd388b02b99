use dioxus::prelude::*;

use super::SiteFooter;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        section { class: "page__content",
            h2 { class: "page__heading", "Latest from the porch" }
            div { class: "card-grid",
                article { class: "card",
                    h3 { class: "card__title", "Now spinning" }
                    p { class: "card__body",
                        "Whatever the nav player is humming right now — it keeps going while you wander between pages."
                    }
                }
                article { class: "card",
                    h3 { class: "card__title", "Day and night" }
                    p { class: "card__body",
                        "The porch light follows the hour. Flip the theme from the bar above if it guessed wrong."
                    }
                }
                article { class: "card",
                    h3 { class: "card__title", "Slow web" }
                    p { class: "card__body",
                        "No feeds, no counters. Just a clock, three songs, and somewhere to sit."
                    }
                }
            }
            SiteFooter {}
        }
    }
}
