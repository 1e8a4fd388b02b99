//! The site's pages.

use chrono::Datelike;
use dioxus::prelude::*;

mod about;
mod home;
mod splash;

pub use about::AboutView;
pub use home::HomeView;
pub use splash::SplashView;

/// Shared page footer with the current year.
#[component]
pub(crate) fn SiteFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            "© "
            span { id: "footer-year", "{year}" }
            " · porchlight"
        }
    }
}
