use dioxus::prelude::*;

mod components;
mod db;
mod player;
mod theme;
mod tracks;
mod utils;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#1a1a1a" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
