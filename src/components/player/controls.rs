use dioxus::prelude::*;

use crate::components::{Icon, PlayerController};

/// Play/pause toggle, one per surface. The glyph tracks the playing intent.
#[component]
pub(super) fn PlayPauseButton(id: String, class: String) -> Element {
    let controller = use_context::<PlayerController>();
    let playing = controller.is_playing();

    let on_click = {
        let controller = controller.clone();
        move |_| controller.toggle()
    };

    rsx! {
        button {
            id: "{id}",
            r#type: "button",
            class: "{class}",
            aria_label: if playing { "Pause" } else { "Play" },
            onclick: on_click,
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "music-player__icon".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "music-player__icon".to_string(),
                }
            }
        }
    }
}

#[component]
pub(super) fn PrevButton(id: String, class: String) -> Element {
    let controller = use_context::<PlayerController>();

    let on_click = {
        let controller = controller.clone();
        move |_| controller.previous()
    };

    rsx! {
        button {
            id: "{id}",
            r#type: "button",
            class: "{class}",
            aria_label: "Previous track",
            onclick: on_click,
            Icon {
                name: "skip-back".to_string(),
                class: "music-player__icon".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn NextButton(id: String, class: String) -> Element {
    let controller = use_context::<PlayerController>();

    let on_click = {
        let controller = controller.clone();
        move |_| controller.next()
    };

    rsx! {
        button {
            id: "{id}",
            r#type: "button",
            class: "{class}",
            aria_label: "Next track",
            onclick: on_click,
            Icon {
                name: "skip-forward".to_string(),
                class: "music-player__icon".to_string(),
            }
        }
    }
}
