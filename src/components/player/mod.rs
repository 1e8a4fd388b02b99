//! The player surfaces. Every rendered copy of the widget subscribes to the
//! same controller, so cover art, track info, button glyphs, and the rotation
//! animation stay consistent everywhere without imperative fan-out.

use dioxus::prelude::*;

use crate::components::PlayerController;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton};

/// How a surface renders its cover element.
#[derive(Clone, Copy, PartialEq)]
pub enum CoverVariant {
    /// An `img` tag whose `src` tracks the current cover.
    Image,
    /// A block element styled with a CSS background image.
    Backdrop,
}

/// Disk art shared by every surface. Clicking it toggles playback, and it
/// spins exactly while the playing intent is set.
#[component]
pub fn CoverArt(variant: CoverVariant, class: String) -> Element {
    let controller = use_context::<PlayerController>();
    let track = controller.current_track();

    let cover_class = if controller.is_playing() {
        format!("music-player__cover rotating {class}")
    } else {
        format!("music-player__cover {class}")
    };

    let on_click = {
        let controller = controller.clone();
        move |_| controller.toggle()
    };

    match variant {
        CoverVariant::Image => rsx! {
            img {
                class: "{cover_class}",
                src: "{track.cover}",
                alt: "{track.title}",
                onclick: on_click,
            }
        },
        CoverVariant::Backdrop => rsx! {
            div {
                class: "{cover_class}",
                style: "background-image: url('{track.cover}')",
                onclick: on_click,
            }
        },
    }
}

/// The large splash-screen player surface.
#[component]
pub fn SplashPlayer() -> Element {
    let controller = use_context::<PlayerController>();
    let track = controller.current_track();

    rsx! {
        div { class: "music-player music-player--splash",
            div { class: "music-player__disk",
                CoverArt {
                    variant: CoverVariant::Backdrop,
                    class: "music-player__cover--splash".to_string(),
                }
            }
            div { class: "music-player__info",
                p { id: "song-title", class: "music-player__title", "{track.title}" }
                p { id: "song-artist", class: "music-player__artist", "{track.artist}" }
            }
            div { class: "music-player__controls",
                PrevButton {
                    id: "prev-btn".to_string(),
                    class: "music-player__button".to_string(),
                }
                PlayPauseButton {
                    id: "play-btn".to_string(),
                    class: "music-player__button music-player__button--primary".to_string(),
                }
                NextButton {
                    id: "next-btn".to_string(),
                    class: "music-player__button".to_string(),
                }
            }
        }
    }
}

/// The compact navigation-bar player surface. Only the title is shown; the
/// artist lives on the splash surface.
#[component]
pub fn NavPlayer() -> Element {
    let controller = use_context::<PlayerController>();
    let track = controller.current_track();

    rsx! {
        div { class: "music-player music-player--nav",
            div { class: "music-player__disk",
                CoverArt {
                    variant: CoverVariant::Image,
                    class: "music-player__cover--nav".to_string(),
                }
            }
            p { class: "nav-song-title", "{track.title}" }
            div { class: "music-player__controls music-player__controls--nav",
                PrevButton {
                    id: "nav-prev-btn".to_string(),
                    class: "music-player__button music-player__button--nav".to_string(),
                }
                PlayPauseButton {
                    id: "nav-play-btn".to_string(),
                    class: "music-player__button music-player__button--nav".to_string(),
                }
                NextButton {
                    id: "nav-next-btn".to_string(),
                    class: "music-player__button music-player__button--nav".to_string(),
                }
            }
        }
    }
}
