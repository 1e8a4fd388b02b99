//! Audio manager - owns the single audio element and keeps it in sync with
//! the playback controller, outside of the component render cycle.

use dioxus::prelude::*;

use crate::components::PlayerController;

#[cfg(target_arch = "wasm32")]
use crate::db;
#[cfg(target_arch = "wasm32")]
use crate::tracks::track_at;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Initialize the global audio element once. There is exactly one of these
/// per page, so at most one source ever produces sound.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id("porchlight-audio") {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id("porchlight-audio");
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn get_or_create_audio_element() -> Option<()> {
    None
}

/// Start playback, swallowing autoplay rejections. The logical playing intent
/// is kept even when the browser refuses to start output.
#[cfg(target_arch = "wasm32")]
fn web_try_play(audio: &HtmlAudioElement) {
    if let Ok(promise) = audio.play() {
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                tracing::warn!("playback start rejected: {err:?}");
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn persist(controller: &PlayerController) {
    if let Err(err) = db::save_player_state(&controller.snapshot()) {
        tracing::warn!("failed to persist player state: {err:?}");
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlayerController>();
    let last_src = use_signal(|| None::<String>);

    // One-time setup: create the element, bind the unload hook, and start the
    // once-per-second progress/persistence loop.
    {
        let controller = controller.clone();
        use_effect(move || {
            let Some(_audio) = get_or_create_audio_element() else {
                return;
            };

            if let Some(win) = window() {
                let unload_controller = controller.clone();
                let unload_cb = Closure::wrap(Box::new(move || {
                    let _ = db::save_player_state(&unload_controller.snapshot());
                }) as Box<dyn FnMut()>);
                let _ = win.add_event_listener_with_callback(
                    "beforeunload",
                    unload_cb.as_ref().unchecked_ref(),
                );
                unload_cb.forget();
            }

            let controller = controller.clone();
            spawn(async move {
                let mut ended_at_index = None::<usize>;

                loop {
                    gloo_timers::future::TimeoutFuture::new(1_000).await;

                    if !controller.is_ready() {
                        continue;
                    }
                    let Some(audio) = get_or_create_audio_element() else {
                        continue;
                    };

                    controller.set_elapsed(audio.current_time());

                    if audio.ended() {
                        let index = controller.snapshot().track_index;
                        // Advance exactly once per finished track; the source
                        // swap below clears the ended flag.
                        if ended_at_index != Some(index) {
                            ended_at_index = Some(index);
                            controller.next();
                        }
                    } else {
                        ended_at_index = None;
                    }

                    persist(&controller);
                }
            });
        });
    }

    // Load the current track into the element whenever the index changes.
    {
        let controller = controller.clone();
        let mut last_src = last_src.clone();
        use_effect(move || {
            let index = controller.track_index();
            if !controller.ready() {
                return;
            }
            let Some(audio) = get_or_create_audio_element() else {
                return;
            };

            let track = track_at(index);
            if last_src.peek().as_deref() == Some(track.audio_src) {
                return;
            }
            last_src.set(Some(track.audio_src.to_string()));

            audio.set_src(track.audio_src);
            if let Some(position) = controller.take_pending_seek() {
                audio.set_current_time(position);
            }
            if controller.snapshot().is_playing {
                web_try_play(&audio);
            }
            persist(&controller);
        });
    }

    // Apply the playing intent to the element.
    {
        let controller = controller.clone();
        use_effect(move || {
            let playing = controller.is_playing();
            if !controller.ready() {
                return;
            }
            let Some(audio) = get_or_create_audio_element() else {
                return;
            };

            if playing {
                if audio.paused() {
                    web_try_play(&audio);
                }
            } else if !audio.paused() {
                let _ = audio.pause();
            }
            persist(&controller);
        });
    }

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    let _controller = use_context::<PlayerController>();
    rsx! {}
}
