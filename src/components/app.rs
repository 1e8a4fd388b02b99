use chrono::Timelike;
use dioxus::prelude::*;

use crate::components::views::{AboutView, HomeView, SplashView};
use crate::components::{AppView, AudioController, NavBar, PlayerController};
use crate::db;
use crate::theme::Theme;
use crate::utils::format_clock;

#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Clock text shared by every surface that renders the time.
#[derive(Clone)]
pub struct ClockSignal(pub Signal<String>);

#[component]
pub fn AppShell() -> Element {
    let current_view = use_signal(|| AppView::Splash);
    let mut theme = use_signal(Theme::default);
    let clock = use_signal(String::new);

    let track_index = use_signal(|| 0usize);
    let is_playing = use_signal(|| false);
    let elapsed = use_signal(|| 0.0f64);
    let pending_seek = use_signal(|| None::<f64>);
    let ready = use_signal(|| false);
    let controller = PlayerController::new(track_index, is_playing, elapsed, pending_seek, ready);

    // Provide state via context
    use_context_provider(|| current_view);
    use_context_provider(|| theme);
    use_context_provider(|| ClockSignal(clock));
    use_context_provider(|| controller.clone());

    // Restore the persisted player state and pick the session theme on mount.
    {
        let controller = controller.clone();
        use_effect(move || {
            if let Some(state) = db::load_player_state() {
                controller.restore(state);
            }
            controller.mark_ready();

            match db::load_theme() {
                Some(saved) => theme.set(saved),
                None => {
                    let fallback = Theme::default_for_hour(chrono::Local::now().hour());
                    db::save_theme(fallback);
                    theme.set(fallback);
                }
            }
        });
    }

    // Mirror the theme (and the splash marker) onto the document body.
    #[cfg(target_arch = "wasm32")]
    {
        let theme = theme.clone();
        let current_view = current_view.clone();
        use_effect(move || {
            let theme = theme();
            let on_splash = current_view() == AppView::Splash;
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let mut class = theme.class().to_string();
                if on_splash && theme.has_backdrop() {
                    if !class.is_empty() {
                        class.push(' ');
                    }
                    class.push_str("splash-page");
                }
                body.set_class_name(&class);
            }
        });
    }

    // Tick the shared clock twice a minute.
    #[cfg(target_arch = "wasm32")]
    {
        let mut clock = clock.clone();
        use_effect(move || {
            spawn(async move {
                loop {
                    clock.set(format_clock(&chrono::Local::now().naive_local()));
                    gloo_timers::future::TimeoutFuture::new(30_000).await;
                }
            });
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut clock = clock.clone();
        use_effect(move || {
            clock.set(format_clock(&chrono::Local::now().naive_local()));
        });
    }

    let view = current_view();

    rsx! {
        AudioController {}
        if view == AppView::Splash {
            SplashView {}
        } else {
            NavBar {}
            main { class: "page",
                {
                    match view {
                        AppView::Home => rsx! {
                            HomeView {}
                        },
                        AppView::About => rsx! {
                            AboutView {}
                        },
                        AppView::Splash => rsx! {},
                    }
                }
            }
        }
    }
}
