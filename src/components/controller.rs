//! Signal-backed handle for the playback engine.
//!
//! One instance owns the mutable player state for the whole app; every
//! surface receives it via context and calls the transport operations here.
//! Transitions run through the pure [`PlayerState`] machine and are then
//! mirrored onto the signals; audio-element side effects react to those
//! writes in the audio manager.

use dioxus::prelude::*;

use crate::player::PlayerState;
use crate::tracks::{track_at, Track, TRACKS};

#[derive(Clone)]
pub struct PlayerController {
    track_index: Signal<usize>,
    is_playing: Signal<bool>,
    elapsed: Signal<f64>,
    pending_seek: Signal<Option<f64>>,
    ready: Signal<bool>,
}

impl PlayerController {
    pub fn new(
        track_index: Signal<usize>,
        is_playing: Signal<bool>,
        elapsed: Signal<f64>,
        pending_seek: Signal<Option<f64>>,
        ready: Signal<bool>,
    ) -> Self {
        Self {
            track_index,
            is_playing,
            elapsed,
            pending_seek,
            ready,
        }
    }

    // Reactive reads; calling these inside a component or effect subscribes it.

    pub fn track_index(&self) -> usize {
        let track_index = self.track_index.clone();
        track_index()
    }

    pub fn current_track(&self) -> &'static Track {
        track_at(self.track_index())
    }

    pub fn is_playing(&self) -> bool {
        let is_playing = self.is_playing.clone();
        is_playing()
    }

    pub fn ready(&self) -> bool {
        let ready = self.ready.clone();
        ready()
    }

    // Non-reactive reads for timer loops and persistence.

    pub fn is_ready(&self) -> bool {
        *self.ready.peek()
    }

    pub fn snapshot(&self) -> PlayerState {
        PlayerState {
            track_index: *self.track_index.peek(),
            is_playing: *self.is_playing.peek(),
            elapsed: *self.elapsed.peek(),
        }
    }

    /// Mirror a state onto the signals, writing only the fields that changed
    /// so unchanged transitions stay true no-ops.
    fn apply(&self, state: PlayerState) {
        let mut track_index = self.track_index.clone();
        let mut is_playing = self.is_playing.clone();
        let mut elapsed = self.elapsed.clone();

        if *track_index.peek() != state.track_index {
            track_index.set(state.track_index);
        }
        if *is_playing.peek() != state.is_playing {
            is_playing.set(state.is_playing);
        }
        if *elapsed.peek() != state.elapsed {
            elapsed.set(state.elapsed);
        }
    }

    /// Adopt a restored state, remembering the position to seek to once the
    /// audio element has a source.
    pub fn restore(&self, state: PlayerState) {
        let mut pending_seek = self.pending_seek.clone();
        pending_seek.set((state.elapsed > 0.0).then_some(state.elapsed));
        self.apply(state);
    }

    /// Unblock the audio manager once restore has run.
    pub fn mark_ready(&self) {
        let mut ready = self.ready.clone();
        ready.set(true);
    }

    // Transport operations.

    pub fn play(&self) {
        let mut state = self.snapshot();
        state.play();
        self.apply(state);
    }

    pub fn pause(&self) {
        let mut state = self.snapshot();
        state.pause();
        self.apply(state);
    }

    pub fn toggle(&self) {
        let mut state = self.snapshot();
        state.toggle();
        self.apply(state);
    }

    pub fn next(&self) {
        let mut state = self.snapshot();
        state.next(TRACKS.len());
        self.clear_pending_seek();
        self.apply(state);
    }

    pub fn previous(&self) {
        let mut state = self.snapshot();
        state.previous(TRACKS.len());
        self.clear_pending_seek();
        self.apply(state);
    }

    /// Switch to the track at `index`, resetting the elapsed position. The
    /// playing intent carries over to the new track.
    #[allow(dead_code)]
    pub fn load_track(&self, index: usize) {
        let mut state = self.snapshot();
        state.load(index % TRACKS.len().max(1));
        self.clear_pending_seek();
        self.apply(state);
    }

    fn clear_pending_seek(&self) {
        if self.pending_seek.peek().is_some() {
            let mut pending_seek = self.pending_seek.clone();
            pending_seek.set(None);
        }
    }

    pub(crate) fn set_elapsed(&self, seconds: f64) {
        let mut elapsed = self.elapsed.clone();
        elapsed.set(seconds);
    }

    pub(crate) fn take_pending_seek(&self) -> Option<f64> {
        let position = *self.pending_seek.peek();
        if position.is_some() {
            let mut pending_seek = self.pending_seek.clone();
            pending_seek.set(None);
        }
        position
    }
}
