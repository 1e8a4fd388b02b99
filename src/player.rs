//! Pure playback state machine. No DOM, storage, or timer access lives here;
//! the audio manager applies these transitions to the real audio element.

use serde::{Deserialize, Serialize};

/// Player state as persisted to session storage. The serde names are part of
/// the stored wire format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    #[serde(rename = "currentSongIndex")]
    pub track_index: usize,
    #[serde(rename = "isPlaying")]
    pub is_playing: bool,
    #[serde(rename = "currentTime")]
    pub elapsed: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            track_index: 0,
            is_playing: false,
            elapsed: 0.0,
        }
    }
}

/// Index of the track after `index` in a sequence of `track_count` tracks.
pub fn next_index(index: usize, track_count: usize) -> usize {
    let track_count = track_count.max(1);
    (index + 1) % track_count
}

/// Index of the track before `index`, wrapping to the end of the sequence.
pub fn previous_index(index: usize, track_count: usize) -> usize {
    let track_count = track_count.max(1);
    (index + track_count - 1) % track_count
}

impl PlayerState {
    /// Paused -> Playing. No-op when already playing.
    pub fn play(&mut self) {
        self.is_playing = true;
    }

    /// Playing -> Paused, preserving the elapsed position.
    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Switch to the track at `index`, resetting the elapsed position. The
    /// playing intent carries over to the new track.
    pub fn load(&mut self, index: usize) {
        self.track_index = index;
        self.elapsed = 0.0;
    }

    pub fn next(&mut self, track_count: usize) {
        self.load(next_index(self.track_index, track_count));
    }

    pub fn previous(&mut self, track_count: usize) {
        self.load(previous_index(self.track_index, track_count));
    }

    /// Whether a restored state fits the current track sequence. Anything out
    /// of range reads as "no saved state" rather than breaking the index
    /// invariant.
    pub fn is_valid_for(&self, track_count: usize) -> bool {
        self.track_index < track_count && self.elapsed.is_finite() && self.elapsed >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap() {
        for i in 0..3 {
            assert_eq!(next_index(i, 3), (i + 1) % 3);
            assert_eq!(previous_index(i, 3), (i + 3 - 1) % 3);
        }
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(previous_index(0, 3), 2);
    }

    #[test]
    fn three_nexts_return_to_start() {
        let mut state = PlayerState::default();
        state.next(3);
        state.next(3);
        state.next(3);
        assert_eq!(state.track_index, 0);
    }

    #[test]
    fn play_is_idempotent() {
        let mut once = PlayerState::default();
        once.play();
        let mut twice = once.clone();
        twice.play();
        assert_eq!(once, twice);
    }

    #[test]
    fn pause_preserves_elapsed() {
        let mut state = PlayerState {
            track_index: 1,
            is_playing: true,
            elapsed: 17.25,
        };
        state.pause();
        assert!(!state.is_playing);
        assert_eq!(state.elapsed, 17.25);
    }

    #[test]
    fn load_resets_elapsed_and_keeps_intent() {
        let mut state = PlayerState {
            track_index: 0,
            is_playing: true,
            elapsed: 30.0,
        };
        state.next(3);
        assert_eq!(state.track_index, 1);
        assert_eq!(state.elapsed, 0.0);
        assert!(state.is_playing);
    }

    #[test]
    fn wire_format_round_trips() {
        let state = PlayerState {
            track_index: 2,
            is_playing: true,
            elapsed: 42.5,
        };
        let json = serde_json::to_string(&state).unwrap();
        let restored: PlayerState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn wire_format_uses_stored_field_names() {
        let restored: PlayerState =
            serde_json::from_str(r#"{"currentSongIndex":1,"isPlaying":true,"currentTime":42.5}"#)
                .unwrap();
        assert_eq!(restored.track_index, 1);
        assert!(restored.is_playing);
        assert_eq!(restored.elapsed, 42.5);
    }

    #[test]
    fn malformed_or_out_of_range_state_is_rejected() {
        assert!(serde_json::from_str::<PlayerState>("{not json").is_err());

        let stale = PlayerState {
            track_index: 7,
            is_playing: false,
            elapsed: 0.0,
        };
        assert!(!stale.is_valid_for(3));
        assert!(stale.is_valid_for(8));

        let negative = PlayerState {
            track_index: 0,
            is_playing: false,
            elapsed: -1.0,
        };
        assert!(!negative.is_valid_for(3));
    }

    #[test]
    fn defaults_are_track_zero_paused() {
        let state = PlayerState::default();
        assert_eq!(state.track_index, 0);
        assert!(!state.is_playing);
        assert_eq!(state.elapsed, 0.0);
    }
}
