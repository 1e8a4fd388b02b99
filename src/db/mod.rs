//! Session-scoped persistence for player state and theme preference.
//!
//! Browser builds keep everything in `sessionStorage`; non-browser builds
//! compile to no-ops so the pure logic stays testable on the host.

use crate::player::PlayerState;
use crate::theme::Theme;
#[cfg(target_arch = "wasm32")]
use crate::tracks::TRACKS;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, SessionStorage, Storage};

/// Error type for storage operations on non-browser targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
#[allow(dead_code)]
pub struct DbError(String);

#[cfg(not(target_arch = "wasm32"))]
impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::error::Error for DbError {}

#[cfg(target_arch = "wasm32")]
const PLAYER_STATE_KEY: &str = "porchlight.player_state";
#[cfg(target_arch = "wasm32")]
const THEME_KEY: &str = "porchlight.theme";

/// Restore the persisted player state. Absent or malformed entries, and
/// entries pointing outside the track sequence, all read as "no saved state".
#[cfg(target_arch = "wasm32")]
pub fn load_player_state() -> Option<PlayerState> {
    match SessionStorage::get::<PlayerState>(PLAYER_STATE_KEY) {
        Ok(state) if state.is_valid_for(TRACKS.len()) => Some(state),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_player_state() -> Option<PlayerState> {
    None
}

/// Serialize and overwrite the stored player state.
#[cfg(target_arch = "wasm32")]
pub fn save_player_state(state: &PlayerState) -> Result<(), StorageError> {
    SessionStorage::set(PLAYER_STATE_KEY, state)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub fn save_player_state(_state: &PlayerState) -> Result<(), DbError> {
    Ok(())
}

/// Load the session's theme. The entry is the raw body class, so an empty
/// string is a real value (the minimal theme), while an unknown class or a
/// missing entry yields `None`.
#[cfg(target_arch = "wasm32")]
pub fn load_theme() -> Option<Theme> {
    let raw = SessionStorage::raw().get_item(THEME_KEY).ok()??;
    Theme::from_class(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_theme() -> Option<Theme> {
    None
}

/// Persist the theme class for this session. Best effort.
#[cfg(target_arch = "wasm32")]
pub fn save_theme(theme: Theme) {
    let _ = SessionStorage::raw().set_item(THEME_KEY, theme.class());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_theme(_theme: Theme) {}
