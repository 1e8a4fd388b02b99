//! The built-in playlist. Tracks are identified by their position here.

/// One entry in the static track sequence. Audio and cover files are supplied
/// alongside the site and referenced by relative path; nothing checks that
/// they exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub title: &'static str,
    pub artist: &'static str,
    pub audio_src: &'static str,
    pub cover: &'static str,
}

pub const TRACKS: &[Track] = &[
    Track {
        title: "Moments",
        artist: "Kidnap & Leo Stannard",
        audio_src: "music/Moments-Kidnap&Leo Stannard.mp3",
        cover: "music/Moments-Kidnap&Leo Stannard.jpg",
    },
    Track {
        title: "Psycho, Pt. 2 (Explicit)",
        artist: "Russ",
        audio_src: "music/Psycho, Pt. 2 (Explicit)-Russ.mp3",
        cover: "music/Psycho, Pt. 2 (Explicit)-Russ.jpg",
    },
    Track {
        title: "Take Me To Infinity",
        artist: "Consoul Trainin",
        audio_src: "music/Take Me To Infinity-Consoul Trainin.mp3",
        cover: "music/Take Me To Infinity-Consoul Trainin.jpg",
    },
];

/// Look up a track, wrapping out-of-range indices back into the sequence.
pub fn track_at(index: usize) -> &'static Track {
    &TRACKS[index % TRACKS.len()]
}
