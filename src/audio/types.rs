//! Engine commands and the shared playback snapshot.
//!
//! Everything the rest of the application knows about the engine flows
//! through these two types: commands go in over the channel, state comes
//! back through the `PlaybackHandle`.

use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub enum EngineCmd {
    /// Load the track at the given index and play it from the beginning.
    Play(usize),
    /// Pause if sound is being produced, otherwise resume.
    TogglePause,
    // Rewind and Stop have no key binding; they are reachable only through
    // `AudioPlayer::send`.
    /// Restart the loaded track from position zero, keeping the pause flag.
    #[allow(dead_code)]
    Rewind,
    /// Stop playback and unload the current track.
    #[allow(dead_code)]
    Stop,
    /// Raise the engine volume by one step.
    VolumeUp,
    /// Lower the engine volume by one step.
    VolumeDown,
    /// Quit the engine thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Runtime playback snapshot shared with the UI.
///
/// Written only by the engine thread; everyone else takes read-only peeks.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Currently loaded track index in the playlist (if any).
    pub index: Option<usize>,
    /// Whether sound is currently being produced.
    pub playing: bool,
    /// Engine volume in `[0.0, 1.0]`.
    pub volume: f32,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            playing: false,
            volume: 1.0,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
