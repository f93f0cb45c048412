//! Application model types: `App` and `PlaybackState`.
//!
//! `App` owns the playlist and the transport state (current index plus the
//! last observed play/pause flag). Index arithmetic lives here; the actual
//! audio work happens on the engine thread.

use crate::audio::{PlaybackHandle, PlaybackInfo};
use crate::library::Track;

/// Play/pause state as last published by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Paused
    }
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    pub current: usize,
    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,
    pub current_dir: Option<String>,
}

impl App {
    /// Create a new `App` over `tracks`, positioned on the first track,
    /// paused.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: 0,
            playback: PlaybackState::Paused,
            playback_handle: None,
            current_dir: None,
        }
    }

    /// Advance to the next track and return the committed index.
    ///
    /// Refuses to advance within one slot of the end, so the final track is
    /// never reached this way. Returns `None` when nothing changed.
    pub fn next_track(&mut self) -> Option<usize> {
        if self.current + 1 >= self.tracks.len().saturating_sub(1) {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Step back to the previous track and return the committed index.
    ///
    /// Index 0 is never re-entered. Returns `None` when nothing changed.
    pub fn prev_track(&mut self) -> Option<usize> {
        if self.current <= 1 {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Attach the engine's `PlaybackHandle` so state can be observed.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Record the scanned directory for display in the status line.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    /// Return true if the playlist contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Latest snapshot published by the engine, if a handle is attached.
    pub fn playback_snapshot(&self) -> Option<PlaybackInfo> {
        self.playback_handle
            .as_ref()
            .and_then(|h| h.lock().ok().map(|info| info.clone()))
    }

    /// Mirror the engine-published playing flag into `playback` and hand
    /// back the snapshot, so one read of the handle drives a whole frame.
    pub fn sync_playback(&mut self) -> Option<PlaybackInfo> {
        let info = self.playback_snapshot();
        if let Some(info) = &info {
            self.playback = if info.playing {
                PlaybackState::Playing
            } else {
                PlaybackState::Paused
            };
        }
        info
    }
}
