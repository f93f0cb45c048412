use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::library::Track;

use super::thread::spawn_engine_thread;
use super::types::{EngineCmd, PlaybackHandle, PlaybackInfo};

/// Handle to the engine thread: a command sender plus the shared snapshot.
pub struct AudioPlayer {
    tx: Sender<EngineCmd>,
    playback: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(tracks: Vec<Track>, settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<EngineCmd>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo {
            volume: settings.initial_volume,
            ..PlaybackInfo::default()
        }));

        let engine_handle = spawn_engine_thread(tracks, rx, playback_info.clone(), settings);

        Self {
            tx,
            playback: playback_info,
            join: Mutex::new(Some(engine_handle)),
        }
    }

    pub fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    pub fn send(&self, cmd: EngineCmd) -> Result<(), mpsc::SendError<EngineCmd>> {
        self.tx.send(cmd)
    }

    /// Ask the engine to fade out and wait for its thread to finish.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(EngineCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
