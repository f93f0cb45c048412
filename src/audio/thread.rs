use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::library::Track;

use super::sink::create_sink;
use super::types::{EngineCmd, PlaybackHandle};
use super::volume;

/// What a pause toggle does to the sink, plus the `playing` flag to publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Toggle {
    Pause,
    Resume { playing: bool },
}

/// Decide a pause toggle. A busy sink (not paused, still holding audio)
/// gets paused; anything else resumes, which produces sound only when the
/// sink still holds any.
pub(super) fn toggle(paused: bool, sink_empty: bool) -> Toggle {
    if !paused && !sink_empty {
        Toggle::Pause
    } else {
        Toggle::Resume {
            playing: !sink_empty,
        }
    }
}

/// Spawn the engine thread: sole owner of the output stream, the sink and
/// the volume scalar, and sole writer of the shared `PlaybackInfo`.
///
/// Commands arrive over `rx` and are applied strictly in order. The thread
/// exits on `Quit` or when the channel disconnects.
pub(super) fn spawn_engine_thread(
    tracks: Vec<Track>,
    rx: Receiver<EngineCmd>,
    playback_info: PlaybackHandle,
    settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut index: Option<usize> = None;
        let mut paused = true;
        let mut sink: Option<Sink> = None;
        let mut volume = settings.initial_volume;

        fn fade_out_sink(sink: &Sink, fade_out_ms: u64, from_volume: f32) {
            if fade_out_ms == 0 {
                sink.set_volume(0.0);
                return;
            }
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(from_volume * (1.0 - t));
                thread::sleep(Duration::from_millis(step_ms));
            }
            sink.set_volume(0.0);
        }

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    EngineCmd::Play(i) => {
                        let Some(track) = tracks.get(i) else {
                            continue;
                        };
                        // Build the replacement first; a track that went
                        // missing since the scan leaves the current one alone.
                        let Some(new_sink) = create_sink(&stream, track, volume) else {
                            continue;
                        };
                        if let Some(s) = sink.as_ref() {
                            s.stop();
                        }
                        new_sink.play();
                        sink = Some(new_sink);
                        index = Some(i);
                        paused = false;
                        if let Ok(mut info) = playback_info.lock() {
                            info.index = Some(i);
                            info.playing = true;
                        }
                    }

                    EngineCmd::TogglePause => {
                        if let Some(ref s) = sink {
                            match toggle(paused, s.empty()) {
                                Toggle::Pause => {
                                    s.pause();
                                    paused = true;
                                    if let Ok(mut info) = playback_info.lock() {
                                        info.playing = false;
                                    }
                                }
                                Toggle::Resume { playing } => {
                                    s.play();
                                    paused = false;
                                    if let Ok(mut info) = playback_info.lock() {
                                        info.playing = playing;
                                    }
                                }
                            }
                        }
                    }

                    EngineCmd::Rewind => {
                        let Some(i) = index else {
                            continue;
                        };
                        if sink.is_none() {
                            continue;
                        }
                        let Some(new_sink) = create_sink(&stream, &tracks[i], volume) else {
                            continue;
                        };
                        if let Some(s) = sink.as_ref() {
                            s.stop();
                        }
                        if !paused {
                            new_sink.play();
                        }
                        sink = Some(new_sink);
                        if let Ok(mut info) = playback_info.lock() {
                            info.playing = !paused;
                        }
                    }

                    EngineCmd::Stop => {
                        if let Some(s) = sink.as_ref() {
                            s.stop();
                        }
                        sink = None;
                        index = None;
                        paused = true;
                        if let Ok(mut info) = playback_info.lock() {
                            info.index = None;
                            info.playing = false;
                        }
                    }

                    EngineCmd::VolumeUp => {
                        volume = volume::step_up(volume);
                        if let Some(ref s) = sink {
                            s.set_volume(volume);
                        }
                        if let Ok(mut info) = playback_info.lock() {
                            info.volume = volume;
                        }
                    }

                    EngineCmd::VolumeDown => {
                        volume = volume::step_down(volume);
                        if let Some(ref s) = sink {
                            s.set_volume(volume);
                        }
                        if let Ok(mut info) = playback_info.lock() {
                            info.volume = volume;
                        }
                    }

                    EngineCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = sink {
                            // Fade out gently before stopping.
                            fade_out_sink(s, fade_out_ms, volume);
                            s.stop();
                        }
                        if let Ok(mut info) = playback_info.lock() {
                            info.playing = false;
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // A track that ran out on its own is left loaded but no
                    // longer counts as playing. No auto-advance.
                    if let Some(ref s) = sink {
                        if !paused && s.empty() {
                            paused = true;
                            if let Ok(mut info) = playback_info.lock() {
                                info.playing = false;
                            }
                        }
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
