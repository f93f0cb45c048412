//! Utilities for creating `rodio` sinks from `Track` values.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `Sink` at the current engine volume. A file that disappeared or
//! stopped decoding since the scan is reported and absorbed, not fatal.

use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStream, Sink};
use tracing::warn;

use crate::library::Track;

/// Open and decode `track` from the start. Failures are logged and absorbed.
pub(super) fn open_source(track: &Track) -> Option<Decoder<BufReader<File>>> {
    let file = match File::open(&track.path) {
        Ok(f) => f,
        Err(err) => {
            warn!("cannot open {}: {err}", track.path.display());
            return None;
        }
    };

    match Decoder::new(BufReader::new(file)) {
        Ok(source) => Some(source),
        Err(err) => {
            warn!("cannot decode {}: {err}", track.path.display());
            None
        }
    }
}

/// Create a paused `Sink` for `track`, positioned at the beginning.
pub(super) fn create_sink(handle: &OutputStream, track: &Track, volume: f32) -> Option<Sink> {
    let source = open_source(track)?;

    let sink = Sink::connect_new(handle.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Some(sink)
}
