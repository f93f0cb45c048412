//! Audio subsystem: the engine thread, its command channel and the shared
//! playback snapshot.
//!
//! All playback goes through one `AudioPlayer`; commands are serialized over
//! an mpsc channel so rapid key presses can never interleave engine calls.

mod player;
mod sink;
mod thread;
mod types;
mod volume;

pub use player::*;
pub use types::*;

#[cfg(test)]
mod tests;
