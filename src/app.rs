//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the playlist, the current
//! track index and the observed playback state.

mod model;

pub use model::*;
