//! Music library: the track model and directory scanning.
//!
//! `scan` builds the playlist once at startup; the resulting `Track` values
//! are immutable for the lifetime of the process.

mod model;
mod scan;

pub use model::*;
pub use scan::*;
