//! Configuration loader and schema types.
//!
//! The schema covers the audio engine, the UI theme and the library scanner;
//! `load` pulls values from an optional TOML file plus the environment.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
