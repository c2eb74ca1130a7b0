//! Storage for macOS using NSUserDefaults.
//!
//! Reads the user's preferences from the app's defaults domain.

pub mod preferences;

pub use preferences::*;
