//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including space descriptors, preferences and configuration constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod constants;
pub mod preferences;
pub mod space;

pub use constants::*;
pub use preferences::{DoubleClickAction, Preferences};
pub use space::{ActiveHint, RawDisplay, RawSpace, SpaceDescriptor, SpaceKind, SpaceSnapshot};
