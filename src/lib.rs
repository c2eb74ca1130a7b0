#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! WhichSpace core.
//!
//! Everything outside `platform` is plain Rust with no FFI, so the space
//! bookkeeping, click handling and hotkey logic can be exercised by normal
//! integration tests on any host.

pub mod click;
pub mod error;
pub mod events;
pub mod hotkeys;
pub mod icon;
pub mod model;
pub mod provider;
pub mod relocate;
pub mod shell;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the types most callers need
pub use error::{Result, SpaceError};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{Preferences, SpaceDescriptor, SpaceSnapshot};
pub use provider::SpaceProvider;
pub use shell::{Refresh, SpaceShell};
