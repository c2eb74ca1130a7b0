//! Platform-specific implementations.
//!
//! Only macOS is supported: the window server calls this app depends on
//! have no counterpart elsewhere. The submodule provides:
//! - FFI bindings (SkyLight private API, accessibility, objc bridge)
//! - UI components (status item, menu, label icon)
//! - Input handling (notification subscriptions)
//! - Storage (preferences)

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
