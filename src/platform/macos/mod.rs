//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI bindings to SkyLight, ApplicationServices and the objc runtime
//! - The window-server backed `SpaceProvider`
//! - UI components (status item, switch menu, label icon)
//! - Notification subscriptions
//! - Storage (NSUserDefaults persistence)

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod spaces;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use spaces::SkyLightProvider;
pub use storage::*;
pub use ui::*;
