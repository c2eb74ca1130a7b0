//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by notification observers, timers and menu actions, and are
//! handled by the platform dispatcher on the main thread.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === System Events ===
    /// NSWorkspace reported an active space change.
    SpaceChanged,

    /// Displays were added, removed or rearranged.
    DisplaysChanged,

    /// Light/dark appearance flipped; the icon must be redrawn.
    AppearanceChanged,

    /// Poll timer fired or the user asked for a refresh.
    RefreshRequested,

    // === Status Item Events ===
    /// A click resolved to a single click.
    StatusItemClicked,

    /// Two clicks landed inside the double-click interval.
    StatusItemDoubleClicked,

    /// A space was picked from the menu (1-based ordinal).
    SwitchToSpace(usize),

    /// Quit was picked from the menu.
    Quit,
}

impl AppEvent {
    /// Returns true if this event should trigger a fresh space query.
    pub fn requires_refresh(&self) -> bool {
        matches!(
            self,
            AppEvent::SpaceChanged | AppEvent::DisplaysChanged | AppEvent::RefreshRequested
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::SpaceChanged => "Active space changed",
            AppEvent::DisplaysChanged => "Display configuration changed",
            AppEvent::AppearanceChanged => "Appearance changed",
            AppEvent::RefreshRequested => "Refresh requested",
            AppEvent::StatusItemClicked => "Status item clicked",
            AppEvent::StatusItemDoubleClicked => "Status item double-clicked",
            AppEvent::SwitchToSpace(_) => "Switch to space",
            AppEvent::Quit => "Quit",
        }
    }
}
