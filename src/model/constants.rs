//! Configuration constants and default values.
//!
//! This module contains all application constants including window server
//! dictionary keys, NSUserDefaults keys, and validation limits.

// === Status Item ===

/// Label shown until the first successful space query.
pub const PLACEHOLDER_LABEL: &str = "?";

/// Label shown while a fullscreen app's space is active.
pub const FULLSCREEN_LABEL: &str = "F";

/// Status bar thickness used for the icon height, in points.
pub const ICON_HEIGHT: f64 = 18.0;

/// Approximate advance of one digit in the menu bar font, in points.
pub const ICON_GLYPH_WIDTH: f64 = 8.0;

/// Horizontal padding on each side of the label, in points.
pub const ICON_PADDING: f64 = 4.0;

/// Corner radius of the label background, in points.
pub const ICON_CORNER_RADIUS: f64 = 3.0;

/// Font size used for the label.
pub const ICON_FONT_SIZE: f64 = 13.0;

// === Managed Display Spaces keys ===

/// Per-display identifier (a UUID, or "Main" when displays share spaces).
pub const KEY_DISPLAY_IDENTIFIER: &str = "Display Identifier";

/// Per-display dictionary describing the visible space.
pub const KEY_CURRENT_SPACE: &str = "Current Space";

/// Per-display array of space dictionaries.
pub const KEY_SPACES: &str = "Spaces";

/// Space identifier inside a space dictionary.
pub const KEY_MANAGED_SPACE_ID: &str = "ManagedSpaceID";

pub const KEY_UUID: &str = "uuid";

pub const KEY_TYPE: &str = "type";

/// Display identifier used when "Displays have separate Spaces" is off.
pub const MAIN_DISPLAY_IDENTIFIER: &str = "Main";

// === Space types ===

/// Space type code for a regular desktop.
pub const SPACE_TYPE_DESKTOP: i64 = 0;

/// Space type code for a fullscreen application space.
pub const SPACE_TYPE_FULLSCREEN: i64 = 4;

// === Symbolic hotkeys ===

/// Symbolic hotkey id of "Switch to Desktop 1"; desktops 2..16 follow.
pub const SWITCH_TO_DESKTOP_BASE: i32 = 118;

/// Number of "Switch to Desktop N" hotkeys the system defines.
pub const MAX_DESKTOP_HOTKEYS: usize = 16;

/// Virtual key code the window server reports for an unassigned hotkey.
pub const UNBOUND_VIRTUAL_KEY: u16 = 0xFFFF;

/// Selector for `SLSCopySpacesForWindows`: include every space kind.
pub const SPACES_FOR_WINDOWS_ALL: i32 = 0x7;

// === NSUserDefaults Keys ===

/// Key for the double-click action preference.
pub const PREF_DOUBLE_CLICK_ACTION: &str = "doubleClickAction";

/// Key for the double-click interval preference (seconds).
pub const PREF_DOUBLE_CLICK_INTERVAL: &str = "doubleClickInterval";

/// Key for the fallback polling interval preference (seconds).
pub const PREF_POLL_INTERVAL: &str = "pollInterval";

/// Key for highlighting the status item while its menu is open (0/1).
pub const PREF_HIGHLIGHT_ON_CLICK: &str = "highlightOnClick";

/// Set once the user declines the move to /Applications for good (0/1).
pub const PREF_MOVE_TO_APPLICATIONS_SUPPRESSED: &str = "moveToApplicationsFolderAlertSuppress";

// === Defaults and Validation Limits ===

/// 0 means "use the system double-click interval".
pub const DEFAULT_DOUBLE_CLICK_INTERVAL: f64 = 0.0;

/// Used when the system interval cannot be read.
pub const FALLBACK_DOUBLE_CLICK_INTERVAL: f64 = 0.3;

pub const MIN_DOUBLE_CLICK_INTERVAL: f64 = 0.1;

pub const MAX_DOUBLE_CLICK_INTERVAL: f64 = 2.0;

/// 0 disables polling; notifications alone drive updates.
pub const DEFAULT_POLL_INTERVAL: f64 = 0.0;

pub const MIN_POLL_INTERVAL: f64 = 0.5;

pub const MAX_POLL_INTERVAL: f64 = 60.0;

// === Double-click actions ===

pub const DOUBLE_CLICK_NONE: i32 = 0;

pub const DOUBLE_CLICK_MISSION_CONTROL: i32 = 1;

pub const DOUBLE_CLICK_REFRESH: i32 = 2;

// === Notifications ===

/// Posted by NSWorkspace when the active space changes.
pub const NOTE_ACTIVE_SPACE_CHANGED: &str = "NSWorkspaceActiveSpaceDidChangeNotification";

/// Posted by NSApplication when displays are added, removed or rearranged.
pub const NOTE_SCREEN_PARAMETERS_CHANGED: &str =
    "NSApplicationDidChangeScreenParametersNotification";

/// Distributed notification posted when light/dark mode flips.
pub const NOTE_THEME_CHANGED: &str = "AppleInterfaceThemeChangedNotification";

/// Posted by NSApplication on quit.
pub const NOTE_WILL_TERMINATE: &str = "NSApplicationWillTerminateNotification";

// === Installation ===

/// System-wide applications folder.
pub const APPLICATIONS_DIR: &str = "/Applications";

/// Path used for the Mission Control double-click action.
pub const MISSION_CONTROL_APP: &str = "/System/Applications/Mission Control.app";
