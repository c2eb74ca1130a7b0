//! User preferences (pure Rust, no FFI).
//!
//! This module defines the preference structure that is loaded from and
//! saved to NSUserDefaults by `platform::macos::storage`.

use std::time::Duration;

use super::constants::*;

/// What a double click on the status item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoubleClickAction {
    /// Double clicks are not detected; every click opens the menu at once.
    #[default]
    None,
    /// Open Mission Control.
    MissionControl,
    /// Force a space query.
    Refresh,
}

impl DoubleClickAction {
    /// Decode the integer stored in NSUserDefaults. Unknown values map to `None`.
    pub fn from_code(code: i32) -> Self {
        match code {
            DOUBLE_CLICK_MISSION_CONTROL => DoubleClickAction::MissionControl,
            DOUBLE_CLICK_REFRESH => DoubleClickAction::Refresh,
            _ => DoubleClickAction::None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            DoubleClickAction::None => DOUBLE_CLICK_NONE,
            DoubleClickAction::MissionControl => DOUBLE_CLICK_MISSION_CONTROL,
            DoubleClickAction::Refresh => DOUBLE_CLICK_REFRESH,
        }
    }

    pub fn is_configured(self) -> bool {
        self != DoubleClickAction::None
    }
}

/// Complete preference set, serializable to/from NSUserDefaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Action bound to a double click on the status item.
    pub double_click_action: DoubleClickAction,
    /// Double-click window in seconds; 0 means the system setting.
    pub double_click_interval: f64,
    /// Fallback polling period in seconds; 0 disables polling.
    pub poll_interval: f64,
    /// Highlight the status item while its menu is open.
    pub highlight_on_click: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            double_click_action: DoubleClickAction::default(),
            double_click_interval: DEFAULT_DOUBLE_CLICK_INTERVAL,
            poll_interval: DEFAULT_POLL_INTERVAL,
            highlight_on_click: true,
        }
    }
}

impl Preferences {
    /// Validates and clamps all values to valid ranges.
    ///
    /// Zero is kept as-is for both intervals since it carries meaning.
    pub fn validate(&mut self) {
        self.double_click_interval = clamp_or_zero(
            self.double_click_interval,
            MIN_DOUBLE_CLICK_INTERVAL,
            MAX_DOUBLE_CLICK_INTERVAL,
        );
        self.poll_interval = clamp_or_zero(self.poll_interval, MIN_POLL_INTERVAL, MAX_POLL_INTERVAL);
    }

    /// Resolve the double-click window, falling back to `system` when unset.
    ///
    /// Out-of-range values are clamped here too, so an unvalidated set
    /// never yields an unrepresentable duration.
    pub fn effective_double_click_interval(&self, system: Option<f64>) -> Duration {
        let explicit = clamp_or_zero(
            self.double_click_interval,
            MIN_DOUBLE_CLICK_INTERVAL,
            MAX_DOUBLE_CLICK_INTERVAL,
        );
        let secs = if explicit > 0.0 {
            explicit
        } else {
            system
                .filter(|s| s.is_finite() && *s > 0.0)
                .unwrap_or(FALLBACK_DOUBLE_CLICK_INTERVAL)
        };
        Duration::try_from_secs_f64(secs)
            .unwrap_or_else(|_| Duration::from_secs_f64(FALLBACK_DOUBLE_CLICK_INTERVAL))
    }

    /// Polling period, or `None` when polling is disabled.
    pub fn poll_period(&self) -> Option<Duration> {
        let secs = clamp_or_zero(self.poll_interval, MIN_POLL_INTERVAL, MAX_POLL_INTERVAL);
        (secs > 0.0).then(|| Duration::from_secs_f64(secs))
    }
}

fn clamp_or_zero(v: f64, lo: f64, hi: f64) -> f64 {
    if !v.is_finite() || v <= 0.0 {
        0.0
    } else {
        v.clamp(lo, hi)
    }
}
