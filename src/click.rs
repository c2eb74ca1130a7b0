//! Single/double click disambiguation for the status item.
//!
//! AppKit hands us raw presses. When a double action is configured, a first
//! press is held back until either a second press arrives inside the
//! interval (double) or the interval runs out (single). With no double
//! action there is nothing to wait for and a press fires straight away.

use std::time::{Duration, Instant};

/// What a press (or an expired wait) resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Single,
    Double,
}

/// Answer to [`ClickTracker::press`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    /// Dispatch this action now.
    Fire(ClickAction),
    /// Call [`ClickTracker::deadline`] after this long.
    Defer(Duration),
}

#[derive(Debug, Clone)]
pub struct ClickTracker {
    interval: Duration,
    double_action_enabled: bool,
    pending: Option<Instant>,
}

impl ClickTracker {
    pub fn new(interval: Duration, double_action_enabled: bool) -> Self {
        Self {
            interval,
            double_action_enabled,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn double_action_enabled(&self) -> bool {
        self.double_action_enabled
    }

    /// Turning double clicks off drops any click still waiting.
    pub fn set_double_action_enabled(&mut self, enabled: bool) {
        self.double_action_enabled = enabled;
        if !enabled {
            self.pending = None;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a mouse-down at `now`.
    pub fn press(&mut self, now: Instant) -> ClickDecision {
        if !self.double_action_enabled {
            return ClickDecision::Fire(ClickAction::Single);
        }
        match self.pending.take() {
            Some(first) if now.saturating_duration_since(first) <= self.interval => {
                ClickDecision::Fire(ClickAction::Double)
            }
            // A stale first press whose deadline never ran is discarded
            _ => {
                self.pending = Some(now);
                ClickDecision::Defer(self.interval)
            }
        }
    }

    /// Resolve a deferred press. Returns `Single` at most once per press.
    pub fn deadline(&mut self, now: Instant) -> Option<ClickAction> {
        let first = self.pending?;
        if now.saturating_duration_since(first) < self.interval {
            return None;
        }
        self.pending = None;
        Some(ClickAction::Single)
    }

    /// Forget any pending press without dispatching it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
