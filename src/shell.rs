//! Application shell: keeps the status label in step with the window server.
//!
//! The shell owns the last good [`SpaceSnapshot`] and the label derived from
//! it. A failed query never touches either, so the status item keeps showing
//! the last known space (or the placeholder before the first success).

use tracing::{debug, info, warn};

use crate::error::{Result, SpaceError};
use crate::model::{SpaceSnapshot, PLACEHOLDER_LABEL};
use crate::provider::SpaceProvider;

/// Outcome of [`SpaceShell::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// The label now shows a different space.
    Changed,
    /// The query succeeded and the active space is the same.
    Unchanged,
    /// The query failed; the previous label was kept.
    Kept(SpaceError),
}

/// One row of the switch menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub ordinal: usize,
    pub title: String,
    /// Drawn with a check mark.
    pub active: bool,
    /// Fullscreen spaces are listed but cannot be picked.
    pub enabled: bool,
}

pub struct SpaceShell<P> {
    provider: P,
    label: String,
    snapshot: Option<SpaceSnapshot>,
}

impl<P: SpaceProvider> SpaceShell<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            label: PLACEHOLDER_LABEL.to_string(),
            snapshot: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Query the provider and update the label from the active space.
    pub fn refresh(&mut self) -> Refresh {
        match self.provider.spaces() {
            Ok(snapshot) => {
                let label = snapshot.label();
                let changed = label != self.label;
                if changed {
                    debug!(from = %self.label, to = %label, "active space changed");
                }
                self.label = label;
                self.snapshot = Some(snapshot);
                if changed {
                    Refresh::Changed
                } else {
                    Refresh::Unchanged
                }
            }
            Err(err) => {
                warn!(%err, label = %self.label, "space query failed, keeping last label");
                Refresh::Kept(err)
            }
        }
    }

    /// Text for the status item.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn snapshot(&self) -> Option<&SpaceSnapshot> {
        self.snapshot.as_ref()
    }

    /// Rows for the switch menu, built from the last good snapshot.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        let Some(snapshot) = &self.snapshot else {
            return Vec::new();
        };
        let active = snapshot.active().ordinal;
        snapshot
            .spaces()
            .iter()
            .map(|space| MenuEntry {
                ordinal: space.ordinal,
                title: space.title(),
                active: space.ordinal == active,
                enabled: space.is_switchable(),
            })
            .collect()
    }

    /// Switch to the space with the given 1-based ordinal.
    ///
    /// The label is not touched here; the resulting space-change
    /// notification triggers the refresh that updates it.
    pub fn switch_to(&mut self, ordinal: usize) -> Result<()> {
        if self.snapshot.is_none() {
            self.refresh();
        }
        let snapshot = self.snapshot.as_ref().ok_or(SpaceError::NoActiveSpace)?;
        let target = snapshot
            .by_ordinal(ordinal)
            .ok_or(SpaceError::UnknownSpace(ordinal))?;

        if target.id == snapshot.active().id {
            debug!(ordinal, "already on requested space");
            return Ok(());
        }
        if !target.is_switchable() {
            return Err(SpaceError::NotSwitchable(ordinal));
        }

        info!(ordinal, desktop = ?target.desktop_number, "switching space");
        self.provider.switch_to(target)
    }
}
