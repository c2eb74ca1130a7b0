//! [`SpaceProvider`] backed by the window server.

use std::cell::Cell;

use tracing::{debug, trace};

use super::ffi::{EventPoster, SkyLight, SystemHotKeys};
use crate::error::{Result, SpaceError};
use crate::hotkeys;
use crate::model::{ActiveHint, SpaceDescriptor, SpaceSnapshot, SPACES_FOR_WINDOWS_ALL};
use crate::provider::SpaceProvider;

pub struct SkyLightProvider {
    backend: Result<&'static SkyLight>,
    connection: i32,
    /// Window whose space marks the active display (the status item's).
    reference_window: Cell<Option<u32>>,
}

impl SkyLightProvider {
    /// Never fails; if SkyLight is missing every call reports it instead.
    pub fn new() -> Self {
        let backend = SkyLight::load();
        let connection = backend
            .as_ref()
            .map(|skylight| skylight.default_connection())
            .unwrap_or(0);
        Self {
            backend,
            connection,
            reference_window: Cell::new(None),
        }
    }

    pub fn set_reference_window(&self, window: Option<u32>) {
        self.reference_window.set(window);
    }

    fn skylight(&self) -> Result<&'static SkyLight> {
        self.backend.clone()
    }

    fn active_hint(&self, skylight: &SkyLight) -> ActiveHint {
        let conn = self.connection;
        let menu_bar_display = skylight.copy_active_menu_bar_display_identifier(conn);
        let window_spaces = match self.reference_window.get() {
            Some(window) => skylight.copy_spaces_for_windows(conn, SPACES_FOR_WINDOWS_ALL, &[window]),
            None => Vec::new(),
        };
        ActiveHint {
            menu_bar_display,
            window_spaces,
        }
    }
}

impl Default for SkyLightProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceProvider for SkyLightProvider {
    fn spaces(&self) -> Result<SpaceSnapshot> {
        let skylight = self.skylight()?;
        let displays = skylight.copy_managed_display_spaces(self.connection)?;
        let hint = self.active_hint(skylight);
        trace!(displays = displays.len(), ?hint, "enumerated displays");
        SpaceSnapshot::from_displays(&displays, &hint)
    }

    fn switch_to(&self, space: &SpaceDescriptor) -> Result<()> {
        let desktop = space
            .desktop_number
            .ok_or(SpaceError::NotSwitchable(space.ordinal))?;
        let skylight = self.skylight()?;
        debug!(ordinal = space.ordinal, desktop, "switching space");
        hotkeys::switch_to_desktop(&SystemHotKeys::new(skylight), &EventPoster, desktop)
    }
}
