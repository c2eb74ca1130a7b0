//! The one seam between the shell and the window server.
//!
//! The macOS implementation lives in `platform::macos::spaces`; tests plug
//! in an in-memory provider.

use crate::error::Result;
use crate::model::{SpaceDescriptor, SpaceSnapshot};

/// Source of space information and the means to switch spaces.
pub trait SpaceProvider {
    /// Enumerate every space on every display and mark the active one.
    fn spaces(&self) -> Result<SpaceSnapshot>;

    /// The space currently shown on the active display.
    fn active_space(&self) -> Result<SpaceDescriptor> {
        self.spaces().map(|snapshot| snapshot.active().clone())
    }

    /// Make `space` the active space.
    fn switch_to(&self, space: &SpaceDescriptor) -> Result<()>;
}

impl<P: SpaceProvider + ?Sized> SpaceProvider for &P {
    fn spaces(&self) -> Result<SpaceSnapshot> {
        (**self).spaces()
    }

    fn active_space(&self) -> Result<SpaceDescriptor> {
        (**self).active_space()
    }

    fn switch_to(&self, space: &SpaceDescriptor) -> Result<()> {
        (**self).switch_to(space)
    }
}
