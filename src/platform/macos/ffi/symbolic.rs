//! Window server backed [`HotKeyTable`] and [`KeyPoster`].

use core_graphics::event::{CGEvent, CGEventFlags, CGEventTapLocation};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

use super::accessibility;
use super::skylight::SkyLight;
use crate::error::{Result, SpaceError};
use crate::hotkeys::{HotKeyTable, KeyBinding, KeyPoster, SymbolicHotKey, TrustPrompt};

static TRUST: TrustPrompt = TrustPrompt::new();

/// Symbolic hotkeys as stored by the window server.
pub struct SystemHotKeys<'a> {
    skylight: &'a SkyLight,
}

impl<'a> SystemHotKeys<'a> {
    pub fn new(skylight: &'a SkyLight) -> Self {
        Self { skylight }
    }
}

impl HotKeyTable for SystemHotKeys<'_> {
    fn binding(&self, key: SymbolicHotKey) -> Result<KeyBinding> {
        self.skylight.symbolic_hotkey_value(key)
    }

    fn is_enabled(&self, key: SymbolicHotKey) -> bool {
        self.skylight.is_symbolic_hotkey_enabled(key)
    }

    fn set_enabled(&self, key: SymbolicHotKey, enabled: bool) -> Result<()> {
        self.skylight.set_symbolic_hotkey_enabled(key, enabled)
    }
}

/// Posts key down/up pairs into the HID event stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventPoster;

impl KeyPoster for EventPoster {
    fn post(&self, binding: &KeyBinding) -> Result<()> {
        TRUST.check(accessibility::is_trusted)?;

        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|_| SpaceError::EventPost)?;
        let flags = CGEventFlags::from_bits_truncate(binding.modifiers as u64);

        for down in [true, false] {
            let event = CGEvent::new_keyboard_event(source.clone(), binding.virtual_key, down)
                .map_err(|_| SpaceError::EventPost)?;
            event.set_flags(flags);
            event.post(CGEventTapLocation::HID);
        }
        Ok(())
    }
}
