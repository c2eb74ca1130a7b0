//! Switching spaces through the system's "Switch to Desktop N" shortcuts.
//!
//! There is no API to change the active space directly. Instead we look up
//! the symbolic hotkey bound to the target desktop, make sure it is enabled,
//! and post its key combination. The window server side of this lives behind
//! [`HotKeyTable`] and [`KeyPoster`] so the sequence can be tested.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::error::{Result, SpaceError};
use crate::model::{MAX_DESKTOP_HOTKEYS, SWITCH_TO_DESKTOP_BASE, UNBOUND_VIRTUAL_KEY};

/// Identifier of a system symbolic hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolicHotKey(pub i32);

impl SymbolicHotKey {
    /// The "Switch to Desktop N" hotkey for a 1-based desktop number.
    pub fn for_desktop(desktop: usize) -> Result<Self> {
        if desktop == 0 || desktop > MAX_DESKTOP_HOTKEYS {
            return Err(SpaceError::HotKeyOutOfRange(desktop));
        }
        Ok(Self(SWITCH_TO_DESKTOP_BASE + desktop as i32 - 1))
    }
}

/// Key combination assigned to a symbolic hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Character the combination produces (informational).
    pub key_equivalent: u16,
    /// Virtual key code to post.
    pub virtual_key: u16,
    /// Modifier mask, laid out like `CGEventFlags`.
    pub modifiers: u32,
}

impl KeyBinding {
    pub fn is_bound(&self) -> bool {
        self.virtual_key != UNBOUND_VIRTUAL_KEY
    }
}

/// Read and toggle symbolic hotkeys.
pub trait HotKeyTable {
    fn binding(&self, key: SymbolicHotKey) -> Result<KeyBinding>;
    fn is_enabled(&self, key: SymbolicHotKey) -> bool;
    fn set_enabled(&self, key: SymbolicHotKey, enabled: bool) -> Result<()>;
}

/// Deliver a key combination to the window server.
pub trait KeyPoster {
    fn post(&self, binding: &KeyBinding) -> Result<()>;
}

/// Accessibility check that shows the system prompt at most once.
///
/// Later checks only query trust, so repeated switches while untrusted do
/// not stack up prompts.
#[derive(Debug, Default)]
pub struct TrustPrompt {
    prompted: AtomicBool,
}

impl TrustPrompt {
    pub const fn new() -> Self {
        Self {
            prompted: AtomicBool::new(false),
        }
    }

    /// Run `is_trusted(prompt)`, with `prompt` true only on the first call.
    pub fn check(&self, is_trusted: impl FnOnce(bool) -> bool) -> Result<()> {
        let prompt = !self.prompted.swap(true, Ordering::Relaxed);
        if is_trusted(prompt) {
            return Ok(());
        }
        warn!(prompted = prompt, "accessibility access not granted, cannot post shortcut");
        Err(SpaceError::NotTrusted)
    }
}

/// Enable `key` if it is disabled. Returns whether anything changed.
///
/// Calling this on an enabled hotkey is a no-op.
pub fn ensure_enabled<T: HotKeyTable + ?Sized>(table: &T, key: SymbolicHotKey) -> Result<bool> {
    if table.is_enabled(key) {
        return Ok(false);
    }
    table.set_enabled(key, true)?;
    info!(hotkey = key.0, "enabled symbolic hotkey");
    Ok(true)
}

/// Switch to desktop `desktop` (1-based) by posting its shortcut.
pub fn switch_to_desktop<T, K>(table: &T, poster: &K, desktop: usize) -> Result<()>
where
    T: HotKeyTable + ?Sized,
    K: KeyPoster + ?Sized,
{
    let key = SymbolicHotKey::for_desktop(desktop)?;
    let binding = table.binding(key)?;
    if !binding.is_bound() {
        return Err(SpaceError::HotKeyUnbound(key.0));
    }
    ensure_enabled(table, key)?;
    debug!(
        desktop,
        virtual_key = binding.virtual_key,
        modifiers = binding.modifiers,
        "posting desktop shortcut"
    );
    poster.post(&binding)
}
