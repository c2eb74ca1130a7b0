//! Private SkyLight (window server) calls.
//!
//! None of these are in the public SDK. The framework is opened with
//! `dlopen` on first use and each symbol is looked up under its `CGS` name
//! and then its `SLS` name, so a missing symbol turns into
//! [`SpaceError::Unavailable`] instead of a launch failure.

use std::ffi::CStr;
use std::sync::OnceLock;

use tracing::{debug, warn};

use super::bridge::{
    array_items, dict_value, get_class, i64_value, id, is_kind_of, msg_send, release, string_value,
    u64_value,
};
use crate::error::{Result, SpaceError};
use crate::hotkeys::{KeyBinding, SymbolicHotKey};
use crate::model::{
    RawDisplay, RawSpace, KEY_CURRENT_SPACE, KEY_DISPLAY_IDENTIFIER, KEY_MANAGED_SPACE_ID,
    KEY_SPACES, KEY_TYPE, KEY_UUID, SPACE_TYPE_DESKTOP,
};

const SKYLIGHT_PATH: &CStr = c"/System/Library/PrivateFrameworks/SkyLight.framework/SkyLight";

type DefaultConnectionFn = unsafe extern "C" fn() -> i32;
type CopyManagedDisplaySpacesFn = unsafe extern "C" fn(i32) -> id;
type CopyActiveMenuBarDisplayIdentifierFn = unsafe extern "C" fn(i32) -> id;
type CopySpacesForWindowsFn = unsafe extern "C" fn(i32, i32, id) -> id;
type GetSymbolicHotKeyValueFn = unsafe extern "C" fn(i32, *mut u16, *mut u16, *mut u32) -> i32;
type IsSymbolicHotKeyEnabledFn = unsafe extern "C" fn(i32) -> bool;
type SetSymbolicHotKeyEnabledFn = unsafe extern "C" fn(i32, bool) -> i32;

/// Resolved SkyLight entry points.
pub struct SkyLight {
    default_connection: DefaultConnectionFn,
    copy_managed_display_spaces: CopyManagedDisplaySpacesFn,
    copy_active_menu_bar_display_identifier: CopyActiveMenuBarDisplayIdentifierFn,
    copy_spaces_for_windows: CopySpacesForWindowsFn,
    get_symbolic_hotkey_value: GetSymbolicHotKeyValueFn,
    is_symbolic_hotkey_enabled: IsSymbolicHotKeyEnabledFn,
    set_symbolic_hotkey_enabled: SetSymbolicHotKeyEnabledFn,
}

static SKYLIGHT: OnceLock<Result<SkyLight>> = OnceLock::new();

impl SkyLight {
    /// Open the framework once; later calls return the cached outcome.
    pub fn load() -> Result<&'static SkyLight> {
        SKYLIGHT
            .get_or_init(|| {
                let loaded = unsafe { Self::open() };
                match &loaded {
                    Ok(_) => debug!("SkyLight symbols resolved"),
                    Err(err) => warn!(%err, "SkyLight unavailable, space tracking disabled"),
                }
                loaded
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    unsafe fn open() -> Result<SkyLight> {
        let handle = libc::dlopen(SKYLIGHT_PATH.as_ptr(), libc::RTLD_LAZY);
        if handle.is_null() {
            return Err(SpaceError::Unavailable("SkyLight.framework"));
        }

        macro_rules! load_sym {
            ($ty:ty, $label:literal, [$($name:expr),+ $(,)?]) => {{
                let names: &[&CStr] = &[$($name),+];
                let sym = names
                    .iter()
                    .map(|name| libc::dlsym(handle, name.as_ptr()))
                    .find(|p| !p.is_null());
                match sym {
                    Some(p) => std::mem::transmute::<*mut libc::c_void, $ty>(p),
                    None => return Err(SpaceError::Unavailable($label)),
                }
            }};
        }

        Ok(SkyLight {
            default_connection: load_sym!(
                DefaultConnectionFn,
                "_CGSDefaultConnection",
                [c"_CGSDefaultConnection", c"CGSMainConnectionID", c"SLSMainConnectionID"]
            ),
            copy_managed_display_spaces: load_sym!(
                CopyManagedDisplaySpacesFn,
                "CGSCopyManagedDisplaySpaces",
                [c"CGSCopyManagedDisplaySpaces", c"SLSCopyManagedDisplaySpaces"]
            ),
            copy_active_menu_bar_display_identifier: load_sym!(
                CopyActiveMenuBarDisplayIdentifierFn,
                "CGSCopyActiveMenuBarDisplayIdentifier",
                [
                    c"CGSCopyActiveMenuBarDisplayIdentifier",
                    c"SLSCopyActiveMenuBarDisplayIdentifier"
                ]
            ),
            copy_spaces_for_windows: load_sym!(
                CopySpacesForWindowsFn,
                "SLSCopySpacesForWindows",
                [c"SLSCopySpacesForWindows", c"CGSCopySpacesForWindows"]
            ),
            get_symbolic_hotkey_value: load_sym!(
                GetSymbolicHotKeyValueFn,
                "CGSGetSymbolicHotKeyValue",
                [c"CGSGetSymbolicHotKeyValue", c"SLSGetSymbolicHotKeyValue"]
            ),
            is_symbolic_hotkey_enabled: load_sym!(
                IsSymbolicHotKeyEnabledFn,
                "CGSIsSymbolicHotKeyEnabled",
                [c"CGSIsSymbolicHotKeyEnabled", c"SLSIsSymbolicHotKeyEnabled"]
            ),
            set_symbolic_hotkey_enabled: load_sym!(
                SetSymbolicHotKeyEnabledFn,
                "CGSSetSymbolicHotKeyEnabled",
                [c"CGSSetSymbolicHotKeyEnabled", c"SLSSetSymbolicHotKeyEnabled"]
            ),
        })
    }

    /// Connection id of this process to the window server.
    pub fn default_connection(&self) -> i32 {
        unsafe { (self.default_connection)() }
    }

    /// Every display with its spaces, in window server order.
    pub fn copy_managed_display_spaces(&self, conn: i32) -> Result<Vec<RawDisplay>> {
        unsafe {
            let displays = (self.copy_managed_display_spaces)(conn);
            if !is_kind_of(displays, "NSArray") {
                release(displays);
                return Err(SpaceError::NullResult("CGSCopyManagedDisplaySpaces"));
            }
            let parsed = parse_displays(displays);
            release(displays);
            parsed
        }
    }

    /// Identifier of the display that currently owns the menu bar.
    pub fn copy_active_menu_bar_display_identifier(&self, conn: i32) -> Option<String> {
        unsafe {
            let ident = (self.copy_active_menu_bar_display_identifier)(conn);
            let out = string_value(ident);
            release(ident);
            out
        }
    }

    /// Space ids the given windows are on.
    pub fn copy_spaces_for_windows(&self, conn: i32, selector: i32, windows: &[u32]) -> Vec<u64> {
        if windows.is_empty() {
            return Vec::new();
        }
        unsafe {
            let list: id = msg_send![get_class("NSMutableArray"), arrayWithCapacity: windows.len()];
            for &window in windows {
                let number: id = msg_send![get_class("NSNumber"), numberWithUnsignedInt: window];
                let _: () = msg_send![list, addObject: number];
            }
            let spaces = (self.copy_spaces_for_windows)(conn, selector, list);
            let out = array_items(spaces)
                .into_iter()
                .filter_map(|n| u64_value(n))
                .collect();
            release(spaces);
            out
        }
    }

    pub fn symbolic_hotkey_value(&self, key: SymbolicHotKey) -> Result<KeyBinding> {
        let mut key_equivalent = 0u16;
        let mut virtual_key = 0u16;
        let mut modifiers = 0u32;
        let err = unsafe {
            (self.get_symbolic_hotkey_value)(
                key.0,
                &mut key_equivalent,
                &mut virtual_key,
                &mut modifiers,
            )
        };
        if err != 0 {
            return Err(SpaceError::HotKey(err));
        }
        Ok(KeyBinding {
            key_equivalent,
            virtual_key,
            modifiers,
        })
    }

    pub fn is_symbolic_hotkey_enabled(&self, key: SymbolicHotKey) -> bool {
        unsafe { (self.is_symbolic_hotkey_enabled)(key.0) }
    }

    pub fn set_symbolic_hotkey_enabled(&self, key: SymbolicHotKey, enabled: bool) -> Result<()> {
        match unsafe { (self.set_symbolic_hotkey_enabled)(key.0, enabled) } {
            0 => Ok(()),
            err => Err(SpaceError::HotKey(err)),
        }
    }
}

/// Convert the array-of-dictionaries into `RawDisplay` records.
///
/// Displays without an identifier and spaces without an id are skipped.
unsafe fn parse_displays(displays: id) -> Result<Vec<RawDisplay>> {
    let items = array_items(displays);
    if items.is_empty() {
        return Err(SpaceError::EmptySpaceList);
    }

    let mut out = Vec::with_capacity(items.len());
    for display in items {
        let Some(identifier) = string_value(dict_value(display, KEY_DISPLAY_IDENTIFIER)) else {
            debug!("skipping display without identifier");
            continue;
        };
        let current = dict_value(display, KEY_CURRENT_SPACE);
        let current_space = u64_value(dict_value(current, KEY_MANAGED_SPACE_ID));

        let spaces = array_items(dict_value(display, KEY_SPACES))
            .into_iter()
            .filter_map(|space| {
                let id = u64_value(dict_value(space, KEY_MANAGED_SPACE_ID))?;
                Some(RawSpace {
                    id,
                    uuid: string_value(dict_value(space, KEY_UUID)).unwrap_or_default(),
                    kind_code: i64_value(dict_value(space, KEY_TYPE))
                        .unwrap_or(SPACE_TYPE_DESKTOP),
                })
            })
            .collect();

        out.push(RawDisplay {
            identifier,
            current_space,
            spaces,
        });
    }
    Ok(out)
}
