//! Preferences stored in NSUserDefaults.
//!
//! Values are written with `defaults write <bundle id> <key> <value>`; the
//! app reads them at launch and only writes the relocation alert suppression.

use tracing::debug;

use crate::model::constants::*;
use crate::model::{DoubleClickAction, Preferences};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring};

/// Reads a double from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str, default: f64) -> f64 {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: &*k];
    if obj == nil {
        default
    } else {
        msg_send![ud, doubleForKey: &*k]
    }
}

/// Reads an integer from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_int(key: &str, default: i32) -> i32 {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: &*k];
    if obj == nil {
        default
    } else {
        // NSInteger is i64 on 64-bit macOS
        let val: i64 = msg_send![ud, integerForKey: &*k];
        i32::try_from(val).unwrap_or(default)
    }
}

/// Stores an integer in NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_int(key: &str, value: i32) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring(key);
    let _: () = msg_send![ud, setInteger: value as i64, forKey: &*k];
}

/// Loads and validates the preference set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_preferences() -> Preferences {
    let mut prefs = Preferences {
        double_click_action: DoubleClickAction::from_code(prefs_get_int(
            PREF_DOUBLE_CLICK_ACTION,
            DOUBLE_CLICK_NONE,
        )),
        double_click_interval: prefs_get_double(
            PREF_DOUBLE_CLICK_INTERVAL,
            DEFAULT_DOUBLE_CLICK_INTERVAL,
        ),
        poll_interval: prefs_get_double(PREF_POLL_INTERVAL, DEFAULT_POLL_INTERVAL),
        highlight_on_click: prefs_get_int(PREF_HIGHLIGHT_ON_CLICK, 1) != 0,
    };
    prefs.validate();
    debug!(?prefs, "preferences loaded");
    prefs
}
