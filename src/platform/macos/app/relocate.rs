//! First-launch offer to move the bundle into `/Applications`.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::{Result, SpaceError};
use crate::model::constants::PREF_MOVE_TO_APPLICATIONS_SUPPRESSED;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, release, string_value, NSApp, YES,
};
use crate::platform::macos::storage::{prefs_get_int, prefs_set_int};
use crate::relocate::{plan, relaunch_script, Relocation};

/// NSAlertFirstButtonReturn.
const ALERT_FIRST_BUTTON: i64 = 1000;

/// NSControlStateValueOn.
const CONTROL_STATE_ON: i64 = 1;

/// Offer to move the running bundle into `/Applications`.
///
/// Does nothing when the offer was suppressed, or when the app already runs
/// from an applications folder. After a successful move the new copy is
/// relaunched and this process terminates.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool, before the
/// run loop starts.
pub unsafe fn offer_move_to_applications() {
    if prefs_get_int(PREF_MOVE_TO_APPLICATIONS_SUPPRESSED, 0) != 0 {
        return;
    }
    let bundle: id = msg_send![get_class("NSBundle"), mainBundle];
    let Some(source) = string_value(msg_send![bundle, bundlePath]).map(PathBuf::from) else {
        return;
    };
    let home = std::env::var_os("HOME").map(PathBuf::from);

    let destination = match plan(&source, home.as_deref()) {
        Relocation::Offer { destination } => destination,
        other => {
            debug!(?other, path = %source.display(), "not offering move to Applications");
            return;
        }
    };

    if !ask_to_move() {
        return;
    }

    match move_bundle(&source, &destination) {
        Ok(()) => {
            info!(to = %destination.display(), "moved to Applications, relaunching");
            relaunch(&destination);
        }
        Err(err) => warn!(%err, from = %source.display(), "move to Applications failed"),
    }
}

/// Show the alert; true when the user chose to move.
unsafe fn ask_to_move() -> bool {
    let app = NSApp();
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];

    let alert: id = msg_send![get_class("NSAlert"), new];
    let message = nsstring("Move to Applications folder?");
    let detail = nsstring("WhichSpace can move itself to the Applications folder if you'd like.");
    let move_title = nsstring("Move to Applications Folder");
    let keep_title = nsstring("Do Not Move");
    let _: () = msg_send![alert, setMessageText: &*message];
    let _: () = msg_send![alert, setInformativeText: &*detail];
    let _: id = msg_send![alert, addButtonWithTitle: &*move_title];
    let _: id = msg_send![alert, addButtonWithTitle: &*keep_title];
    let _: () = msg_send![alert, setShowsSuppressionButton: YES];

    let response: i64 = msg_send![alert, runModal];
    let suppression: id = msg_send![alert, suppressionButton];
    let suppressed = suppression != nil && {
        let state: i64 = msg_send![suppression, state];
        state == CONTROL_STATE_ON
    };
    release(alert);

    if suppressed {
        prefs_set_int(PREF_MOVE_TO_APPLICATIONS_SUPPRESSED, 1);
        debug!("move to Applications offer suppressed");
    }
    response == ALERT_FIRST_BUTTON
}

/// Copy the bundle to `destination`, replacing what is there, then trash
/// the original.
unsafe fn move_bundle(source: &Path, destination: &Path) -> Result<()> {
    let fm: id = msg_send![get_class("NSFileManager"), defaultManager];
    let dest = nsstring(&destination.display().to_string());

    let exists: bool = msg_send![fm, fileExistsAtPath: &*dest];
    if exists {
        trash(fm, destination)?;
    }

    let src = nsstring(&source.display().to_string());
    let mut err: id = nil;
    let err_out: *mut id = &mut err;
    let copied: bool = msg_send![fm, copyItemAtPath: &*src, toPath: &*dest, error: err_out];
    if !copied {
        return Err(SpaceError::Relocate(describe(err)));
    }

    if let Err(err) = trash(fm, source) {
        warn!(%err, "copied to Applications but could not trash the original");
    }
    Ok(())
}

unsafe fn trash(fm: id, path: &Path) -> Result<()> {
    let p = nsstring(&path.display().to_string());
    let url: id = msg_send![get_class("NSURL"), fileURLWithPath: &*p];
    let mut err: id = nil;
    let resulting: *mut id = std::ptr::null_mut();
    let err_out: *mut id = &mut err;
    let ok: bool =
        msg_send![fm, trashItemAtURL: url, resultingItemURL: resulting, error: err_out];
    if ok {
        Ok(())
    } else {
        Err(SpaceError::Relocate(describe(err)))
    }
}

unsafe fn describe(err: id) -> String {
    if err == nil {
        return "unknown error".to_string();
    }
    string_value(msg_send![err, localizedDescription]).unwrap_or_else(|| "unknown error".into())
}

/// Start the moved copy once this process has exited, then quit.
unsafe fn relaunch(bundle: &Path) {
    let script = relaunch_script(std::process::id(), bundle);
    if let Err(err) = Command::new("/bin/sh").arg("-c").arg(&script).spawn() {
        warn!(%err, "could not schedule relaunch");
        return;
    }
    let _: () = msg_send![NSApp(), terminate: nil];
}
