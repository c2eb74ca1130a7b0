//! Event dispatcher for the menu bar app.
//!
//! Observers, timers and menu actions publish [`AppEvent`]s and then call
//! [`dispatch_events`], which drains the bus on the main thread and turns
//! each event into AppKit calls.
//!
//! ```text
//! publish() → take_event() → dispatch_single_event() → shell / status item
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::events::{take_event, AppEvent};
use crate::model::{DoubleClickAction, MISSION_CONTROL_APP};
use crate::platform::macos::app::with_state;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, release, NSApp};
use crate::platform::macos::ui::{build_menu, pop_up_menu};
use crate::shell::Refresh;

/// Held while events are being dispatched.
///
/// Showing the menu runs a nested event loop in which timers and
/// notifications keep firing and calling back in here. Those nested calls
/// only queue their events; the outer loop picks them up once the menu
/// closes.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Dispatch all pending events from the global event bus.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn dispatch_events() {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    while let Some(event) = take_event() {
        debug!(event = event.description(), "dispatching");
        dispatch_single_event(&event);
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

unsafe fn dispatch_single_event(event: &AppEvent) {
    if event.requires_refresh() {
        refresh_label();
        return;
    }

    match event {
        AppEvent::AppearanceChanged => {
            with_state(|state| state.status.set_label(state.shell.label()));
        }
        AppEvent::StatusItemClicked => show_menu(),
        AppEvent::StatusItemDoubleClicked => {
            let action = with_state(|state| state.prefs.double_click_action);
            match action {
                Some(DoubleClickAction::MissionControl) => open_mission_control(),
                Some(DoubleClickAction::Refresh) => refresh_label(),
                Some(DoubleClickAction::None) | None => {}
            }
        }
        AppEvent::SwitchToSpace(ordinal) => {
            let result = with_state(|state| state.shell.switch_to(*ordinal));
            if let Some(Err(err)) = result {
                warn!(ordinal = *ordinal, %err, "could not switch space");
            }
        }
        AppEvent::Quit => {
            info!("quit requested");
            let _: () = msg_send![NSApp(), terminate: nil];
        }
        AppEvent::SpaceChanged | AppEvent::DisplaysChanged | AppEvent::RefreshRequested => {}
    }
}

/// Re-query the window server and redraw the label if it moved.
unsafe fn refresh_label() {
    with_state(|state| {
        state.sync_reference_window();
        if state.shell.refresh() == Refresh::Changed {
            state.status.set_label(state.shell.label());
        }
    });
}

/// Build the space menu and show it under the status item.
unsafe fn show_menu() {
    let prepared = with_state(|state| {
        state.cancel_click();
        state.sync_reference_window();
        if state.shell.refresh() == Refresh::Changed {
            state.status.set_label(state.shell.label());
        }
        let menu = build_menu(&state.shell.menu_entries(), state.controller());
        state.status.set_menu(menu);
        release(menu);
        (
            state.status.menu(),
            state.status.button(),
            state.status.highlight_mode(),
        )
    });

    // The menu tracks in a nested run loop, so the state borrow must be
    // released before this point.
    if let Some((menu, button, highlight)) = prepared {
        pop_up_menu(menu, button, highlight);
    }
}

unsafe fn open_mission_control() {
    let path = nsstring(MISSION_CONTROL_APP);
    let url: id = msg_send![get_class("NSURL"), fileURLWithPath: &*path];
    let workspace: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let opened: bool = msg_send![workspace, openURL: url];
    if !opened {
        warn!(path = MISSION_CONTROL_APP, "could not open Mission Control");
    }
}
