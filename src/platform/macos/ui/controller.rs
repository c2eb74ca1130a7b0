//! Target object for the status item, its menu and the app's timers.
//!
//! AppKit needs an Objective-C receiver for target/action and NSTimer, so a
//! small NSObject subclass is registered at runtime. Its methods only
//! translate the callback into an [`AppEvent`] and run the dispatcher; all
//! state lives in the app state cell.

use std::time::Instant;

use objc2::runtime::{AnyClass, ClassBuilder};
use tracing::trace;

use crate::click::{ClickAction, ClickDecision};
use crate::events::{publish, AppEvent};
use crate::platform::macos::app::with_state;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, sel, AnyObject, NSApp, Sel, NO, YES,
};
use crate::platform::macos::handlers::dispatch_events;

/// `buttonNumber` of the secondary mouse button.
const RIGHT_MOUSE_BUTTON: isize = 1;

/// Register the controller class (once) and create an instance.
/// Returns an owned (+1) object.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_controller() -> id {
    let class_name = c"WhichSpaceController";
    let class = match AnyClass::get(class_name) {
        Some(cls) => cls,
        None => {
            let mut builder = ClassBuilder::new(class_name, get_class("NSObject"))
                .unwrap_or_else(|| panic!("could not declare {class_name:?}"));
            register_methods(&mut builder);
            builder.register()
        }
    };
    msg_send![class, new]
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    builder.add_method(
        sel!(statusItemPressed:),
        status_item_pressed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(clickDeadline:),
        click_deadline as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(switchToSpace:),
        switch_to_space as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(pollTick:),
        poll_tick as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(sel!(quit:), quit as unsafe extern "C-unwind" fn(_, _, _));
}

/// Schedule an NSTimer in the common run loop modes, so it also fires while
/// the menu is tracking. Returns the timer retained (+1).
///
/// # Safety
/// `target` must respond to `selector` and outlive the timer.
pub unsafe fn schedule_timer(target: id, selector: Sel, interval: f64, repeats: bool) -> id {
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: target,
        selector: selector,
        userInfo: nil,
        repeats: if repeats { YES } else { NO }
    ];
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: &*common_modes];
    let _: id = msg_send![timer, retain];
    timer
}

unsafe extern "C-unwind" fn status_item_pressed(this: &AnyObject, _cmd: Sel, _sender: id) {
    let event: id = msg_send![NSApp(), currentEvent];
    let button: isize = if event == nil {
        0
    } else {
        msg_send![event, buttonNumber]
    };

    if button == RIGHT_MOUSE_BUTTON {
        with_state(|state| state.cancel_click());
        publish(AppEvent::StatusItemClicked);
    } else {
        let decision = with_state(|state| {
            let decision = state.clicks.press(Instant::now());
            if matches!(decision, ClickDecision::Fire(_)) {
                state.clear_click_timer();
            }
            decision
        });
        trace!(?decision, "status item pressed");
        match decision {
            Some(ClickDecision::Fire(ClickAction::Single)) => {
                publish(AppEvent::StatusItemClicked)
            }
            Some(ClickDecision::Fire(ClickAction::Double)) => {
                publish(AppEvent::StatusItemDoubleClicked)
            }
            Some(ClickDecision::Defer(wait)) => {
                let target = this as *const AnyObject as id;
                let timer = schedule_timer(target, sel!(clickDeadline:), wait.as_secs_f64(), false);
                with_state(|state| state.set_click_timer(timer));
            }
            None => {}
        }
    }
    dispatch_events();
}

unsafe extern "C-unwind" fn click_deadline(_this: &AnyObject, _cmd: Sel, _timer: id) {
    let fired = with_state(|state| {
        state.clear_click_timer();
        state.clicks.deadline(Instant::now())
    });
    if let Some(Some(ClickAction::Single)) = fired {
        publish(AppEvent::StatusItemClicked);
    }
    dispatch_events();
}

unsafe extern "C-unwind" fn switch_to_space(_this: &AnyObject, _cmd: Sel, sender: id) {
    if sender == nil {
        return;
    }
    let tag: isize = msg_send![sender, tag];
    if let Ok(ordinal) = usize::try_from(tag) {
        publish(AppEvent::SwitchToSpace(ordinal));
    }
    dispatch_events();
}

unsafe extern "C-unwind" fn poll_tick(_this: &AnyObject, _cmd: Sel, _timer: id) {
    publish(AppEvent::RefreshRequested);
    dispatch_events();
}

unsafe extern "C-unwind" fn quit(_this: &AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::Quit);
    dispatch_events();
}
