//! Main-thread application state.
//!
//! Everything the AppKit callbacks need lives in one [`AppState`] stored in
//! a thread-local cell. Callbacks borrow it through [`with_state`], which
//! refuses re-entrant borrows instead of panicking.

use std::cell::RefCell;

use tracing::{debug, info, warn};

use crate::click::ClickTracker;
use crate::model::Preferences;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, release};
use crate::platform::macos::input::NotificationSubscription;
use crate::platform::macos::spaces::SkyLightProvider;
use crate::platform::macos::ui::StatusItem;
use crate::shell::SpaceShell;

thread_local! {
    static APP_STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
}

/// Owned controller object, released after the status item is gone.
struct Controller(id);

impl Drop for Controller {
    fn drop(&mut self) {
        unsafe { release(self.0) }
    }
}

pub struct AppState {
    pub shell: SpaceShell<SkyLightProvider>,
    pub clicks: ClickTracker,
    pub prefs: Preferences,
    pub status: StatusItem,
    subscriptions: Vec<NotificationSubscription>,
    click_timer: id,
    poll_timer: id,
    // Declared last: the status item targets it until dropped.
    controller: Controller,
}

impl AppState {
    /// Takes ownership of `controller` (+1).
    pub fn new(
        shell: SpaceShell<SkyLightProvider>,
        clicks: ClickTracker,
        prefs: Preferences,
        status: StatusItem,
        controller: id,
    ) -> Self {
        Self {
            shell,
            clicks,
            prefs,
            status,
            subscriptions: Vec::new(),
            click_timer: nil,
            poll_timer: nil,
            controller: Controller(controller),
        }
    }

    pub fn controller(&self) -> id {
        self.controller.0
    }

    pub fn add_subscriptions(&mut self, subscriptions: Vec<NotificationSubscription>) {
        self.subscriptions.extend(subscriptions);
    }

    /// Track the single-click timer (+1), invalidating any previous one.
    pub fn set_click_timer(&mut self, timer: id) {
        self.clear_click_timer();
        self.click_timer = timer;
    }

    pub fn clear_click_timer(&mut self) {
        invalidate(&mut self.click_timer);
    }

    /// Drop a pending single click and its timer.
    pub fn cancel_click(&mut self) {
        self.clicks.cancel();
        self.clear_click_timer();
    }

    /// Track the repeating poll timer (+1), invalidating any previous one.
    pub fn set_poll_timer(&mut self, timer: id) {
        invalidate(&mut self.poll_timer);
        self.poll_timer = timer;
    }

    /// Point the provider at the window currently hosting the status item.
    pub fn sync_reference_window(&self) {
        self.shell
            .provider()
            .set_reference_window(self.status.window_number());
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        invalidate(&mut self.click_timer);
        invalidate(&mut self.poll_timer);
        self.subscriptions.clear();
        debug!("app state dropped");
    }
}

fn invalidate(timer: &mut id) {
    if *timer == nil {
        return;
    }
    unsafe {
        let _: () = msg_send![*timer, invalidate];
        release(*timer);
    }
    *timer = nil;
}

/// Store the state for the lifetime of the app.
pub fn install_state(state: AppState) {
    APP_STATE.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => *slot = Some(state),
        Err(_) => warn!("app state busy, not installed"),
    });
}

/// Run `f` against the state. Returns `None` if the state is not installed
/// or is already borrowed further up the stack.
pub fn with_state<R>(f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
    APP_STATE.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            debug!("app state busy, skipping");
            return None;
        };
        slot.as_mut().map(f)
    })
}

/// Drop the state, releasing the status item, timers and observers.
pub fn shutdown() {
    let state = APP_STATE.with(|cell| cell.try_borrow_mut().ok().and_then(|mut slot| slot.take()));
    if state.is_some() {
        info!("shutting down");
    }
    drop(state);
}
