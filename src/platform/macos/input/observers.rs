//! System notification observers.
//!
//! Each observer is a block registered with a notification center. The
//! returned [`NotificationSubscription`] owns the registration and removes
//! it on drop, so the app state controls how long observers live.

use block2::RcBlock;
use tracing::{debug, info};

use crate::events::{publish, AppEvent};
use crate::model::{
    NOTE_ACTIVE_SPACE_CHANGED, NOTE_SCREEN_PARAMETERS_CHANGED, NOTE_THEME_CHANGED,
    NOTE_WILL_TERMINATE,
};
use crate::platform::macos::app::shutdown;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring, release};
use crate::platform::macos::handlers::dispatch_events;

/// Which notification center a subscription is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Center {
    /// `NSNotificationCenter.defaultCenter`
    Default,
    /// `NSWorkspace.sharedWorkspace.notificationCenter`
    Workspace,
    /// `NSDistributedNotificationCenter.defaultCenter`
    Distributed,
}

impl Center {
    unsafe fn resolve(self) -> id {
        match self {
            Center::Default => msg_send![get_class("NSNotificationCenter"), defaultCenter],
            Center::Workspace => {
                let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
                msg_send![ws, notificationCenter]
            }
            Center::Distributed => {
                msg_send![get_class("NSDistributedNotificationCenter"), defaultCenter]
            }
        }
    }
}

/// A registered block observer. Dropping it unregisters the block.
pub struct NotificationSubscription {
    name: &'static str,
    center: id,
    token: id,
}

impl NotificationSubscription {
    /// Run `callback` on the main thread each time `name` is posted.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn new<F>(center: Center, name: &'static str, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let center = center.resolve();
        let queue: id = msg_send![get_class("NSOperationQueue"), mainQueue];
        let block = RcBlock::new(move |_note: id| callback());
        let note_name = nsstring(name);
        let token: id = msg_send![
            center,
            addObserverForName: &*note_name,
            object: nil,
            queue: queue,
            usingBlock: &*block
        ];
        let _: id = msg_send![token, retain];
        let _: id = msg_send![center, retain];
        debug!(name, "observing notification");
        Self {
            name,
            center,
            token,
        }
    }

    /// Observer that turns a notification into an event.
    ///
    /// # Safety
    /// Must be called from the main thread.
    pub unsafe fn publishing(center: Center, name: &'static str, event: AppEvent) -> Self {
        Self::new(center, name, move || {
            publish(event.clone());
            dispatch_events();
        })
    }
}

impl Drop for NotificationSubscription {
    fn drop(&mut self) {
        unsafe {
            let _: () = msg_send![self.center, removeObserver: self.token];
            release(self.token);
            release(self.center);
        }
        debug!(name = self.name, "notification observer removed");
    }
}

/// Observers that keep the label current.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn subscribe_all() -> Vec<NotificationSubscription> {
    vec![
        NotificationSubscription::publishing(
            Center::Workspace,
            NOTE_ACTIVE_SPACE_CHANGED,
            AppEvent::SpaceChanged,
        ),
        NotificationSubscription::publishing(
            Center::Default,
            NOTE_SCREEN_PARAMETERS_CHANGED,
            AppEvent::DisplaysChanged,
        ),
        NotificationSubscription::publishing(
            Center::Distributed,
            NOTE_THEME_CHANGED,
            AppEvent::AppearanceChanged,
        ),
    ]
}

/// Tear down the app state when AppKit is about to exit.
///
/// This observer is never removed; the process ends right after it runs.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn install_termination_observer() {
    let subscription = NotificationSubscription::new(Center::Default, NOTE_WILL_TERMINATE, || {
        info!("terminating");
        shutdown();
    });
    std::mem::forget(subscription);
}
