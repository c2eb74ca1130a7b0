//! The menu bar status item.
//!
//! The button sends its action on mouse-down for both buttons; the
//! controller decides between single, double and right clicks. The menu is
//! not attached to the item permanently, otherwise AppKit would open it on
//! every click and the action would never fire.

use tracing::debug;

use super::icon::render_label;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, release, NSPoint, NSRect, Sel, NO, YES,
};

/// NSVariableStatusItemLength
const VARIABLE_LENGTH: f64 = -1.0;

/// NSEventMaskLeftMouseDown | NSEventMaskRightMouseDown
const SEND_ACTION_MASK: u64 = (1 << 1) | (1 << 3);

pub struct StatusItem {
    item: id,
    menu: id,
    highlight_mode: bool,
}

impl StatusItem {
    /// Add an item to the system status bar, wired to `target`/`action`.
    ///
    /// # Safety
    /// Must be called from the main thread; `target` must outlive the item.
    pub unsafe fn install(target: id, action: Sel) -> Self {
        let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
        let item: id = msg_send![status_bar, statusItemWithLength: VARIABLE_LENGTH];
        let _: id = msg_send![item, retain];

        let button: id = msg_send![item, button];
        if button != nil {
            let _: () = msg_send![button, setTarget: target];
            let _: () = msg_send![button, setAction: action];
            let _: isize = msg_send![button, sendActionOn: SEND_ACTION_MASK];
        }

        Self {
            item,
            menu: nil,
            highlight_mode: true,
        }
    }

    /// The item's NSStatusBarButton.
    pub fn button(&self) -> id {
        unsafe { msg_send![self.item, button] }
    }

    pub fn status_bar(&self) -> id {
        unsafe { msg_send![self.item, statusBar] }
    }

    /// Window server id of the window hosting the button.
    pub fn window_number(&self) -> Option<u32> {
        unsafe {
            let button = self.button();
            if button == nil {
                return None;
            }
            let window: id = msg_send![button, window];
            if window == nil {
                return None;
            }
            let number: isize = msg_send![window, windowNumber];
            u32::try_from(number).ok().filter(|n| *n != 0)
        }
    }

    /// Redraw the button with `label`.
    pub fn set_label(&self, label: &str) {
        unsafe {
            let button = self.button();
            if button == nil {
                return;
            }
            let image = render_label(label);
            if image != nil {
                let _: () = msg_send![button, setImage: image];
                release(image);
            } else {
                let title = nsstring(label);
                let _: () = msg_send![button, setTitle: &*title];
            }
            debug!(label, "status item label set");
        }
    }

    pub fn highlight_mode(&self) -> bool {
        self.highlight_mode
    }

    pub fn set_highlight_mode(&mut self, enabled: bool) {
        self.highlight_mode = enabled;
    }

    /// The menu last built for this item, or nil.
    pub fn menu(&self) -> id {
        self.menu
    }

    /// Attach `menu`, retaining it and releasing the previous one.
    pub fn set_menu(&mut self, menu: id) {
        unsafe {
            if menu != nil {
                let _: id = msg_send![menu, retain];
            }
            release(self.menu);
        }
        self.menu = menu;
    }
}

impl Drop for StatusItem {
    fn drop(&mut self) {
        unsafe {
            let status_bar = self.status_bar();
            if status_bar != nil {
                let _: () = msg_send![status_bar, removeStatusItem: self.item];
            }
            release(self.menu);
            release(self.item);
        }
    }
}

/// Show `menu` under `button` and block until it closes.
///
/// Runs a nested event loop; callers must not hold the app state borrow.
///
/// # Safety
/// Must be called from the main thread with valid `menu` and `button`.
pub unsafe fn pop_up_menu(menu: id, button: id, highlight: bool) {
    if menu == nil || button == nil {
        return;
    }
    if highlight {
        let _: () = msg_send![button, highlight: YES];
    }
    let bounds: NSRect = msg_send![button, bounds];
    let origin = NSPoint::new(0.0, bounds.size.height + 4.0);
    let _: bool = msg_send![
        menu,
        popUpMenuPositioningItem: nil,
        atLocation: origin,
        inView: button
    ];
    if highlight {
        let _: () = msg_send![button, highlight: NO];
    }
}
