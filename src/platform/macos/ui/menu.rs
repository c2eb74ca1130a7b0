//! The popup menu listing every space.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nsstring, release, sel, Sel, NO};
use crate::shell::MenuEntry;

/// NSControlStateValueOn
const STATE_ON: isize = 1;

/// Build the space menu. Returns an owned (+1) NSMenu.
///
/// Each space item carries its ordinal as the tag and sends
/// `switchToSpace:` to `target`; the last item sends `quit:`.
///
/// # Safety
/// Must be called from the main thread; `target` must be a valid controller.
pub unsafe fn build_menu(entries: &[MenuEntry], target: id) -> id {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];
    let _: () = msg_send![menu, setAutoenablesItems: NO];

    if entries.is_empty() {
        let item = new_item("Spaces unavailable", sel!(switchToSpace:), "", target);
        let _: () = msg_send![item, setEnabled: NO];
        add_item(menu, item);
    }

    for entry in entries {
        let item = new_item(&entry.title, sel!(switchToSpace:), "", target);
        let _: () = msg_send![item, setTag: entry.ordinal as isize];
        let _: () = msg_send![item, setEnabled: entry.enabled];
        if entry.active {
            let _: () = msg_send![item, setState: STATE_ON];
        }
        add_item(menu, item);
    }

    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    let quit = new_item("Quit WhichSpace", sel!(quit:), "q", target);
    add_item(menu, quit);

    menu
}

unsafe fn new_item(title: &str, action: Sel, key: &str, target: id) -> id {
    let title = nsstring(title);
    let key = nsstring(key);
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: &*title,
        action: action,
        keyEquivalent: &*key
    ];
    let _: () = msg_send![item, setTarget: target];
    item
}

/// The menu retains the item; drop our reference.
unsafe fn add_item(menu: id, item: id) {
    let _: () = msg_send![menu, addItem: item];
    release(item);
}
