//! FFI bindings for ApplicationServices (Accessibility).
//!
//! Posting keyboard events into the HID stream needs the process to be
//! trusted for accessibility. The check can optionally raise the system
//! permission prompt.

use std::ffi::c_void;

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;

    static kAXTrustedCheckOptionPrompt: *const c_void;
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    static kCFBooleanTrue: *const c_void;
    static kCFBooleanFalse: *const c_void;
    static kCFTypeDictionaryKeyCallBacks: c_void;
    static kCFTypeDictionaryValueCallBacks: c_void;

    fn CFDictionaryCreate(
        allocator: *const c_void,
        keys: *const *const c_void,
        values: *const *const c_void,
        count: isize,
        key_callbacks: *const c_void,
        value_callbacks: *const c_void,
    ) -> *const c_void;

    fn CFRelease(cf: *const c_void);
}

/// Whether this process may post synthetic input.
///
/// With `prompt` set and the process untrusted, macOS shows its
/// "would like to control this computer" dialog. The answer only takes
/// effect on a later check.
pub fn is_trusted(prompt: bool) -> bool {
    unsafe {
        let keys = [kAXTrustedCheckOptionPrompt];
        let values = [if prompt { kCFBooleanTrue } else { kCFBooleanFalse }];

        let options = CFDictionaryCreate(
            std::ptr::null(),
            keys.as_ptr(),
            values.as_ptr(),
            1,
            &kCFTypeDictionaryKeyCallBacks as *const c_void,
            &kCFTypeDictionaryValueCallBacks as *const c_void,
        );

        let trusted = AXIsProcessTrustedWithOptions(options);

        if !options.is_null() {
            CFRelease(options);
        }
        trusted
    }
}
