//! Thin helpers over the objc2 runtime.
//!
//! Most of the app talks to AppKit through raw `msg_send!` on `id`, the same
//! way the window server hands back toll-free bridged CoreFoundation objects.
//! This module collects the aliases and the small readers used to pick those
//! objects apart.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr, CString};

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

pub use block2::RcBlock;
pub use objc2::rc::Retained;
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

/// Objective-C object pointer.
pub type id = *mut AnyObject;

pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL YES.
pub const YES: Bool = Bool::YES;

/// Objective-C BOOL NO.
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![get_class("NSApplication"), sharedApplication] }
}

/// Create a retained NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Get a class by name, panicking if not found.
///
/// Only used for Foundation/AppKit classes that always exist.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}

// ============================================================================
// Readers for bridged CoreFoundation values
// ============================================================================

/// True if `obj` is non-nil and an instance of (a subclass of) `class`.
///
/// # Safety
/// `obj` must be nil or a valid object.
pub unsafe fn is_kind_of(obj: id, class: &str) -> bool {
    if obj.is_null() {
        return false;
    }
    msg_send![obj, isKindOfClass: get_class(class)]
}

/// Look up `key` in an NSDictionary/CFDictionary. Returns nil for anything
/// that is not a dictionary or has no such key.
///
/// # Safety
/// `dict` must be nil or a valid object.
pub unsafe fn dict_value(dict: id, key: &str) -> id {
    if !is_kind_of(dict, "NSDictionary") {
        return nil;
    }
    let key = nsstring(key);
    msg_send![dict, objectForKey: &*key]
}

/// Elements of an NSArray/CFArray; empty for anything else.
///
/// # Safety
/// `array` must be nil or a valid object.
pub unsafe fn array_items(array: id) -> Vec<id> {
    if !is_kind_of(array, "NSArray") {
        return Vec::new();
    }
    let count: usize = msg_send![array, count];
    (0..count)
        .map(|i| -> id { msg_send![array, objectAtIndex: i] })
        .collect()
}

/// Copy an NSString into a Rust `String`.
///
/// # Safety
/// `obj` must be nil or a valid object.
pub unsafe fn string_value(obj: id) -> Option<String> {
    if !is_kind_of(obj, "NSString") {
        return None;
    }
    let utf8: *const c_char = msg_send![obj, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Read an NSNumber as `u64`.
///
/// # Safety
/// `obj` must be nil or a valid object.
pub unsafe fn u64_value(obj: id) -> Option<u64> {
    if !is_kind_of(obj, "NSNumber") {
        return None;
    }
    Some(msg_send![obj, unsignedLongLongValue])
}

/// Read an NSNumber as `i64`.
///
/// # Safety
/// `obj` must be nil or a valid object.
pub unsafe fn i64_value(obj: id) -> Option<i64> {
    if !is_kind_of(obj, "NSNumber") {
        return None;
    }
    Some(msg_send![obj, longLongValue])
}

/// Balance a `Copy`/`Create`/`alloc` with a release.
///
/// # Safety
/// `obj` must be nil or an object the caller owns.
pub unsafe fn release(obj: id) {
    if !obj.is_null() {
        let _: () = msg_send![obj, release];
    }
}
