//! Draw the status item label as a template image.

use objc2_app_kit::{NSFontAttributeName, NSForegroundColorAttributeName};
use objc2_core_foundation::CGFloat;

use crate::icon::IconLayout;
use crate::model::ICON_FONT_SIZE;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nsstring, NSPoint, NSRect, NSSize, YES,
};

/// NSCompositingOperationDestinationOut
const COMPOSITE_DESTINATION_OUT: usize = 8;

/// Render `label` knocked out of a rounded badge.
///
/// The image is a template, so AppKit tints it for the menu bar appearance
/// and for the highlighted state. Returns an owned (+1) NSImage.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn render_label(label: &str) -> id {
    let layout = IconLayout::for_label(label);
    let size = NSSize::new(layout.width as CGFloat, layout.height as CGFloat);

    let image: id = msg_send![get_class("NSImage"), alloc];
    let image: id = msg_send![image, initWithSize: size];
    let _: () = msg_send![image, lockFocus];

    let badge = NSRect::new(NSPoint::new(0.0, 0.0), size);
    let radius = layout.corner_radius as CGFloat;
    let path: id = msg_send![
        get_class("NSBezierPath"),
        bezierPathWithRoundedRect: badge,
        xRadius: radius,
        yRadius: radius
    ];
    let black: id = msg_send![get_class("NSColor"), blackColor];
    let _: () = msg_send![black, setFill];
    let _: () = msg_send![path, fill];

    let context: id = msg_send![get_class("NSGraphicsContext"), currentContext];
    let _: () = msg_send![context, setCompositingOperation: COMPOSITE_DESTINATION_OUT];

    let font: id = msg_send![get_class("NSFont"), boldSystemFontOfSize: ICON_FONT_SIZE as CGFloat];
    let attrs: id = msg_send![get_class("NSMutableDictionary"), dictionary];
    let _: () = msg_send![attrs, setObject: font, forKey: NSFontAttributeName];
    let _: () = msg_send![attrs, setObject: black, forKey: NSForegroundColorAttributeName];

    let text = nsstring(label);
    let measured: NSSize = msg_send![&*text, sizeWithAttributes: attrs];
    let origin = NSPoint::new(
        (layout.text_x + (layout.text_width - measured.width) / 2.0) as CGFloat,
        ((layout.height - measured.height) / 2.0) as CGFloat,
    );
    let _: () = msg_send![&*text, drawAtPoint: origin, withAttributes: attrs];

    let _: () = msg_send![image, unlockFocus];
    let _: () = msg_send![image, setTemplate: YES];
    image
}
