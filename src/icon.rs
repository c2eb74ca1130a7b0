//! Geometry of the status item label.
//!
//! The label is drawn as a rounded badge with the space number knocked out
//! of it. Only the layout is computed here; drawing happens in
//! `platform::macos::ui::icon`.

use crate::model::{ICON_CORNER_RADIUS, ICON_GLYPH_WIDTH, ICON_HEIGHT, ICON_PADDING};

/// Badge size and text placement, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    /// Left edge of the text, relative to the badge.
    pub text_x: f64,
    pub text_width: f64,
}

impl IconLayout {
    /// Lay out a badge for `label`; never narrower than it is tall.
    pub fn for_label(label: &str) -> Self {
        let chars = label.chars().count().max(1) as f64;
        let text_width = chars * ICON_GLYPH_WIDTH;
        let width = (text_width + 2.0 * ICON_PADDING).max(ICON_HEIGHT);
        Self {
            width,
            height: ICON_HEIGHT,
            corner_radius: ICON_CORNER_RADIUS,
            text_x: (width - text_width) / 2.0,
            text_width,
        }
    }
}
