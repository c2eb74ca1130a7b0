//! Space descriptors and the interpretation of the window server's
//! managed-display-spaces array.
//!
//! The platform shim converts the CoreFoundation structures into
//! [`RawDisplay`] records; everything from there on is plain Rust.

use super::constants::{
    FULLSCREEN_LABEL, MAIN_DISPLAY_IDENTIFIER, PLACEHOLDER_LABEL, SPACE_TYPE_DESKTOP,
    SPACE_TYPE_FULLSCREEN,
};
use crate::error::{Result, SpaceError};

/// Kind of space as reported by the window server's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceKind {
    Desktop,
    Fullscreen,
    /// Any type code we do not know about (system spaces and the like).
    Other(i64),
}

impl SpaceKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            SPACE_TYPE_DESKTOP => SpaceKind::Desktop,
            SPACE_TYPE_FULLSCREEN => SpaceKind::Fullscreen,
            other => SpaceKind::Other(other),
        }
    }
}

/// One entry of a display's `Spaces` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpace {
    /// `ManagedSpaceID`.
    pub id: u64,
    pub uuid: String,
    /// `type`; 0 for desktops, 4 for fullscreen apps.
    pub kind_code: i64,
}

/// One element of `CGSCopyManagedDisplaySpaces`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDisplay {
    /// `Display Identifier`.
    pub identifier: String,
    /// `ManagedSpaceID` of `Current Space`, if the dictionary had one.
    pub current_space: Option<u64>,
    pub spaces: Vec<RawSpace>,
}

/// Extra information used to pick the active display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveHint {
    /// Result of `CGSCopyActiveMenuBarDisplayIdentifier`.
    pub menu_bar_display: Option<String>,
    /// Spaces the status item's window is on, from `SLSCopySpacesForWindows`.
    pub window_spaces: Vec<u64>,
}

/// A virtual desktop, numbered the way the status item shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceDescriptor {
    pub id: u64,
    pub uuid: String,
    /// Identifier of the display this space belongs to.
    pub display: String,
    /// 1-based position across all displays.
    pub ordinal: usize,
    pub kind: SpaceKind,
    /// 1-based desktop number for "Switch to Desktop N"; `None` for
    /// fullscreen and unknown kinds.
    pub desktop_number: Option<usize>,
}

impl SpaceDescriptor {
    /// Menu title for this space, numbered the way Mission Control does.
    pub fn title(&self) -> String {
        match (self.kind, self.desktop_number) {
            (_, Some(n)) => format!("Desktop {n}"),
            (SpaceKind::Fullscreen, None) => "Fullscreen".to_string(),
            (_, None) => format!("Space {}", self.ordinal),
        }
    }

    /// Text shown in the status item while this space is active.
    pub fn label(&self) -> String {
        match (self.kind, self.desktop_number) {
            (_, Some(n)) => n.to_string(),
            (SpaceKind::Fullscreen, None) => FULLSCREEN_LABEL.to_string(),
            (_, None) => PLACEHOLDER_LABEL.to_string(),
        }
    }

    pub fn is_switchable(&self) -> bool {
        self.desktop_number.is_some()
    }
}

/// Result of one successful enumeration.
///
/// Never empty, and `active` always indexes into `spaces`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceSnapshot {
    spaces: Vec<SpaceDescriptor>,
    active: usize,
}

impl SpaceSnapshot {
    /// Number the spaces of every display and work out which one is active.
    pub fn from_displays(displays: &[RawDisplay], hint: &ActiveHint) -> Result<Self> {
        let mut spaces = Vec::new();
        let mut desktops = 0usize;

        for display in displays {
            for raw in &display.spaces {
                let kind = SpaceKind::from_code(raw.kind_code);
                let desktop_number = match kind {
                    SpaceKind::Desktop => {
                        desktops += 1;
                        Some(desktops)
                    }
                    _ => None,
                };
                spaces.push(SpaceDescriptor {
                    id: raw.id,
                    uuid: raw.uuid.clone(),
                    display: display.identifier.clone(),
                    ordinal: spaces.len() + 1,
                    kind,
                    desktop_number,
                });
            }
        }

        if spaces.is_empty() {
            return Err(SpaceError::EmptySpaceList);
        }

        let display = active_display(displays, hint).ok_or(SpaceError::NoActiveSpace)?;
        let current = display.current_space.ok_or(SpaceError::NoActiveSpace)?;
        let active = spaces
            .iter()
            .position(|s| s.id == current && s.display == display.identifier)
            .ok_or(SpaceError::NoActiveSpace)?;

        Ok(Self { spaces, active })
    }

    pub fn active(&self) -> &SpaceDescriptor {
        &self.spaces[self.active]
    }

    pub fn spaces(&self) -> &[SpaceDescriptor] {
        &self.spaces
    }

    pub fn by_ordinal(&self, ordinal: usize) -> Option<&SpaceDescriptor> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.spaces.get(i))
    }

    /// Text shown in the status item.
    pub fn label(&self) -> String {
        self.active().label()
    }
}

/// Menu bar display first, then the status window's space, then "Main",
/// then whichever display reports a current space.
fn active_display<'a>(displays: &'a [RawDisplay], hint: &ActiveHint) -> Option<&'a RawDisplay> {
    let with_current = || displays.iter().filter(|d| d.current_space.is_some());

    if let Some(id) = hint.menu_bar_display.as_deref() {
        if let Some(d) = with_current().find(|d| d.identifier == id) {
            return Some(d);
        }
    }

    if let Some(d) = with_current().find(|d| {
        d.current_space
            .is_some_and(|cur| hint.window_spaces.contains(&cur))
    }) {
        return Some(d);
    }

    with_current()
        .find(|d| d.identifier == MAIN_DISPLAY_IDENTIFIER)
        .or_else(|| with_current().next())
}
