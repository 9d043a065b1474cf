//! Single-open color picker selection and outside-click handling.

use ratatui::layout::{Position, Rect};

use crate::role::{ColorSlot, RoleId};

/// Which picker is currently expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub role_id: RoleId,
    pub slot: ColorSlot,
}

/// Screen area of one color swatch button, rebuilt from the rendered layout
/// on every draw. Containment tests run against these instead of walking a
/// widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchRegion {
    pub role_id: RoleId,
    pub slot: ColorSlot,
    pub area: Rect,
}

/// Tracks the at-most-one open color picker.
///
/// Two states per slot identity: closed, or open for exactly one
/// `(role, slot)` pair. Toggling the open pair closes it; toggling any other
/// pair switches to it directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopoverFocus {
    open: Option<Selection>,
}

impl PopoverFocus {
    pub fn open(&self) -> Option<Selection> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn is_open_for(&self, role_id: RoleId, slot: ColorSlot) -> bool {
        self.open == Some(Selection { role_id, slot })
    }

    pub fn toggle(&mut self, role_id: RoleId, slot: ColorSlot) {
        let selection = Selection { role_id, slot };
        if self.open == Some(selection) {
            self.open = None;
        } else {
            self.open = Some(selection);
        }
    }

    pub fn clear(&mut self) {
        self.open = None;
    }

    /// Handle a click at `position`. If a picker is open and the click lands
    /// inside none of the swatch regions (any role's), the picker closes.
    /// An empty region list counts as "not inside". Returns whether the
    /// selection was cleared.
    pub fn handle_click(&mut self, position: Position, regions: &[SwatchRegion]) -> bool {
        if self.open.is_none() {
            return false;
        }
        if regions.iter().any(|r| r.area.contains(position)) {
            return false;
        }
        self.open = None;
        true
    }
}
