//! Application messages for the TUI.

use crate::role::{ColorSlot, RoleId};

/// All possible messages that can be sent in the main activity.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,
    HideHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Role store operations
    RoleAdded,
    DeleteRequested(RoleId),
    DeleteConfirmed(RoleId),
    DeleteCancelled,
    RoleRenamed(RoleId, String),
    RoleMoved(usize, usize),

    // Editor selection (which row the cursor is on)
    SelectionChanged(usize),

    // Color picker popover
    PickerToggled(RoleId, ColorSlot),
    PickerClosed,
    ColorPicked(RoleId, ColorSlot, String),

    // Window-level interaction (terminal cell coordinates)
    Clicked(u16, u16),

    // Clipboard
    CopyCss,

    // Activity transition
    SwitchToCssPreview,

    // No-op (for unhandled events)
    None,
}
