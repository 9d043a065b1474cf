//! Component identifiers for the TUI.

/// Unique identifiers for all components in the main activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    /// Role list editor
    Roster,
    /// Color picker popover (mounted only while open)
    Picker,
    /// Dark theme preview pane
    PreviewDark,
    /// Light theme preview pane
    PreviewLight,
}
