//! Activity modules for the TUI.

pub mod css_preview;
pub mod main;

pub use css_preview::CssPreviewActivity;
pub use main::MainActivity;
