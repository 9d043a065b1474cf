//! TUI components using tui-realm.

pub mod confirm;
pub mod help;
pub mod picker;
pub mod preview;
pub mod roster;

pub use confirm::render_confirm;
pub use help::{CSS_FOOTER_ACTIONS, MAIN_FOOTER_ACTIONS, format_footer, render_help};
pub use picker::Picker;
pub use preview::Preview;
pub use roster::Roster;
