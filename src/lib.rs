//! Terminal preview of chat role gradient colors.
//!
//! A role is a named entry with a two-stop gradient; the tool renders the
//! role list the way a chat client would (message stream and member sidebar)
//! in both dark and light themes, and emits the matching CSS decoration.

pub mod cli;
pub mod config;
pub mod css;
pub mod gradient;
pub mod logging;
pub mod popover;
pub mod role;
pub mod theme;
pub mod tui;
