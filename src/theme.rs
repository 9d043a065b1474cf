//! Dark and light chat preview themes.
//!
//! Colors approximate the chat client being previewed rather than the
//! terminal's own palette, so role gradients read the same as they would in
//! the real client.

use ratatui::style::Color;

/// Which preview theme a pane renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Dark,
    Light,
}

impl ThemeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Fixed color set for one preview pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTheme {
    pub kind: ThemeKind,
    /// Message stream background.
    pub background: Color,
    /// Member sidebar background.
    pub surface: Color,
    /// Message body text.
    pub text: Color,
    /// Timestamps, the online header, and other secondary text.
    pub muted: Color,
    /// Avatar placeholder fill.
    pub avatar: Color,
}

impl PreviewTheme {
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: Color::Rgb(0x31, 0x33, 0x38),
            surface: Color::Rgb(0x2b, 0x2d, 0x31),
            text: Color::Rgb(0xdb, 0xde, 0xe1),
            muted: Color::Rgb(0x94, 0x9b, 0xa4),
            avatar: Color::Rgb(0x4e, 0x50, 0x58),
        }
    }

    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Color::Rgb(0xff, 0xff, 0xff),
            surface: Color::Rgb(0xf2, 0xf3, 0xf5),
            text: Color::Rgb(0x31, 0x33, 0x38),
            muted: Color::Rgb(0x5c, 0x5e, 0x66),
            avatar: Color::Rgb(0xc4, 0xc9, 0xce),
        }
    }

    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        }
    }
}
