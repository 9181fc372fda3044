//! Theme: dark, low-contrast chrome with a single accent.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Input bar, status, list.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Prompt, cursor bar, matched characters.
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    /// Highlighted row background.
    pub const ACCENT_GLOW: Color = Color::Rgb(0x1e, 0x2d, 0x3d);
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    /// Hints, counters.
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    /// Current selection marker.
    pub const SELECTED: Color = Color::Rgb(0x7e, 0xd3, 0x8f);
}

pub const STATUS_HEIGHT: u16 = 1;
/// Top border plus one text line.
pub const INPUT_HEIGHT: u16 = 2;
/// Rounded border around the result list.
pub const LIST_CHROME: u16 = 2;
pub const HIGHLIGHT_BAR: &str = "▎ ";
pub const SELECTED_MARK: &str = " ✓";
