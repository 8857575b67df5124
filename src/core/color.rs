//! ANSI color codes and SGR painting
//!
//! Color indices follow the standard ANSI palette:
//! <https://en.wikipedia.org/wiki/ANSI_escape_code#Colors>

use serde::{Deserialize, Serialize};

/// One of the eight base ANSI terminal colors.
///
/// The discriminant is the palette index; foreground/background SGR codes
/// are derived by offsetting it (30/40 for normal, 90/100 for high
/// intensity).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// SGR code for this color as a normal-intensity foreground.
    #[must_use]
    pub fn as_foreground(self) -> u8 {
        30 + self as u8
    }

    /// SGR code for this color as a normal-intensity background.
    #[must_use]
    pub fn as_background(self) -> u8 {
        40 + self as u8
    }

    /// SGR code for this color as a high-intensity foreground.
    #[must_use]
    pub fn as_hi_foreground(self) -> u8 {
        90 + self as u8
    }

    /// SGR code for this color as a high-intensity background.
    #[must_use]
    pub fn as_hi_background(self) -> u8 {
        100 + self as u8
    }
}

/// Wrap `text` in an SGR escape sequence selecting the given foreground and
/// background colors, resetting all attributes afterwards.
///
/// The output is `ESC[<fg>;<bg>m <text> ESC[0m` — note the single space of
/// padding on each side of the text.
#[must_use]
pub fn paint(
    text: &str,
    foreground: Color,
    foreground_hi: bool,
    background: Color,
    background_hi: bool,
) -> String {
    let fg = if foreground_hi {
        foreground.as_hi_foreground()
    } else {
        foreground.as_foreground()
    };
    let bg = if background_hi {
        background.as_hi_background()
    } else {
        background.as_background()
    };
    format!("\x1b[{fg};{bg}m {text} \x1b[0m")
}
