//! Foreground colors understood by status-line tags.

use std::fmt;
use std::str::FromStr;

/// One of the eight basic terminal foreground colors.
///
/// The discriminants follow the terminfo `setf` numbering, which is not
/// the same order as ANSI SGR codes (see [`Color::ansi_index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Yellow = 6,
    White = 7,
}

impl Color {
    /// All colors in `setf` index order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Index passed to the terminal's "set foreground" capability.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Index in ANSI SGR order (`ESC[3Nm`).
    ///
    /// `setf` encodes colors as BGR bits while SGR uses RGB, so the red
    /// and blue bits swap places.
    pub fn ansi_index(self) -> u8 {
        let i = self.index();
        (i & 0b010) | ((i & 0b001) << 2) | ((i & 0b100) >> 2)
    }

    /// Upper-case name for display/logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "BLACK",
            Self::Blue => "BLUE",
            Self::Green => "GREEN",
            Self::Cyan => "CYAN",
            Self::Red => "RED",
            Self::Magenta => "MAGENTA",
            Self::Yellow => "YELLOW",
            Self::White => "WHITE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a color name is not one of the eight known colors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color '{name}' (expected one of: black, blue, green, cyan, red, magenta, yellow, white)")]
pub struct ParseColorError {
    pub name: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError {
                name: s.to_string(),
            })
    }
}
