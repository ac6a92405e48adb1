//! SGR foreground colors for the gopher.

use crate::error::GopherError;
use std::fmt;
use std::str::FromStr;

/// One of the eight standard terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl Color {
    /// Every color, ordered by SGR code.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// SGR foreground code (30-37)
    pub fn sgr_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Magenta => "Magenta",
            Color::Cyan => "Cyan",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = GopherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Color::ALL
            .into_iter()
            .find(|color| color.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| GopherError::invalid_argument(format!("unknown color `{name}`")))
    }
}
