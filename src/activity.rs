//! Gopher activities and the glyph sequences they cycle through.

use crate::error::GopherError;
use std::fmt;
use std::str::FromStr;

const WAITING: &[char] = &['◔', '●'];
const WONDERING: &[char] = &['⊙', '●'];
const BORING: &[char] = &['◷', '◶', '◵', '◴'];
const LOVING: &[char] = &['♡', '❤'];

/// What the gopher is doing, which selects the glyphs used for its eyes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activity {
    #[default]
    Waiting,
    Wondering,
    Boring,
    Loving,
}

impl Activity {
    /// Every activity, in declaration order.
    pub const ALL: [Activity; 4] = [
        Activity::Waiting,
        Activity::Wondering,
        Activity::Boring,
        Activity::Loving,
    ];

    /// The ordered glyph sequence for this activity.
    pub fn glyphs(self) -> &'static [char] {
        match self {
            Activity::Waiting => WAITING,
            Activity::Wondering => WONDERING,
            Activity::Boring => BORING,
            Activity::Loving => LOVING,
        }
    }

    /// Glyph shown on the given tick, wrapping around the sequence.
    pub fn glyph_at(self, tick: usize) -> char {
        let glyphs = self.glyphs();
        glyphs[tick % glyphs.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Activity::Waiting => "Waiting",
            Activity::Wondering => "Wondering",
            Activity::Boring => "Boring",
            Activity::Loving => "Loving",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Activity {
    type Err = GopherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Activity::ALL
            .into_iter()
            .find(|activity| activity.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| GopherError::invalid_argument(format!("unknown activity `{name}`")))
    }
}
