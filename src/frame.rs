//! Byte-level rendering of gopher frames.
//!
//! Frames are written in place: each one starts with a carriage return and is preceded
//! by a clear sequence that moves the cursor back over the previous frame and erases
//! to the end of the line.

use crate::appearance::Appearance;
use crate::color::Color;
use std::io::{self, Write};

/// Skeleton of a frame with its placeholders. Only its byte length matters at runtime:
/// it is the fixed part of the column count cleared before each frame.
pub const FRAME_TEMPLATE: &str = "%s \x1b[%dm`( %s ౪%s )´\x1b[m %s";

/// The gopher at rest.
pub const MASCOT: &str = "`( ◔ ౪◔)´";

/// Line written once when a running gopher is stopped.
pub const DONE_LINE: &str = "\r  `( ◔ ౪◔)´  I'm done ...\n";

/// A single frame of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub color: Color,
    pub glyph: char,
}

impl<'a> Frame<'a> {
    /// Build the frame shown on `tick` for the given appearance.
    pub fn new(appearance: &'a Appearance, tick: usize) -> Self {
        Self {
            prefix: &appearance.prefix,
            suffix: &appearance.suffix,
            color: appearance.color,
            glyph: appearance.activity.glyph_at(tick),
        }
    }

    /// Number of columns to move back when clearing this frame.
    pub fn width(&self) -> usize {
        self.prefix.len() + FRAME_TEMPLATE.len() + self.suffix.len()
    }

    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        write!(
            w,
            "\r{prefix} \x1b[{code}m`( {glyph} ౪{glyph} )´\x1b[m {suffix}",
            prefix = self.prefix,
            code = self.color.sgr_code(),
            glyph = self.glyph,
            suffix = self.suffix,
        )
    }
}

/// Move left `columns` columns, then erase to the end of the line.
pub fn write_clear<W: Write + ?Sized>(w: &mut W, columns: usize) -> io::Result<()> {
    write!(w, "\x1b[{columns}D\x1b[K")
}

pub fn write_done<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(DONE_LINE.as_bytes())
}
