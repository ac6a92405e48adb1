//! The mutable display settings of a gopher.
//!
//! `Appearance` is both the state shared between callers and the render thread and the
//! value the command-line driver builds from its flags.

use crate::activity::Activity;
use crate::color::Color;
use std::time::Duration;

/// Default pause between two frames.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Everything the render loop reads when drawing a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// Pause between frames
    pub delay: Duration,
    /// Text written before the gopher
    pub prefix: String,
    /// Text written after the gopher
    pub suffix: String,
    pub activity: Activity,
    pub color: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            prefix: String::new(),
            suffix: String::new(),
            activity: Activity::default(),
            color: Color::default(),
        }
    }
}
