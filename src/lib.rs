//! # gopher - Little Gophers for the Command Line
//!
//! An animated gopher that works as a loading spinner. A [`Gopher`] draws itself on a
//! background thread, one frame per delay, and its activity, color, prefix, suffix and
//! delay can all be changed while it runs.
//!
//! ```no_run
//! use gopher::{Activity, Color, Gopher};
//! use std::time::Duration;
//!
//! let gopher = Gopher::new();
//! gopher.start();
//! std::thread::sleep(Duration::from_secs(2));
//! gopher.set_activity(Activity::Loving);
//! gopher.set_color(Color::Magenta);
//! std::thread::sleep(Duration::from_secs(2));
//! gopher.stop();
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`activity`] and [`color`] - The closed sets of glyph themes and SGR colors
//! - [`appearance`] - The mutable display settings
//! - [`frame`] - Escape-sequence rendering of single frames
//! - [`indicator`] - The gopher itself: shared state, lifecycle and render loop
//! - [`app`] - Orchestration used by the command-line driver

// Core modules
pub mod error;

// Display data
pub mod activity;
pub mod appearance;
pub mod color;
pub mod frame;

// Core components
pub mod app;
pub mod indicator;

// Re-export commonly used types for convenience
pub use error::{GopherError, Result};

// Public API surface for external usage
pub use activity::Activity;
pub use appearance::Appearance;
pub use color::Color;
pub use indicator::Gopher;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
