//! Horae engine crate.
//!
//! This crate owns the dial geometry, the SVG document model, and the time
//! sources used by the widget layer.

pub mod coords;
pub mod dial;
pub mod logging;
pub mod paint;
pub mod svg;
pub mod time;
