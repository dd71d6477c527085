//! Coordinate types for the normalized dial space.
//!
//! The whole face lives in a 1×1 viewBox with the dial center at
//! (0.5, 0.5); pixel scaling happens only on the root element.

mod vec2;

pub use vec2::Vec2;

/// Dial center in normalized coordinates.
pub const CENTER: Vec2 = Vec2::new(0.5, 0.5);
