//! Paint model shared between the geometry builder and the SVG writer.
//!
//! Scope:
//! - color representation (straight sRGB, serialized as CSS `rgba(..)`)
//! - paint sources (solid color, gradient reference)
//! - gradient definitions (radial, for the dial reflex)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, RadialGradient};

/// Paint source for filling geometry.
///
/// Gradients are defined once under `<defs>` and referenced by id, so a
/// fill is either a literal color or a reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Reference to a gradient definition by its `id`.
    GradientRef(&'static str),
}

impl Paint {
    /// Attribute value for `fill` / `stroke`.
    pub fn to_attr(&self) -> String {
        match self {
            Paint::Solid(c) => c.css(),
            Paint::GradientRef(id) => format!("url(#{id})"),
        }
    }
}
