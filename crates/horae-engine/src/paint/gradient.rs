use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `offset` is expected in [0, 1] in typical usage, but is not strictly
/// enforced; the SVG consumer clamps out-of-range stops itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Radial gradient definition in object-bounding-box space.
///
/// Semantics:
/// - `center` and `radius` are fractions of the bounding box of the filled
///   shape (`gradientUnits="objectBoundingBox"`), so the center may sit
///   outside [0, 1] — the dial reflex places it above the disc.
/// - referenced from fills by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub id: &'static str,
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(id: &'static str, center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self { id, center, radius, stops }
    }

    /// Returns true when the definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.offset.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.3, Color::WHITE),
            ColorStop::new(0.6, Color::rgb(240, 240, 240)),
        ]
    }

    #[test]
    fn valid_definition() {
        let g = RadialGradient::new("reflex", Vec2::new(0.5, -0.4), 1.8, stops());
        assert!(g.is_valid());
    }

    #[test]
    fn rejects_single_stop() {
        let g = RadialGradient::new("reflex", Vec2::new(0.5, -0.4), 1.8, stops()[..1].to_vec());
        assert!(!g.is_valid());
    }

    #[test]
    fn rejects_degenerate_radius() {
        let g = RadialGradient::new("reflex", Vec2::new(0.5, -0.4), 0.0, stops());
        assert!(!g.is_valid());
    }
}
