use crate::coords::{CENTER, Vec2};

/// Blade outline parameters for a clock hand.
///
/// `half_width`, `length` and `stub` are fractions of the dial outer
/// radius; `taper` is an absolute offset in normalized coordinates (the
/// distance from the tip at which the blade reaches full width). The
/// outline is anchored at the dial center and points straight up; rotation
/// happens on the enclosing group.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandProfile {
    pub half_width: f32,
    pub length: f32,
    pub stub: f32,
    pub taper: f32,
}

pub const MINUTE_HAND: HandProfile =
    HandProfile { half_width: 0.012, length: 0.94, stub: 0.2, taper: 0.026 };

pub const HOUR_HAND: HandProfile =
    HandProfile { half_width: 0.019, length: 0.7, stub: 0.0, taper: 0.03 };

/// Second hand: a thinner blade that flattens to a narrow tip instead of a
/// point, plus a counterweight ellipse at the stub end.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecondHandProfile {
    pub blade: HandProfile,
    pub tip_half_width: f32,
    pub counterweight_rx: f32,
    pub counterweight_ry: f32,
}

pub const SECOND_HAND: SecondHandProfile = SecondHandProfile {
    blade: HandProfile { half_width: 0.006, length: 0.97, stub: 0.2, taper: 0.4 },
    tip_half_width: 0.0024,
    counterweight_rx: 0.011,
    counterweight_ry: 0.036,
};

impl HandProfile {
    /// Closed hexagonal outline: stub rectangle below the center, tapered
    /// blade above it, closing back at the stub's near corner.
    pub fn outline(&self, outer: f32) -> Vec<Vec2> {
        let stub_y = CENTER.y + outer * self.stub;
        let tip_y = CENTER.y - outer * self.length;
        vec![
            Vec2::new(CENTER.x - self.half_width, stub_y),
            Vec2::new(CENTER.x + self.half_width, stub_y),
            Vec2::new(CENTER.x + self.half_width, tip_y + self.taper),
            Vec2::new(CENTER.x, tip_y),
            Vec2::new(CENTER.x - self.half_width, tip_y + self.taper),
            Vec2::new(CENTER.x - self.half_width, stub_y),
        ]
    }
}

impl SecondHandProfile {
    /// Like [`HandProfile::outline`], but the tip is flattened to
    /// `tip_half_width` on either side of the center line (7 vertices).
    pub fn outline(&self, outer: f32) -> Vec<Vec2> {
        let blade = &self.blade;
        let stub_y = CENTER.y + outer * blade.stub;
        let tip_y = CENTER.y - outer * blade.length;
        vec![
            Vec2::new(CENTER.x - blade.half_width, stub_y),
            Vec2::new(CENTER.x + blade.half_width, stub_y),
            Vec2::new(CENTER.x + blade.half_width, tip_y + blade.taper),
            Vec2::new(CENTER.x + self.tip_half_width, tip_y),
            Vec2::new(CENTER.x - self.tip_half_width, tip_y),
            Vec2::new(CENTER.x - blade.half_width, tip_y + blade.taper),
            Vec2::new(CENTER.x - blade.half_width, stub_y),
        ]
    }

    /// Counterweight center, at the stub end of the blade.
    pub fn counterweight_center(&self, outer: f32) -> Vec2 {
        Vec2::new(CENTER.x, CENTER.y + outer * self.blade.stub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::DIAL_RADIUS;

    // ── plain blades ──────────────────────────────────────────────────────

    #[test]
    fn blade_outline_has_six_vertices_and_closes() {
        let outline = MINUTE_HAND.outline(DIAL_RADIUS);
        assert_eq!(outline.len(), 6);
        assert_eq!(outline.first(), outline.last());
    }

    #[test]
    fn blade_is_symmetric_about_center_line() {
        for profile in [MINUTE_HAND, HOUR_HAND] {
            let outline = profile.outline(DIAL_RADIUS);
            // Vertex pairs (0,1), (2,4) mirror across x = 0.5; the tip sits on it.
            assert_eq!(outline[0].y, outline[1].y);
            assert!((outline[0].x + outline[1].x - 1.0).abs() < 1e-6);
            assert_eq!(outline[2].y, outline[4].y);
            assert!((outline[2].x + outline[4].x - 1.0).abs() < 1e-6);
            assert_eq!(outline[3].x, 0.5);
        }
    }

    #[test]
    fn blade_tip_reaches_profile_length() {
        let outline = HOUR_HAND.outline(DIAL_RADIUS);
        assert!((outline[3].y - (0.5 - DIAL_RADIUS * 0.7)).abs() < 1e-6);
    }

    #[test]
    fn hour_hand_has_no_stub() {
        let outline = HOUR_HAND.outline(DIAL_RADIUS);
        assert_eq!(outline[0].y, 0.5);
    }

    // ── second hand ───────────────────────────────────────────────────────

    #[test]
    fn second_outline_has_seven_vertices_and_flat_tip() {
        let outline = SECOND_HAND.outline(DIAL_RADIUS);
        assert_eq!(outline.len(), 7);
        assert_eq!(outline.first(), outline.last());
        // Flat tip: two vertices at full length, tip_half_width apart.
        assert_eq!(outline[3].y, outline[4].y);
        let width = outline[3].x - outline[4].x;
        assert!((width - 2.0 * SECOND_HAND.tip_half_width).abs() < 1e-6);
    }

    #[test]
    fn counterweight_sits_at_stub_end() {
        let center = SECOND_HAND.counterweight_center(DIAL_RADIUS);
        assert_eq!(center.x, 0.5);
        assert!((center.y - (0.5 + DIAL_RADIUS * 0.2)).abs() < 1e-6);
    }
}
