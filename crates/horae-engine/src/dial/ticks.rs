use crate::coords::Vec2;

/// Outer dial radius in normalized coordinates.
pub const DIAL_RADIUS: f32 = 0.48;

/// Outer tick endpoint, as a fraction of [`DIAL_RADIUS`].
pub const TICK_OUTER: f32 = 0.98;

/// Tick class for one of the 60 minute steps around the dial.
///
/// Classification is a pure function of the step index; radius and stroke
/// width are fixed per class.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickKind {
    /// Every 15th step (12 / 3 / 6 / 9 o'clock).
    Quarter,
    /// Every 5th step that is not a quarter.
    FiveMinute,
    /// All remaining steps.
    Minute,
}

impl TickKind {
    /// Classifies a minute step in `0..60`.
    pub fn classify(step: u32) -> TickKind {
        if step % 15 == 0 {
            TickKind::Quarter
        } else if step % 5 == 0 {
            TickKind::FiveMinute
        } else {
            TickKind::Minute
        }
    }

    /// Inner tick endpoint, as a fraction of [`DIAL_RADIUS`].
    pub fn inner_radius(self) -> f32 {
        match self {
            TickKind::Quarter => 0.76,
            TickKind::FiveMinute => 0.83,
            TickKind::Minute => 0.90,
        }
    }

    /// Stroke width in normalized coordinates.
    pub fn stroke_width(self) -> f32 {
        match self {
            TickKind::Quarter => 0.028,
            TickKind::FiveMinute => 0.020,
            TickKind::Minute => 0.012,
        }
    }
}

/// Unit direction from the dial center toward minute step `step`.
///
/// Step 0 points toward the bottom of the 1×1 box (positive y); the
/// rotation transforms applied to the hands use the same orientation, so
/// ticks and hands agree without further mapping.
pub fn tick_direction(step: u32) -> Vec2 {
    let rad = (step as f32 * 6.0).to_radians();
    Vec2::new(rad.sin(), rad.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── classification ────────────────────────────────────────────────────

    #[test]
    fn quarter_steps() {
        for step in [0, 15, 30, 45] {
            assert_eq!(TickKind::classify(step), TickKind::Quarter);
        }
    }

    #[test]
    fn five_minute_steps() {
        for step in [5, 10, 20, 25, 35, 40, 50, 55] {
            assert_eq!(TickKind::classify(step), TickKind::FiveMinute);
        }
    }

    #[test]
    fn minute_steps() {
        assert_eq!(TickKind::classify(1), TickKind::Minute);
        assert_eq!(TickKind::classify(59), TickKind::Minute);
    }

    #[test]
    fn class_population_over_full_dial() {
        let mut quarter = 0;
        let mut five = 0;
        let mut minute = 0;
        for step in 0..60 {
            match TickKind::classify(step) {
                TickKind::Quarter => quarter += 1,
                TickKind::FiveMinute => five += 1,
                TickKind::Minute => minute += 1,
            }
        }
        assert_eq!((quarter, five, minute), (4, 8, 48));
    }

    #[test]
    fn fixed_radius_width_pairs() {
        assert_eq!(
            (TickKind::Quarter.inner_radius(), TickKind::Quarter.stroke_width()),
            (0.76, 0.028)
        );
        assert_eq!(
            (TickKind::FiveMinute.inner_radius(), TickKind::FiveMinute.stroke_width()),
            (0.83, 0.020)
        );
        assert_eq!(
            (TickKind::Minute.inner_radius(), TickKind::Minute.stroke_width()),
            (0.90, 0.012)
        );
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn direction_at_cardinal_steps() {
        let eps = 1e-6;
        let d0 = tick_direction(0);
        assert!((d0.x - 0.0).abs() < eps && (d0.y - 1.0).abs() < eps);
        let d15 = tick_direction(15);
        assert!((d15.x - 1.0).abs() < eps && d15.y.abs() < eps);
        let d30 = tick_direction(30);
        assert!(d30.x.abs() < eps && (d30.y + 1.0).abs() < eps);
    }

    #[test]
    fn directions_are_unit_length() {
        for step in 0..60 {
            let d = tick_direction(step);
            let len = (d.x * d.x + d.y * d.y).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "step {step} has length {len}");
        }
    }
}
