use crate::coords::{CENTER, Vec2};
use crate::paint::{Color, ColorStop, Paint, RadialGradient};
use crate::svg::{Document, NodeId};

use super::hands::{HOUR_HAND, MINUTE_HAND, SECOND_HAND};
use super::ticks::{DIAL_RADIUS, TICK_OUTER, TickKind, tick_direction};

/// Pixel size used when the caller provides none (or an unusable value).
pub const DEFAULT_SIZE: f32 = 400.0;

/// Gradient id for the dial reflex; also the fill reference on the disc.
const DIAL_REFLEX_ID: &str = "clock-dial-reflex";

/// One of the three hands, used to address a hand group on a built face.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

/// A fully built clock face.
///
/// Construction emits the whole document — dial, ticks, hands — exactly
/// once; afterwards only the rotation transforms on the three hand groups
/// change. Markup order matters for paint order: the hour and minute hands
/// sit under the accent dot, the second hand above it.
#[derive(Debug, Clone)]
pub struct Face {
    doc: Document,
    hour: NodeId,
    minute: NodeId,
    second: NodeId,
}

impl Face {
    /// Builds the face at `size` pixels.
    ///
    /// Non-finite or non-positive sizes fall back to [`DEFAULT_SIZE`]
    /// rather than failing.
    pub fn build(size: f32) -> Face {
        let size = if size.is_finite() && size > 0.0 {
            size
        } else {
            log::warn!("unusable face size {size}, falling back to {DEFAULT_SIZE}");
            DEFAULT_SIZE
        };

        let mut doc = Document::svg_root(size);
        let root = doc.root();

        let defs = doc.push(root, "defs");
        doc.push_radial_gradient(defs, &dial_reflex());

        doc.push_stroked_circle(
            root,
            CENTER,
            DIAL_RADIUS,
            Paint::GradientRef(DIAL_REFLEX_ID),
            Color::rgb(200, 200, 200),
            0.006,
        );
        doc.push_circle(root, CENTER, 0.028, Paint::Solid(Color::BLACK));

        let dial = doc.push_group(root, "clock-dial");
        for step in 0..60 {
            let kind = TickKind::classify(step);
            let dir = tick_direction(step);
            let outer = CENTER + dir * (DIAL_RADIUS * TICK_OUTER);
            let inner = CENTER + dir * (DIAL_RADIUS * kind.inner_radius());
            doc.push_line(dial, outer, inner, Color::BLACK, kind.stroke_width());
        }

        let minute = doc.push_group(root, "clock-hand-minute");
        doc.push_polygon(minute, &MINUTE_HAND.outline(DIAL_RADIUS), Paint::Solid(Color::BLACK));

        let hour = doc.push_group(root, "clock-hand-hour");
        doc.push_polygon(hour, &HOUR_HAND.outline(DIAL_RADIUS), Paint::Solid(Color::BLACK));

        doc.push_circle(root, CENTER, 0.018, Paint::Solid(Color::RED));

        let second = doc.push_group(root, "clock-hand-second");
        doc.push_polygon(second, &SECOND_HAND.outline(DIAL_RADIUS), Paint::Solid(Color::RED));
        let weight = SECOND_HAND.counterweight_center(DIAL_RADIUS);
        doc.push_ellipse(
            second,
            weight,
            SECOND_HAND.counterweight_rx,
            SECOND_HAND.counterweight_ry,
            Paint::Solid(Color::RED),
        );

        let mut face = Face { doc, hour, minute, second };
        for hand in [Hand::Hour, Hand::Minute, Hand::Second] {
            face.rotate_hand(hand, 0.0);
        }
        face
    }

    /// Sets a hand group's rotation, in degrees clockwise about the dial
    /// center.
    pub fn rotate_hand(&mut self, hand: Hand, angle_deg: f32) {
        let group = self.hand_group(hand);
        self.doc
            .set_attr(group, "transform", format!("rotate({angle_deg},0.5,0.5)"));
    }

    #[inline]
    pub fn hand_group(&self, hand: Hand) -> NodeId {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }

    #[inline]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Serializes the current face state to markup.
    pub fn to_markup(&self) -> String {
        self.doc.to_markup()
    }
}

fn dial_reflex() -> RadialGradient {
    RadialGradient::new(
        DIAL_REFLEX_ID,
        Vec2::new(0.5, -0.4),
        1.8,
        vec![
            ColorStop::new(0.3, Color::WHITE),
            ColorStop::new(0.6, Color::rgb(240, 240, 240)),
        ],
    )
}
