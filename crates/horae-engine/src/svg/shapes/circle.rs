use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::svg::document::fmt_num;
use crate::svg::{Document, NodeId};

impl Document {
    /// Appends a filled circle with no stroke.
    pub fn push_circle(&mut self, parent: NodeId, center: Vec2, radius: f32, fill: Paint) -> NodeId {
        let circle = self.push(parent, "circle");
        self.set_attr(circle, "cx", fmt_num(center.x));
        self.set_attr(circle, "cy", fmt_num(center.y));
        self.set_attr(circle, "r", fmt_num(radius));
        self.set_attr(circle, "fill", fill.to_attr());
        self.set_attr(circle, "stroke", "none");
        circle
    }

    /// Appends a filled circle with a stroked outline.
    pub fn push_stroked_circle(
        &mut self,
        parent: NodeId,
        center: Vec2,
        radius: f32,
        fill: Paint,
        stroke: Color,
        stroke_width: f32,
    ) -> NodeId {
        let circle = self.push_circle(parent, center, radius, fill);
        self.set_attr(circle, "stroke", stroke.css());
        self.set_attr(circle, "stroke-width", fmt_num(stroke_width));
        circle
    }
}
