use crate::coords::Vec2;
use crate::paint::Color;
use crate::svg::document::fmt_num;
use crate::svg::{Document, NodeId};

impl Document {
    /// Appends a stroked line segment from `from` to `to`.
    pub fn push_line(
        &mut self,
        parent: NodeId,
        from: Vec2,
        to: Vec2,
        stroke: Color,
        width: f32,
    ) -> NodeId {
        let line = self.push(parent, "line");
        self.set_attr(line, "x1", fmt_num(from.x));
        self.set_attr(line, "y1", fmt_num(from.y));
        self.set_attr(line, "x2", fmt_num(to.x));
        self.set_attr(line, "y2", fmt_num(to.y));
        self.set_attr(line, "stroke-width", fmt_num(width));
        self.set_attr(line, "stroke", stroke.css());
        line
    }
}
