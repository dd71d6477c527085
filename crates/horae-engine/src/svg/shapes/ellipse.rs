use crate::coords::Vec2;
use crate::paint::Paint;
use crate::svg::document::fmt_num;
use crate::svg::{Document, NodeId};

impl Document {
    /// Appends a filled ellipse with no stroke.
    pub fn push_ellipse(
        &mut self,
        parent: NodeId,
        center: Vec2,
        rx: f32,
        ry: f32,
        fill: Paint,
    ) -> NodeId {
        let ellipse = self.push(parent, "ellipse");
        self.set_attr(ellipse, "fill", fill.to_attr());
        self.set_attr(ellipse, "stroke", "none");
        self.set_attr(ellipse, "cx", fmt_num(center.x));
        self.set_attr(ellipse, "cy", fmt_num(center.y));
        self.set_attr(ellipse, "rx", fmt_num(rx));
        self.set_attr(ellipse, "ry", fmt_num(ry));
        ellipse
    }
}
