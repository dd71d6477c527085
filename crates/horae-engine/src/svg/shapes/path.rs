use std::fmt::Write as _;

use crate::coords::Vec2;
use crate::paint::Paint;
use crate::svg::{Document, NodeId};

impl Document {
    /// Appends a filled polygon as a `<path>` outline.
    ///
    /// Path data is `M x,y` for the first point and `L x,y` for the rest;
    /// fills treat the outline as closed, so no explicit `Z` is emitted.
    pub fn push_polygon(&mut self, parent: NodeId, points: &[Vec2], fill: Paint) -> NodeId {
        let mut data = String::new();
        for (i, p) in points.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(data, "{}{},{}", cmd, p.x, p.y);
        }
        let path = self.push(parent, "path");
        self.set_attr(path, "fill", fill.to_attr());
        self.set_attr(path, "stroke", "none");
        self.set_attr(path, "d", data);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn polygon_path_data_moves_then_lines() {
        let mut doc = Document::svg_root(100.0);
        let root = doc.root();
        let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)];
        let path = doc.push_polygon(root, &points, Paint::Solid(Color::BLACK));
        assert_eq!(doc.attr(path, "d"), Some("M0,0 L1,0 L0.5,1"));
        assert_eq!(doc.attr(path, "stroke"), Some("none"));
    }

    #[test]
    fn vertex_count_matches_segment_count() {
        let mut doc = Document::svg_root(100.0);
        let root = doc.root();
        let points: Vec<Vec2> = (0..6).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let path = doc.push_polygon(root, &points, Paint::Solid(Color::BLACK));
        let d = doc.attr(path, "d").unwrap();
        assert_eq!(d.matches('L').count(), 5);
        assert_eq!(d.matches('M').count(), 1);
    }
}
