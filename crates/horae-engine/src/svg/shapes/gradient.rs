use crate::paint::RadialGradient;
use crate::svg::document::fmt_num;
use crate::svg::{Document, NodeId};

impl Document {
    /// Appends a `<radialGradient>` definition under `parent` (a `<defs>`
    /// element in practice) with one `<stop>` per color stop.
    pub fn push_radial_gradient(&mut self, parent: NodeId, gradient: &RadialGradient) -> NodeId {
        debug_assert!(gradient.is_valid(), "degenerate gradient definition");
        let def = self.push(parent, "radialGradient");
        self.set_attr(def, "id", gradient.id);
        self.set_attr(def, "gradientUnits", "objectBoundingBox");
        self.set_attr(def, "cx", fmt_num(gradient.center.x));
        self.set_attr(def, "cy", fmt_num(gradient.center.y));
        self.set_attr(def, "r", fmt_num(gradient.radius));
        for stop in &gradient.stops {
            let s = self.push(def, "stop");
            self.set_attr(s, "offset", fmt_num(stop.offset));
            self.set_attr(s, "stop-color", stop.color.css());
        }
        def
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, ColorStop};

    #[test]
    fn gradient_definition_emits_stops_in_order() {
        let mut doc = Document::svg_root(100.0);
        let defs = doc.push(doc.root(), "defs");
        let g = RadialGradient::new(
            "clock-dial-reflex",
            Vec2::new(0.5, -0.4),
            1.8,
            vec![
                ColorStop::new(0.3, Color::WHITE),
                ColorStop::new(0.6, Color::rgb(240, 240, 240)),
            ],
        );
        let def = doc.push_radial_gradient(defs, &g);
        assert_eq!(doc.attr(def, "id"), Some("clock-dial-reflex"));
        assert_eq!(doc.attr(def, "cy"), Some("-0.4"));
        let stops = doc.children(def);
        assert_eq!(stops.len(), 2);
        assert_eq!(doc.attr(stops[0], "offset"), Some("0.3"));
        assert_eq!(doc.attr(stops[1], "stop-color"), Some("rgba(240, 240, 240, 1)"));
    }
}
