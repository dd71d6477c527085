use std::fmt::Write as _;

/// XML namespace stamped on every root element.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Handle to an element inside a [`Document`].
///
/// Handles are only meaningful for the document that produced them; they
/// stay valid for the document's whole lifetime (elements are never
/// removed, only appended or re-attributed).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<NodeId>,
}

/// Arena-backed SVG element tree.
///
/// Append-only: push helpers add children under a parent handle, and
/// [`set_attr`](Self::set_attr) rewrites attributes in place. Serialization
/// walks the tree from the root in insertion order, so markup order equals
/// build order.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    /// Creates a document whose root is an `<svg>` element sized to
    /// `size` pixels over the normalized 1×1 viewBox.
    pub fn svg_root(size: f32) -> Self {
        let mut doc = Self {
            nodes: vec![Element { tag: "svg", attrs: Vec::new(), children: Vec::new() }],
        };
        let root = doc.root();
        doc.set_attr(root, "width", fmt_num(size));
        doc.set_attr(root, "height", fmt_num(size));
        doc.set_attr(root, "viewBox", "0 0 1 1");
        doc.set_attr(root, "xmlns", SVG_NS);
        doc.set_attr(root, "version", "1.1");
        doc
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a child element under `parent` and returns its handle.
    pub fn push(&mut self, parent: NodeId, tag: &'static str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element { tag, attrs: Vec::new(), children: Vec::new() });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends a `<g>` element carrying a `class` attribute.
    pub fn push_group(&mut self, parent: NodeId, class: &str) -> NodeId {
        let g = self.push(parent, "g");
        self.set_attr(g, "class", class);
        g
    }

    /// Sets (or replaces) an attribute on `node`.
    pub fn set_attr(&mut self, node: NodeId, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        let attrs = &mut self.nodes[node.0].attrs;
        match attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => attrs.push((name, value)),
        }
    }

    /// Returns the attribute value of `node`, if set.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn tag(&self, node: NodeId) -> &'static str {
        self.nodes[node.0].tag
    }

    #[inline]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Handles of every element in the document, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Serializes the tree to markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_element(self.root(), 0, &mut out);
        out
    }

    fn write_element(&self, node: NodeId, depth: usize, out: &mut String) {
        let el = &self.nodes[node.0];
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('<');
        out.push_str(el.tag);
        for (name, value) in &el.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        if el.children.is_empty() {
            out.push_str(" />\n");
            return;
        }
        out.push_str(">\n");
        for &child in &el.children {
            self.write_element(child, depth + 1, out);
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = writeln!(out, "</{}>", el.tag);
    }
}

/// Shortest round-trip decimal form, shared by all attribute emitters.
pub(crate) fn fmt_num(v: f32) -> String {
    format!("{v}")
}

fn escape_attr(value: &str) -> String {
    if !value.contains(['&', '<', '>', '"']) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
