//! SVG document model.
//!
//! Responsibilities:
//! - store the element tree behind stable handles so groups stay
//!   addressable after the build (hand rotation mutates attributes only)
//! - keep shape-specific push helpers isolated per shape file under
//!   `svg::shapes`
//! - serialize the tree to markup

mod document;

pub mod shapes;

pub use document::{Document, NodeId, SVG_NS};
