//! Shape push helpers.
//!
//! Extending the document:
//! - add a new shape module here
//! - implement a push helper on `Document` inside that file
//!
//! Helpers take geometry in normalized coordinates and paints from
//! `crate::paint`; each appends one element and returns its handle. The
//! modules only extend `Document`, so there is nothing to re-export.

mod circle;
mod ellipse;
mod gradient;
mod line;
mod path;
