//! Time sources and hand-angle math.
//!
//! Intended usage:
//! - one reading per update tick, produced fresh ([`TimeOfDay`])
//! - angles recomputed from the reading every time, never accumulated
//! - timezone support is an injected capability ([`TimezoneProvider`]),
//!   not a global presence check

mod angles;
mod source;

pub use angles::{hour_angle, minute_angle, second_angle};
pub use source::{ChronoTzProvider, TimeOfDay, TimezoneProvider};
