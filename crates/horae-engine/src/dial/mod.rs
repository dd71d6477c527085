//! Dial geometry.
//!
//! Responsibilities:
//! - tick classification and placement (`ticks`)
//! - hand outline construction (`hands`)
//! - full face assembly with addressable hand groups (`face`)
//!
//! All geometry is computed once per face; per-second updates only rewrite
//! the rotation transform on the hand groups.

mod face;
mod hands;
mod ticks;

pub use face::{DEFAULT_SIZE, Face, Hand};
pub use hands::{HOUR_HAND, HandProfile, MINUTE_HAND, SECOND_HAND, SecondHandProfile};
pub use ticks::{DIAL_RADIUS, TICK_OUTER, TickKind, tick_direction};
