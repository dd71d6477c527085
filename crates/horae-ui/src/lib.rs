//! Horae UI — the retained clock widget on top of `horae-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use horae_ui::{Clock, ClockOptions, MemoryHost};
//!
//! let host = MemoryHost::new();
//! let mut clock = Clock::new(
//!     Box::new(host.clone()),
//!     ClockOptions::new().size(400.0),
//! );
//! clock.start();                       // re-renders once per second
//! // host.markup() now tracks the live face.
//! clock.stop();
//! ```
//!
//! Timezone display needs the provider capability to be supplied; without
//! it, timezone requests degrade to local time:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use horae_engine::time::ChronoTzProvider;
//!
//! let mut clock = Clock::new(
//!     Box::new(host.clone()),
//!     ClockOptions::new()
//!         .timezone("Asia/Tokyo")
//!         .timezone_provider(Arc::new(ChronoTzProvider)),
//! );
//! ```

pub mod bind;
pub mod clock;
pub mod host;

mod ticker;

pub use clock::{Clock, ClockOptions};
pub use host::{Host, MemoryHost};
