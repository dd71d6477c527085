//! Selection-binding adapter.
//!
//! Mirrors the plugin pattern of DOM selection libraries: a registry holds
//! exactly one [`Clock`] per host key, created on first attach and cached,
//! and routes string commands to the cached instance. This layer is glue —
//! the widget itself never depends on it.

use std::collections::HashMap;

use crate::clock::{Clock, ClockOptions};
use crate::host::Host;

/// Registry of clocks keyed by host identifier.
#[derive(Default)]
pub struct ClockBinding {
    clocks: HashMap<String, Clock>,
}

impl ClockBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a clock exists for `key`, constructing one over `host` with
    /// `options` on first attach. Subsequent attaches for the same key keep
    /// the cached instance and ignore the new host and options.
    pub fn attach(&mut self, key: impl Into<String>, host: Box<dyn Host>, options: ClockOptions) {
        self.clocks
            .entry(key.into())
            .or_insert_with(|| Clock::new(host, options));
    }

    /// Dispatches a string command to the clock attached at `key`.
    ///
    /// Recognized commands: `"start"`, `"stop"`, `"changeTimezone"` (with
    /// the timezone identifier in `arg`). Unknown commands and unknown
    /// keys are ignored. Returns `true` when a command was delivered.
    pub fn dispatch(&mut self, key: &str, command: &str, arg: Option<&str>) -> bool {
        let Some(clock) = self.clocks.get_mut(key) else {
            return false;
        };
        match command {
            "start" => clock.start(),
            "stop" => clock.stop(),
            "changeTimezone" => clock.change_timezone(arg),
            other => {
                log::debug!("ignoring unknown clock command {other:?}");
                return false;
            }
        }
        true
    }

    /// Dispatches one command to every key in a selection.
    pub fn dispatch_each(&mut self, keys: &[&str], command: &str, arg: Option<&str>) {
        for key in keys {
            self.dispatch(key, command, arg);
        }
    }

    /// Removes and returns the clock at `key` (dropping it stops its
    /// ticker).
    pub fn detach(&mut self, key: &str) -> Option<Clock> {
        self.clocks.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.clocks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }
}
