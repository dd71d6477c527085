use chrono::{DateTime, Timelike};

/// Immutable time-of-day reading.
///
/// `hours` carries the fractional minute contribution
/// (`hour + minutes / 60`) so the hour hand sweeps smoothly instead of
/// jumping on the hour; `minutes` and `seconds` stay integral.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeOfDay {
    /// Hours in [0, 24), including the minute fraction.
    pub hours: f32,
    /// Minutes in [0, 60).
    pub minutes: u32,
    /// Seconds in [0, 60).
    pub seconds: u32,
}

impl TimeOfDay {
    #[inline]
    pub const fn new(hours: f32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Reading from the local system clock.
    ///
    /// Uses the wall-clock local hour as-is, with no timezone conversion.
    pub fn now_local() -> Self {
        Self::from_datetime(&chrono::Local::now())
    }

    fn from_datetime<Tz: chrono::TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            hours: now.hour() as f32 + now.minute() as f32 / 60.0,
            minutes: now.minute(),
            seconds: now.second(),
        }
    }
}

/// Optional collaborator: "current time in a named timezone".
///
/// Supplied (or omitted) by the embedder at construction; when absent,
/// timezone requests silently degrade to local time. Implementations
/// return `None` for identifiers they do not recognize.
pub trait TimezoneProvider: Send + Sync {
    fn time_in(&self, timezone: &str) -> Option<TimeOfDay>;
}

/// [`TimezoneProvider`] backed by the IANA database via `chrono-tz`.
#[derive(Debug, Default, Copy, Clone)]
pub struct ChronoTzProvider;

impl TimezoneProvider for ChronoTzProvider {
    fn time_in(&self, timezone: &str) -> Option<TimeOfDay> {
        let tz: chrono_tz::Tz = timezone.parse().ok()?;
        Some(TimeOfDay::from_datetime(&chrono::Local::now().with_timezone(&tz)))
    }
}
