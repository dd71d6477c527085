use std::sync::{Arc, Mutex, MutexGuard, Weak};

use horae_engine::dial::{DEFAULT_SIZE, Face, Hand};
use horae_engine::time::{self, TimeOfDay, TimezoneProvider};

use crate::host::Host;
use crate::ticker::{TICK_PERIOD, Ticker};

// ── options ───────────────────────────────────────────────────────────────

/// Construction options for [`Clock`].
///
/// All fields have usable defaults: 400 px, local time, no timezone
/// capability.
#[derive(Clone, Default)]
pub struct ClockOptions {
    size: Option<f32>,
    timezone: Option<String>,
    provider: Option<Arc<dyn TimezoneProvider>>,
}

impl ClockOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Face size in pixels. Unusable values fall back to the default.
    pub fn size(mut self, px: f32) -> Self {
        self.size = Some(px);
        self
    }

    /// Timezone to display. Takes effect only when a provider is present.
    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    /// Supplies the timezone capability.
    pub fn timezone_provider(mut self, provider: Arc<dyn TimezoneProvider>) -> Self {
        self.provider = Some(provider);
        self
    }
}

// ── core state ────────────────────────────────────────────────────────────

/// Active `now()` strategy.
enum Strategy {
    Local,
    Zoned(String),
}

/// State shared between the public handle and the ticker thread.
struct ClockCore {
    host: Box<dyn Host>,
    face: Face,
    strategy: Strategy,
    provider: Option<Arc<dyn TimezoneProvider>>,
    initialized: bool,
}

impl ClockCore {
    fn now(&self) -> TimeOfDay {
        match &self.strategy {
            Strategy::Local => TimeOfDay::now_local(),
            Strategy::Zoned(tz) => self
                .provider
                .as_ref()
                .and_then(|p| p.time_in(tz))
                .unwrap_or_else(TimeOfDay::now_local),
        }
    }

    /// One update: fresh reading, three angles, one render into the host.
    fn update(&mut self) {
        let now = self.now();
        self.face.rotate_hand(Hand::Second, time::second_angle(&now));
        self.face.rotate_hand(Hand::Minute, time::minute_angle(&now));
        self.face.rotate_hand(Hand::Hour, time::hour_angle(&now));
        self.host.replace_markup(&self.face.to_markup());
    }

    fn select_timezone(&mut self, timezone: Option<&str>) {
        self.strategy = match timezone {
            Some(tz) if !tz.is_empty() && self.provider.is_some() => {
                Strategy::Zoned(tz.to_owned())
            }
            Some(tz) if !tz.is_empty() => {
                log::debug!("no timezone provider, showing local time instead of {tz}");
                Strategy::Local
            }
            _ => Strategy::Local,
        };
        if self.initialized {
            self.update();
        }
    }
}

// ── widget ────────────────────────────────────────────────────────────────

/// Analog clock widget.
///
/// Construction builds the face geometry exactly once, renders it into the
/// host, and applies the initial hand angles. [`start`](Self::start) then
/// re-renders once per second until [`stop`](Self::stop); both are
/// idempotent and may be toggled any number of times. Dropping the widget
/// stops the ticker.
pub struct Clock {
    core: Arc<Mutex<ClockCore>>,
    ticker: Option<Ticker>,
}

impl Clock {
    /// Builds the face into `host` and applies the configured timezone
    /// (which triggers the first timed render).
    pub fn new(host: Box<dyn Host>, options: ClockOptions) -> Self {
        let mut core = ClockCore {
            host,
            face: Face::build(options.size.unwrap_or(DEFAULT_SIZE)),
            strategy: Strategy::Local,
            provider: options.provider,
            initialized: false,
        };
        core.host.replace_markup(&core.face.to_markup());
        core.initialized = true;
        core.select_timezone(options.timezone.as_deref());

        Self { core: Arc::new(Mutex::new(core)), ticker: None }
    }

    /// Begins the once-per-second update loop. No-op while running.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        let core = Arc::downgrade(&self.core);
        self.ticker = Some(Ticker::spawn(TICK_PERIOD, move || tick(&core)));
        log::debug!("clock started");
    }

    /// Cancels the update loop. No-op when not running.
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            log::debug!("clock stopped");
        }
    }

    /// True while the update loop is active.
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Switches the `now()` strategy.
    ///
    /// A non-empty identifier selects the timezone strategy when a
    /// provider is available; anything else (including `None`) reverts to
    /// local time. Either way the face re-renders immediately.
    pub fn change_timezone(&mut self, timezone: Option<&str>) {
        self.lock().select_timezone(timezone);
    }

    /// The most recently rendered markup.
    pub fn markup(&self) -> String {
        self.lock().face.to_markup()
    }

    fn lock(&self) -> MutexGuard<'_, ClockCore> {
        self.core.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Ticker callback: keep ticking only while the widget is alive.
fn tick(core: &Weak<Mutex<ClockCore>>) -> bool {
    match core.upgrade() {
        Some(core) => {
            core.lock().unwrap_or_else(|e| e.into_inner()).update();
            true
        }
        None => false,
    }
}
