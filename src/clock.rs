//! Live clock.
//!
//! Every `.current-time` element shows the current time in the bank's
//! fixed timezone (SAST, UTC+02:00, no daylight saving), refreshed once per
//! configured interval. When the page has no such element no timer is
//! created at all.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{DateTime, FixedOffset, Utc};

use crate::config::UiConfig;

/// Marker class of elements that display the clock.
pub const CLOCK_SELECTOR: &str = ".current-time";

/// Timezone and suffix of the displayed reading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockFormat {
    offset: FixedOffset,
    suffix: String,
}

impl ClockFormat {
    /// Build from config. Returns `None` if the configured offset is out
    /// of range (more than a day either way).
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Option<Self> {
        let offset = FixedOffset::east_opt(config.clock_utc_offset_minutes.checked_mul(60)?)?;
        Some(Self { offset, suffix: config.clock_suffix.clone() })
    }

    /// Render `epoch_ms` (milliseconds since the Unix epoch) as `HH:MM:SS`
    /// plus the suffix.
    #[must_use]
    pub fn render(&self, epoch_ms: i64) -> Option<String> {
        let utc = DateTime::<Utc>::from_timestamp_millis(epoch_ms)?;
        Some(format!("{}{}", utc.with_timezone(&self.offset).format("%H:%M:%S"), self.suffix))
    }
}

/// A clock only runs when something displays it.
#[must_use]
pub fn should_start(target_count: usize) -> bool {
    target_count > 0
}

/// Handle to the running clock interval. Dropping it stops the clock.
#[cfg(feature = "hydrate")]
pub struct Clock {
    interval: gloo_timers::callback::Interval,
}

#[cfg(feature = "hydrate")]
impl Clock {
    /// Start updating every clock element in `document`, with an immediate
    /// first update. Returns `None` without creating a timer if there are
    /// no clock elements.
    #[must_use]
    pub fn start(document: &web_sys::Document, config: &UiConfig) -> Option<Self> {
        let targets = crate::dom::query_all(document, CLOCK_SELECTOR);
        if !should_start(targets.len()) {
            return None;
        }
        let Some(format) = ClockFormat::from_config(config) else {
            log::warn!("clock offset {} minutes is out of range", config.clock_utc_offset_minutes);
            return None;
        };
        let update = move || {
            // `Date.now()` is integral milliseconds well inside i64 range.
            #[allow(clippy::cast_possible_truncation)]
            let now = js_sys::Date::now() as i64;
            if let Some(reading) = format.render(now) {
                for target in &targets {
                    target.set_text_content(Some(&reading));
                }
            }
        };
        update();
        let interval = gloo_timers::callback::Interval::new(config.clock_interval_ms, update);
        Some(Self { interval })
    }

    /// Keep the clock running for the rest of the page's life.
    pub fn forget(self) {
        self.interval.forget();
    }
}
