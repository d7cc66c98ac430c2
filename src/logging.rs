//! Console logger setup.
//!
//! Handlers log through the `log` facade; in the browser the records go to
//! the developer console via `console_log`.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

use std::str::FromStr;

/// Resolve a configured level name, falling back to `Info`.
#[must_use]
pub fn parse_level(raw: &str) -> log::Level {
    log::Level::from_str(raw.trim()).unwrap_or(log::Level::Info)
}

/// Install the console logger at the configured level.
pub fn init(raw_level: &str) {
    let level = parse_level(raw_level);
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = console_log::init_with_level(level) {
            log::warn!("console logger already installed: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::set_max_level(level.to_level_filter());
    }
}
