//! Page-level settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server may embed a JSON block
//! `<script type="application/json" id="bank-ui-config">` to override any of
//! these values. Every field has a default, so a partial block (or no block
//! at all) is valid.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Element id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "bank-ui-config";

/// Error returned by [`UiConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON for [`UiConfig`].
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Timings, labels and keys used by the page behaviours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before non-permanent alerts are closed.
    pub alert_dismiss_ms: u32,
    /// Live clock refresh period.
    pub clock_interval_ms: u32,
    /// How long the "copied" label stays on a clipboard button.
    pub copy_feedback_ms: u32,
    /// Local-storage key holding the theme preference.
    pub theme_storage_key: String,
    /// Prompt shown when a `data-confirm` element carries no message.
    pub confirm_message: String,
    /// Label shown on a modal submit button while the form posts.
    pub busy_label: String,
    /// Label shown on a clipboard button after a successful copy.
    pub copy_feedback_label: String,
    /// Alert text shown when the clipboard write fails.
    pub copy_failed_message: String,
    /// Fixed offset of the displayed clock from UTC, in minutes.
    pub clock_utc_offset_minutes: i32,
    /// Text appended to the clock reading.
    pub clock_suffix: String,
    /// Maximum console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5000,
            clock_interval_ms: 1000,
            copy_feedback_ms: 2000,
            theme_storage_key: "theme".to_owned(),
            confirm_message: "Are you sure you want to proceed?".to_owned(),
            busy_label: "Processing...".to_owned(),
            copy_feedback_label: "Copied!".to_owned(),
            copy_failed_message: "Failed to copy to clipboard".to_owned(),
            clock_utc_offset_minutes: 120,
            clock_suffix: " SAST".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a config block, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object matching
    /// the field types.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Read the inline config block from the current document.
///
/// A missing block yields the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the block exists but does not parse.
pub fn load() -> Result<UiConfig, ConfigError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(UiConfig::default());
        };
        let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(UiConfig::default());
        };
        UiConfig::from_json(&block.text_content().unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(UiConfig::default())
    }
}
