//! # bank-ui
//!
//! Browser-side page behaviour for the banking web application, compiled to
//! WebAssembly and loaded once per server-rendered page.
//!
//! The server owns the markup; this crate only attaches behaviour to it:
//! Bootstrap widgets, alert auto-dismiss, amount formatting and validation,
//! confirmation prompts, password visibility, the live clock, clipboard and
//! quick-amount buttons, the theme switch, and the `apiRequest` helper other
//! page scripts use to talk to the backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`api`] | JSON request helper over a pluggable [`api::Transport`] |
//! | [`config`] | Page-level settings (delays, labels, storage key) |
//! | [`widgets`] | Widget adapter trait and one-shot initializer |
//! | [`registry`] | Explicit "already bound" bookkeeping per element |
//! | [`schedule`] | One-shot deferred tasks |
//! | [`alerts`] | Alert auto-dismiss selection and scheduling |
//! | [`modal`] | Modal focus and submit-button busy state |
//! | [`currency`] | Two-decimal normalisation and Rand display format |
//! | [`validator`] | Numeric maximum check with clamping |
//! | [`account`] | Account-number input sanitising |
//! | [`confirm`] | Confirmation guard for destructive actions |
//! | [`password`] | Password visibility toggle |
//! | [`clock`] | Live clock formatting and timer handle |
//! | [`quick_amount`] | Preset amount buttons |
//! | [`clipboard`] | Copy-to-clipboard with transient feedback |
//! | [`theme`] | Light/dark preference and persistence |
//! | [`logging`] | Console logger setup |
//!
//! Everything touching the browser is compiled only with the `hydrate`
//! feature. Without it the crate builds natively and the pure logic is
//! unit-tested with fake adapters.

pub mod account;
pub mod alerts;
pub mod api;
pub mod clipboard;
pub mod clock;
pub mod config;
pub mod confirm;
pub mod currency;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod logging;
pub mod modal;
#[cfg(feature = "hydrate")]
pub mod page;
pub mod password;
pub mod quick_amount;
pub mod registry;
pub mod schedule;
pub mod theme;
pub mod validator;
pub mod widgets;

/// WASM entry point: install logging and wire every behaviour onto the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let (config, load_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (config::UiConfig::default(), Some(err)),
    };
    logging::init(&config.log_level);
    if let Some(err) = load_error {
        log::warn!("using default page config: {err}");
    }
    page::mount(&config);
}
