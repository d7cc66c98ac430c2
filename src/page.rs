//! Page wiring.
//!
//! Runs once after the document is parsed and attaches every behaviour to
//! the markup present at that moment. Components are independent: a
//! component that finds nothing to bind, or fails to bind, leaves the rest
//! untouched.

use crate::config::UiConfig;
use crate::confirm::WindowPrompter;
use crate::widgets::{Bootstrap, WidgetInitializer};
use crate::{
    account, alerts, clipboard, clock, confirm, currency, modal, password, quick_amount, theme, validator, widgets,
};

/// Attach all page behaviours to the current document.
pub fn mount(config: &UiConfig) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window; page behaviours not mounted");
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; page behaviours not mounted");
        return;
    };
    let prompter = WindowPrompter::new(window);

    let mut initializer = WidgetInitializer::new(Bootstrap);
    let report = initializer.run(widgets::collect(&document));
    log::debug!(
        "widgets: {} constructed, {} skipped, {} failed",
        report.constructed,
        report.skipped,
        report.failed
    );

    modal::bind(&document, config);
    alerts::bind(&document, config);
    currency::bind(&document);
    confirm::bind(&document, &prompter, config);
    password::bind(&document);
    quick_amount::bind(&document);
    clipboard::bind(&document, &prompter, config);
    theme::bind(&document, config);
    validator::bind(&document);
    account::bind(&document);

    match clock::Clock::start(&document, config) {
        Some(clock) => clock.forget(),
        None => log::debug!("no clock elements; clock not started"),
    }
}
