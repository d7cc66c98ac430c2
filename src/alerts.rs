//! Alert auto-dismiss.
//!
//! Every `.alert` without the `alert-permanent` class is closed through the
//! widget adapter after the configured delay. Each alert gets its own timer;
//! there is no ordering between them.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::schedule::Scheduler;
use crate::widgets::WidgetLibrary;

/// Class that exempts an alert from auto-dismiss.
pub const PERMANENT_CLASS: &str = "alert-permanent";

/// Whether a `class` attribute value marks the alert as permanent.
#[must_use]
pub fn is_permanent(class_name: &str) -> bool {
    class_name.split_ascii_whitespace().any(|class| class == PERMANENT_CLASS)
}

/// Schedule closure of every non-permanent alert. Each entry pairs an alert
/// element with its `class` attribute. Returns how many were scheduled.
pub fn schedule_dismissals<L, S>(
    alerts: Vec<(L::Element, String)>,
    library: &L,
    scheduler: &mut S,
    delay_ms: u32,
) -> usize
where
    L: WidgetLibrary + Clone + 'static,
    L::Element: 'static,
    S: Scheduler,
{
    let mut scheduled = 0;
    for (element, class_name) in alerts {
        if is_permanent(&class_name) {
            continue;
        }
        let mut library = library.clone();
        scheduler.after(
            delay_ms,
            Box::new(move || {
                if let Err(err) = library.close_alert(&element) {
                    log::warn!("{err}");
                }
            }),
        );
        scheduled += 1;
    }
    scheduled
}

/// Find the page's alerts and schedule their dismissal.
#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document, config: &crate::config::UiConfig) {
    let alerts = crate::dom::query_all(document, ".alert")
        .into_iter()
        .map(|element| {
            let class_name = element.class_name();
            (element, class_name)
        })
        .collect();
    let mut scheduler = crate::schedule::TimeoutScheduler;
    let count = schedule_dismissals(alerts, &crate::widgets::Bootstrap, &mut scheduler, config.alert_dismiss_ms);
    log::debug!("scheduled {count} alert dismissals");
}
