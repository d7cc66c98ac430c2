//! Deferred one-shot tasks.
//!
//! Timers on the page are fire-and-forget: nothing cancels them before the
//! page unloads. [`Scheduler`] lets that logic run against a manual clock in
//! tests and against `gloo-timers` in the browser.

/// Runs a task once after a delay.
pub trait Scheduler {
    fn after(&mut self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// [`Scheduler`] backed by `setTimeout`; timeouts live for the page lifetime.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn after(&mut self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
