//! Confirmation guard for destructive actions.
//!
//! Clicking an element flagged `data-confirm` opens a blocking yes/no
//! prompt. Declining cancels the click (no default action, no bubbling);
//! accepting lets it through untouched.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Blocking browser dialogs.
pub trait Prompter {
    /// Ask a yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str);
}

/// What to do with the intercepted click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickVerdict {
    Proceed,
    Cancel,
}

/// The prompt text: the element's own message, or `default` when the
/// attribute is absent or blank.
#[must_use]
pub fn prompt_message<'a>(attribute: Option<&'a str>, default: &'a str) -> &'a str {
    match attribute {
        Some(message) if !message.trim().is_empty() => message,
        _ => default,
    }
}

/// Ask the user and decide the click's fate.
pub fn guard<P: Prompter>(prompter: &P, attribute: Option<&str>, default: &str) -> ClickVerdict {
    if prompter.confirm(prompt_message(attribute, default)) {
        ClickVerdict::Proceed
    } else {
        ClickVerdict::Cancel
    }
}

/// [`Prompter`] backed by `window.confirm` / `window.alert`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct WindowPrompter {
    window: web_sys::Window,
}

#[cfg(feature = "hydrate")]
impl WindowPrompter {
    #[must_use]
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

#[cfg(feature = "hydrate")]
impl Prompter for WindowPrompter {
    fn confirm(&self, message: &str) -> bool {
        match self.window.confirm_with_message(message) {
            Ok(accepted) => accepted,
            Err(err) => {
                log::warn!("confirm dialog failed: {}", crate::dom::describe(&err));
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert dialog failed: {}", crate::dom::describe(&err));
        }
    }
}

/// Guard clicks on every `[data-confirm]` element.
#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document, prompter: &WindowPrompter, config: &crate::config::UiConfig) {
    use crate::dom;

    for element in dom::query_all(document, "[data-confirm]") {
        let prompter = prompter.clone();
        let default = config.confirm_message.clone();
        let source = element.clone();
        dom::on_cancelable(&element, "click", move |event| {
            let attribute = source.get_attribute("data-confirm");
            if guard(&prompter, attribute.as_deref(), &default) == ClickVerdict::Cancel {
                event.prevent_default();
                event.stop_propagation();
            }
        });
    }
}
