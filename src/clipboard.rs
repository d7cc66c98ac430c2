//! Copy-to-clipboard buttons.
//!
//! A `.copy-to-clipboard` button writes its `data-text` to the system
//! clipboard. On success its label briefly changes to the configured
//! feedback and then reverts; on failure the error is logged and the user
//! gets a blocking alert. There is no retry.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Markup shown on a button after a successful copy.
#[must_use]
pub fn feedback_html(label: &str) -> String {
    format!("<i class=\"bi bi-check2\"></i> {label}")
}

/// Identifies one `show`; only the latest one may revert the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackToken(u64);

/// Remembers a button's original label while feedback is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackLabel {
    original: Option<String>,
    generation: u64,
}

impl FeedbackLabel {
    /// Start (or extend) feedback. `current` is the label on screen; it is
    /// only remembered if feedback is not already showing, so a second
    /// click never captures the feedback text as the "original". Each call
    /// supersedes the tokens handed out before it.
    pub fn show(&mut self, current: &str) -> FeedbackToken {
        if self.original.is_none() {
            self.original = Some(current.to_owned());
        }
        self.generation = self.generation.wrapping_add(1);
        FeedbackToken(self.generation)
    }

    /// End feedback, yielding the label to restore. Returns `None` if
    /// `token` was superseded by a later click or feedback was already
    /// reverted.
    pub fn revert(&mut self, token: FeedbackToken) -> Option<String> {
        if token.0 != self.generation {
            return None;
        }
        self.original.take()
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.original.is_some()
    }
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document, prompter: &crate::confirm::WindowPrompter, config: &crate::config::UiConfig) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::Element;

    use crate::confirm::Prompter;
    use crate::dom;
    use crate::schedule::{Scheduler, TimeoutScheduler};

    let Some(window) = web_sys::window() else {
        return;
    };
    for button in dom::query_all(document, ".copy-to-clipboard") {
        let label = Rc::new(RefCell::new(FeedbackLabel::default()));
        let window = window.clone();
        let prompter = prompter.clone();
        let source: Element = button.clone();
        let feedback = feedback_html(&config.copy_feedback_label);
        let failed_message = config.copy_failed_message.clone();
        let revert_ms = config.copy_feedback_ms;
        dom::on(&button, "click", move |_| {
            let text = source.get_attribute("data-text").unwrap_or_default();
            let write = window.navigator().clipboard().write_text(&text);
            let label = Rc::clone(&label);
            let source = source.clone();
            let prompter = prompter.clone();
            let feedback = feedback.clone();
            let failed_message = failed_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(write).await {
                    log::error!("clipboard write failed: {}", dom::describe(&err));
                    prompter.alert(&failed_message);
                    return;
                }
                let token = label.borrow_mut().show(&source.inner_html());
                source.set_inner_html(&feedback);
                TimeoutScheduler.after(
                    revert_ms,
                    Box::new(move || {
                        if let Some(original) = label.borrow_mut().revert(token) {
                            source.set_inner_html(&original);
                        }
                    }),
                );
            });
        });
    }
}
