//! Modal focus and submit-button busy state.
//!
//! When a modal finishes opening, its first numeric input receives focus
//! so the user can type an amount straight away. When a form inside a modal
//! submits, its submit button is disabled and relabelled with a spinner to
//! block double submission while the page posts.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Event Bootstrap fires once a modal is fully visible.
pub const SHOWN_EVENT: &str = "shown.bs.modal";

/// Inputs eligible for initial focus.
pub const FOCUS_SELECTOR: &str = "input[type=\"number\"]";

/// Markup for a submit button while its form is posting.
#[must_use]
pub fn busy_button_html(label: &str) -> String {
    format!("<span class=\"spinner-border spinner-border-sm me-2\" role=\"status\" aria-hidden=\"true\"></span>{label}")
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document, config: &crate::config::UiConfig) {
    use web_sys::{HtmlButtonElement, HtmlElement};

    use crate::dom;

    for modal in dom::query_all(document, ".modal") {
        let source = modal.clone();
        dom::on(&modal, SHOWN_EVENT, move |_| {
            let Some(input) = dom::query_in(&source, FOCUS_SELECTOR).and_then(|el| dom::cast::<HtmlElement>(&el)) else {
                return;
            };
            if let Err(err) = input.focus() {
                log::debug!("could not focus modal input: {}", dom::describe(&err));
            }
        });
    }

    let busy = busy_button_html(&config.busy_label);
    for form in dom::query_all(document, ".modal form") {
        let source = form.clone();
        let busy = busy.clone();
        dom::on(&form, "submit", move |_| {
            let Some(button) =
                dom::query_in(&source, "button[type=\"submit\"]").and_then(|el| dom::cast::<HtmlButtonElement>(&el))
            else {
                return;
            };
            button.set_disabled(true);
            button.set_inner_html(&busy);
        });
    }
}
