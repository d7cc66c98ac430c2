//! Numeric maximum validation for amount inputs inside modals.
//!
//! On every `input` event the typed value is compared with the input's
//! `max` attribute. A value above the maximum is clamped down to it, the
//! input is marked `is-invalid`, and an inline `.invalid-feedback` element
//! explains the limit. The feedback element is created the first time it is
//! needed and reused afterwards.
//!
//! TRADE-OFFS
//! ==========
//! Clamping happens on each keystroke, so typing a multi-digit number that
//! passes through a larger intermediate value rewrites the field mid-entry.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

use crate::currency::{format_rand, parse_amount, to_fixed_2};

/// Class marking an input as failing validation.
pub const INVALID_CLASS: &str = "is-invalid";

/// Result of checking a value against a maximum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaxCheck {
    /// At or below the maximum, or not comparable (either side unparseable).
    Valid,
    /// Above the maximum: replace the value and show the message.
    Exceeded { clamped: String, message: String },
}

/// Compare typed text with the declared `max` attribute.
#[must_use]
pub fn check_max(value: &str, max: &str) -> MaxCheck {
    match (parse_amount(value), parse_amount(max)) {
        (Some(value), Some(max)) if value > max => MaxCheck::Exceeded {
            clamped: to_fixed_2(max),
            message: exceeded_message(max),
        },
        _ => MaxCheck::Valid,
    }
}

/// Inline error text for a value above `max`.
#[must_use]
pub fn exceeded_message(max: f64) -> String {
    format!("Amount cannot exceed {}", format_rand(max))
}

/// Lazily created inline feedback element owned by one input.
#[derive(Debug)]
pub struct FeedbackSlot<E> {
    element: Option<E>,
}

impl<E> Default for FeedbackSlot<E> {
    fn default() -> Self {
        Self { element: None }
    }
}

impl<E> FeedbackSlot<E> {
    /// The existing element, if one has been created.
    pub fn get(&self) -> Option<&E> {
        self.element.as_ref()
    }

    /// The existing element, or the result of `create` on first use. A
    /// failed `create` leaves the slot empty so a later call can retry.
    pub fn get_or_create(&mut self, create: impl FnOnce() -> Option<E>) -> Option<&E> {
        if self.element.is_none() {
            self.element = create();
        }
        self.element.as_ref()
    }
}

/// Validate `input[type=number][max]` fields inside modals as they change.
#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    use web_sys::{Element, HtmlInputElement};

    use crate::dom;

    for element in dom::query_all(document, ".modal input[type=\"number\"][max]") {
        let Some(input) = dom::cast::<HtmlInputElement>(&element) else {
            continue;
        };
        let owner = document.clone();
        let mut slot: FeedbackSlot<Element> = FeedbackSlot::default();
        let field = input.clone();
        dom::on(&input, "input", move |_| match check_max(&field.value(), &field.max()) {
            MaxCheck::Exceeded { clamped, message } => {
                field.set_value(&clamped);
                dom::set_class(&field, INVALID_CLASS, true);
                if let Some(feedback) = slot.get_or_create(|| create_feedback(&owner, &field)) {
                    feedback.set_text_content(Some(&message));
                }
            }
            MaxCheck::Valid => {
                dom::set_class(&field, INVALID_CLASS, false);
                if let Some(feedback) = slot.get() {
                    feedback.set_text_content(None);
                }
            }
        });
    }

    fn create_feedback(document: &web_sys::Document, input: &HtmlInputElement) -> Option<Element> {
        let feedback = match document.create_element("div") {
            Ok(feedback) => feedback,
            Err(err) => {
                log::warn!("could not create feedback element: {}", dom::describe(&err));
                return None;
            }
        };
        feedback.set_class_name("invalid-feedback");
        match input.insert_adjacent_element("afterend", &feedback) {
            Ok(_) => Some(feedback),
            Err(err) => {
                log::warn!("could not place feedback element: {}", dom::describe(&err));
                None
            }
        }
    }
}
