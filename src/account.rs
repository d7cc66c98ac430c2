//! Account-number input sanitising.
//!
//! Bank account numbers are exactly ten digits. Inputs flagged
//! `data-account-number` drop anything that is not an ASCII digit and stop
//! at ten characters while the user types or pastes.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

/// Number of digits in an account number.
pub const ACCOUNT_NUMBER_LEN: usize = 10;

/// Keep only ASCII digits, truncated to [`ACCOUNT_NUMBER_LEN`].
#[must_use]
pub fn sanitize_account_number(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(ACCOUNT_NUMBER_LEN).collect()
}

/// Whether `raw` is already a complete account number.
#[must_use]
pub fn is_complete(raw: &str) -> bool {
    raw.len() == ACCOUNT_NUMBER_LEN && raw.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    use web_sys::HtmlInputElement;

    use crate::dom;

    for element in dom::query_all(document, "input[data-account-number]") {
        dom::on(&element, "input", |event| {
            let Some(input) = dom::event_target::<HtmlInputElement>(event) else {
                return;
            };
            let raw = input.value();
            let clean = sanitize_account_number(&raw);
            // Rewriting an unchanged value would move the caret to the end.
            if clean != raw {
                input.set_value(&clean);
            }
            dom::set_class(&input, "is-valid", is_complete(&clean));
        });
    }
}
