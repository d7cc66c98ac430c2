//! Preset amount buttons.
//!
//! A `.quick-amount` button carries `data-amount` and `data-target` (a CSS
//! selector for the amount input). Clicking copies the amount into the
//! input and fires a bubbling `input` event so validators and formatters
//! react as if the user had typed it.

#[cfg(test)]
#[path = "quick_amount_test.rs"]
mod quick_amount_test;

/// A fully specified quick-amount button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickAmount {
    pub amount: String,
    pub target: String,
}

impl QuickAmount {
    /// Read the button's data attributes. Both must be present and
    /// non-blank.
    #[must_use]
    pub fn from_attributes(amount: Option<String>, target: Option<String>) -> Option<Self> {
        let amount = amount?.trim().to_owned();
        let target = target?.trim().to_owned();
        if amount.is_empty() || target.is_empty() {
            return None;
        }
        Some(Self { amount, target })
    }
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    use web_sys::HtmlInputElement;

    use crate::dom;

    for button in dom::query_all(document, ".quick-amount") {
        let owner = document.clone();
        let source = button.clone();
        dom::on(&button, "click", move |_| {
            let Some(quick) =
                QuickAmount::from_attributes(source.get_attribute("data-amount"), source.get_attribute("data-target"))
            else {
                log::warn!("quick-amount button is missing data-amount or data-target");
                return;
            };
            let Some(target) = dom::query(&owner, &quick.target) else {
                log::warn!("quick-amount target {} not found", quick.target);
                return;
            };
            let Some(input) = dom::cast::<HtmlInputElement>(&target) else {
                return;
            };
            input.set_value(&quick.amount);
            dom::dispatch_input(&target);
        });
    }
}
