//! Password visibility toggle.
//!
//! A `.toggle-password` button names its input with `data-target` (a CSS
//! selector). Clicking flips the input between `password` and `text` and
//! swaps the button icon between `bi-eye` and `bi-eye-slash`.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Icon shown while the password is masked.
pub const ICON_SHOW: &str = "bi-eye";
/// Icon shown while the password is in plain text.
pub const ICON_HIDE: &str = "bi-eye-slash";

/// Whether the password is currently readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Masked,
    Plain,
}

impl Visibility {
    /// Read from an input's `type` attribute. Anything but `password`
    /// counts as plain text.
    #[must_use]
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("password") { Self::Masked } else { Self::Plain }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Plain => "text",
        }
    }

    /// The icon class that matches this state.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Masked => ICON_SHOW,
            Self::Plain => ICON_HIDE,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }
}

/// DOM changes for one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleChange {
    pub input_type: &'static str,
    pub remove_icon: &'static str,
    pub add_icon: &'static str,
}

/// Compute the changes for a click given the input's current `type`.
#[must_use]
pub fn toggle(current_type: &str) -> ToggleChange {
    let current = Visibility::from_input_type(current_type);
    let next = current.toggled();
    ToggleChange { input_type: next.input_type(), remove_icon: current.icon(), add_icon: next.icon() }
}

#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    use web_sys::HtmlInputElement;

    use crate::dom;

    for button in dom::query_all(document, ".toggle-password") {
        let Some(selector) = button.get_attribute("data-target") else {
            continue;
        };
        let owner = document.clone();
        let source = button.clone();
        dom::on(&button, "click", move |_| {
            let Some(input) = dom::query(&owner, &selector).and_then(|el| dom::cast::<HtmlInputElement>(&el)) else {
                log::warn!("password toggle target {selector} not found");
                return;
            };
            let change = toggle(&input.type_());
            input.set_type(change.input_type);
            if let Some(icon) = dom::query_in(&source, "i") {
                dom::set_class(&icon, change.remove_icon, false);
                dom::set_class(&icon, change.add_icon, true);
            }
        });
    }
}
