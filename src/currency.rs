//! Amount parsing and formatting.
//!
//! Inputs flagged `data-currency` are rewritten to two decimals when they
//! lose focus. Text that does not parse as a number is left untouched.
//! [`format_rand`] produces the application's display format for amounts
//! quoted in messages (`R1,234.56`).

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// Parse user-typed amount text. Surrounding whitespace is ignored;
/// non-finite values (`inf`, `NaN`) are rejected.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let Ok(value) = text.trim().parse::<f64>() else {
        return None;
    };
    value.is_finite().then_some(value)
}

/// Above this magnitude `value * 100.0` is no longer exact, so cent ties
/// fall back to the formatter's rounding.
const EXACT_CENTS_LIMIT: f64 = 1e13;

/// Fixed two-decimal representation of `value`. Values exactly halfway
/// between two cents round away from zero.
#[must_use]
pub fn to_fixed_2(value: f64) -> String {
    let formatted = if is_cent_tie(value) {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{value:.2}")
    };
    // Negative values that round to zero print without the sign.
    if formatted == "-0.00" { "0.00".to_owned() } else { formatted }
}

/// Whether `value` sits exactly halfway between two cents. In binary the
/// only such values are odd multiples of an eighth (`.125`, `.375`, ...).
#[allow(clippy::float_cmp)]
fn is_cent_tie(value: f64) -> bool {
    let eighths = value * 8.0;
    value.abs() < EXACT_CENTS_LIMIT && eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0
}

/// The blur-time rewrite of a currency field: `Some(new_text)` when the
/// text is numeric, `None` when the field should stay as it is.
#[must_use]
pub fn normalize_amount(text: &str) -> Option<String> {
    parse_amount(text).map(to_fixed_2)
}

/// Display an amount in Rand with thousands separators, e.g. `R50,000.00`.
#[must_use]
pub fn format_rand(amount: f64) -> String {
    let fixed = to_fixed_2(amount);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("R{sign}{grouped}.{cents}")
}

/// Rewrite `data-currency` inputs to two decimals on blur.
#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document) {
    use web_sys::HtmlInputElement;

    use crate::dom;

    for element in dom::query_all(document, "input[data-currency]") {
        dom::on(&element, "blur", |event| {
            let Some(input) = dom::event_target::<HtmlInputElement>(event) else {
                return;
            };
            if let Some(normalized) = normalize_amount(&input.value()) {
                input.set_value(&normalized);
            }
        });
    }
}
