use super::*;

// =============================================================
// normalize_amount
// =============================================================

#[test]
fn integer_text_gets_two_decimals() {
    assert_eq!(normalize_amount("150").as_deref(), Some("150.00"));
}

#[test]
fn long_fraction_is_rounded() {
    assert_eq!(normalize_amount("12.3456").as_deref(), Some("12.35"));
    assert_eq!(normalize_amount("0.1").as_deref(), Some("0.10"));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(normalize_amount("  99.5 ").as_deref(), Some("99.50"));
}

#[test]
fn negative_and_exponent_forms_parse() {
    assert_eq!(normalize_amount("-20").as_deref(), Some("-20.00"));
    assert_eq!(normalize_amount("1e3").as_deref(), Some("1000.00"));
}

#[test]
fn non_numeric_text_is_left_alone() {
    for text in ["", "abc", "R100", "12,50", "1.2.3", "NaN", "inf", "-infinity"] {
        assert_eq!(normalize_amount(text), None, "{text:?} should not be rewritten");
    }
}

#[test]
fn output_matches_parsed_value() {
    for text in ["0", "1", "2.5", "10.01", "49999.999", "0.004"] {
        let parsed: f64 = text.parse().unwrap();
        assert_eq!(normalize_amount(text), Some(format!("{parsed:.2}")));
    }
}

#[test]
fn halfway_cents_round_away_from_zero() {
    assert_eq!(normalize_amount("10.125").as_deref(), Some("10.13"));
    assert_eq!(normalize_amount("1.375").as_deref(), Some("1.38"));
    assert_eq!(normalize_amount("0.125").as_deref(), Some("0.13"));
    assert_eq!(normalize_amount("2.625").as_deref(), Some("2.63"));
    assert_eq!(normalize_amount("-10.125").as_deref(), Some("-10.13"));
}

#[test]
fn values_near_a_tie_round_normally() {
    assert_eq!(normalize_amount("10.1249").as_deref(), Some("10.12"));
    assert_eq!(normalize_amount("10.25").as_deref(), Some("10.25"));
    assert_eq!(normalize_amount("10.5").as_deref(), Some("10.50"));
}

#[test]
fn tiny_negative_rounds_to_unsigned_zero() {
    assert_eq!(to_fixed_2(-0.001), "0.00");
}

// =============================================================
// format_rand
// =============================================================

#[test]
fn rand_format_groups_thousands() {
    assert_eq!(format_rand(50_000.0), "R50,000.00");
    assert_eq!(format_rand(1_234_567.891), "R1,234,567.89");
}

#[test]
fn rand_format_small_amounts_have_no_separator() {
    assert_eq!(format_rand(0.0), "R0.00");
    assert_eq!(format_rand(999.9), "R999.90");
    assert_eq!(format_rand(5.0), "R5.00");
}

#[test]
fn rand_format_keeps_sign_after_symbol() {
    assert_eq!(format_rand(-1500.0), "R-1,500.00");
}

#[test]
fn rand_format_rounds_halfway_cents_up() {
    assert_eq!(format_rand(1234.875), "R1,234.88");
}
