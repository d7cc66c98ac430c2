use super::*;

// =============================================================
// check_max
// =============================================================

#[test]
fn value_above_max_clamps_to_max_with_two_decimals() {
    assert_eq!(
        check_max("60000", "50000"),
        MaxCheck::Exceeded {
            clamped: "50000.00".to_owned(),
            message: "Amount cannot exceed R50,000.00".to_owned(),
        }
    );
}

#[test]
fn fractional_max_is_kept_exactly() {
    let MaxCheck::Exceeded { clamped, .. } = check_max("1250.5", "1250.25") else {
        panic!("expected clamp");
    };
    assert_eq!(clamped, "1250.25");
}

#[test]
fn halfway_max_clamps_rounding_away_from_zero() {
    assert_eq!(
        check_max("2000", "1000.125"),
        MaxCheck::Exceeded {
            clamped: "1000.13".to_owned(),
            message: "Amount cannot exceed R1,000.13".to_owned(),
        }
    );
}

#[test]
fn value_at_max_is_valid() {
    assert_eq!(check_max("5000", "5000"), MaxCheck::Valid);
    assert_eq!(check_max("5000.00", "5000"), MaxCheck::Valid);
}

#[test]
fn value_below_max_is_valid() {
    assert_eq!(check_max("10", "5000"), MaxCheck::Valid);
    assert_eq!(check_max("-3", "0"), MaxCheck::Valid);
}

#[test]
fn unparseable_value_or_max_is_valid() {
    assert_eq!(check_max("", "5000"), MaxCheck::Valid);
    assert_eq!(check_max("abc", "5000"), MaxCheck::Valid);
    assert_eq!(check_max("9999", ""), MaxCheck::Valid);
}

#[test]
fn every_value_above_max_clamps_exactly_to_max() {
    for value in ["5000.01", "5001", "99999", "1e6"] {
        match check_max(value, "5000") {
            MaxCheck::Exceeded { clamped, .. } => assert_eq!(clamped, "5000.00"),
            MaxCheck::Valid => panic!("{value} should exceed 5000"),
        }
    }
}

// =============================================================
// FeedbackSlot
// =============================================================

#[test]
fn feedback_slot_creates_once() {
    let mut slot = FeedbackSlot::default();
    let mut created = 0;
    for _ in 0..3 {
        slot.get_or_create(|| {
            created += 1;
            Some("feedback-div")
        });
    }
    assert_eq!(created, 1);
    assert_eq!(slot.get(), Some(&"feedback-div"));
}

#[test]
fn empty_slot_has_nothing_to_hide() {
    let slot: FeedbackSlot<&str> = FeedbackSlot::default();
    assert!(slot.get().is_none());
}

#[test]
fn failed_creation_retries_next_time() {
    let mut slot = FeedbackSlot::default();
    assert!(slot.get_or_create(|| None::<&str>).is_none());
    assert_eq!(slot.get_or_create(|| Some("div")), Some(&"div"));
}
