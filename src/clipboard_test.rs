use super::*;

#[test]
fn feedback_html_includes_label() {
    assert_eq!(feedback_html("Copied!"), "<i class=\"bi bi-check2\"></i> Copied!");
}

#[test]
fn revert_restores_the_original_label() {
    let mut label = FeedbackLabel::default();
    let token = label.show("<i class=\"bi bi-clipboard\"></i> Copy");
    assert!(label.is_showing());
    assert_eq!(label.revert(token).as_deref(), Some("<i class=\"bi bi-clipboard\"></i> Copy"));
    assert!(!label.is_showing());
}

#[test]
fn second_click_keeps_the_first_original() {
    let mut label = FeedbackLabel::default();
    label.show("Copy");
    let second = label.show(&feedback_html("Copied!"));
    assert_eq!(label.revert(second).as_deref(), Some("Copy"));
}

#[test]
fn extra_revert_is_a_noop() {
    let mut label = FeedbackLabel::default();
    let token = label.show("Copy");
    label.revert(token);
    assert_eq!(label.revert(token), None);
}

#[test]
fn superseded_timer_leaves_newer_feedback_showing() {
    let mut label = FeedbackLabel::default();
    // t=0 first click, t=1500 second click.
    let first = label.show("Copy");
    let second = label.show(&feedback_html("Copied!"));
    // t=2000: the first click's timer fires but a newer click owns the label.
    assert_eq!(label.revert(first), None);
    assert!(label.is_showing());
    // t=2500: a third click before the second timer fires.
    let third = label.show(&feedback_html("Copied!"));
    // t=3500: the second timer is superseded too.
    assert_eq!(label.revert(second), None);
    assert!(label.is_showing());
    // t=4500: the third click's timer restores the original.
    assert_eq!(label.revert(third).as_deref(), Some("Copy"));
    assert!(!label.is_showing());
}
