use std::cell::RefCell;

use super::*;

const DEFAULT: &str = "Are you sure you want to proceed?";

struct ScriptedPrompter {
    answer: bool,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn answering(answer: bool) -> Self {
        Self { answer, asked: RefCell::new(Vec::new()) }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_owned());
        self.answer
    }

    fn alert(&self, _message: &str) {}
}

#[test]
fn element_message_is_preferred() {
    assert_eq!(prompt_message(Some("Delete this goal?"), DEFAULT), "Delete this goal?");
}

#[test]
fn missing_or_blank_message_uses_default() {
    assert_eq!(prompt_message(None, DEFAULT), DEFAULT);
    assert_eq!(prompt_message(Some(""), DEFAULT), DEFAULT);
    assert_eq!(prompt_message(Some("   "), DEFAULT), DEFAULT);
}

#[test]
fn declining_cancels_the_click() {
    let prompter = ScriptedPrompter::answering(false);
    assert_eq!(guard(&prompter, Some("Reverse transaction?"), DEFAULT), ClickVerdict::Cancel);
    assert_eq!(*prompter.asked.borrow(), vec!["Reverse transaction?".to_owned()]);
}

#[test]
fn accepting_lets_the_click_proceed() {
    let prompter = ScriptedPrompter::answering(true);
    assert_eq!(guard(&prompter, None, DEFAULT), ClickVerdict::Proceed);
    assert_eq!(*prompter.asked.borrow(), vec![DEFAULT.to_owned()]);
}
