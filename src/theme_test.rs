use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;

const KEY: &str = "theme";

/// Shared map standing in for local storage across "page loads".
#[derive(Clone, Default)]
struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_strings_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn unknown_theme_strings_are_rejected() {
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_between_the_two_themes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// ThemeSwitcher
// =============================================================

#[test]
fn nothing_stored_defaults_to_light() {
    let switcher = ThemeSwitcher::new(MemoryStore::default(), KEY);
    assert_eq!(switcher.load(), Theme::Light);
}

#[test]
fn garbage_stored_value_defaults_to_light() {
    let mut store = MemoryStore::default();
    store.set(KEY, "purple");
    let switcher = ThemeSwitcher::new(store, KEY);
    assert_eq!(switcher.load(), Theme::Light);
}

#[test]
fn dark_survives_a_reload() {
    let store = MemoryStore::default();
    let mut first_page = ThemeSwitcher::new(store.clone(), KEY);
    first_page.save(Theme::Dark);

    let reloaded = ThemeSwitcher::new(store, KEY);
    assert_eq!(reloaded.load(), Theme::Dark);
}

#[test]
fn toggle_persists_the_new_value() {
    let store = MemoryStore::default();
    let mut switcher = ThemeSwitcher::new(store.clone(), KEY);
    let next = switcher.toggle(switcher.load());
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));

    let back = switcher.toggle(next);
    assert_eq!(back, Theme::Light);
    assert_eq!(store.get(KEY).as_deref(), Some("light"));
}

#[test]
fn stored_value_is_always_one_of_two_strings() {
    let store = MemoryStore::default();
    let mut switcher = ThemeSwitcher::new(store.clone(), KEY);
    let mut theme = switcher.load();
    for _ in 0..5 {
        theme = switcher.toggle(theme);
        let stored = store.get(KEY).unwrap();
        assert!(stored == "light" || stored == "dark");
    }
}

#[test]
fn custom_key_is_used() {
    let store = MemoryStore::default();
    let mut switcher = ThemeSwitcher::new(store.clone(), "bank.theme");
    switcher.save(Theme::Dark);
    assert_eq!(store.get("bank.theme").as_deref(), Some("dark"));
    assert_eq!(store.get(KEY), None);
}
