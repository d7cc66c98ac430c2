//! Light/dark theme preference.
//!
//! The preference is stored as `"light"` or `"dark"` under one local-storage
//! key and applied as the `data-bs-theme` attribute on `<html>`. Missing or
//! unrecognised stored values mean light. `#theme-toggle` flips the theme
//! and writes the new value back.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a page without storage access still toggles,
//! it just forgets the choice on reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Attribute on the root element that Bootstrap reads for its colour mode.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// The two supported themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact strings `"light"` and `"dark"`
    /// are recognised.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// String key/value persistence (local storage in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Loads, toggles and persists the theme preference.
#[derive(Debug)]
pub struct ThemeSwitcher<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeSwitcher<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// The stored theme, or light when nothing valid is stored.
    #[must_use]
    pub fn load(&self) -> Theme {
        self.store.get(&self.key).as_deref().and_then(Theme::parse).unwrap_or_default()
    }

    /// Persist `theme`.
    pub fn save(&mut self, theme: Theme) {
        self.store.set(&self.key, theme.as_str());
    }

    /// Flip `current`, persist and return the new theme.
    pub fn toggle(&mut self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}

/// [`PreferenceStore`] backed by `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("local storage unavailable: {}", crate::dom::describe(&err));
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not read {key}: {}", crate::dom::describe(&err));
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("could not persist {key}: {}", crate::dom::describe(&err));
        }
    }
}

/// Apply the stored theme and wire `#theme-toggle`.
#[cfg(feature = "hydrate")]
pub fn bind(document: &web_sys::Document, config: &crate::config::UiConfig) {
    use crate::dom;

    let Some(root) = document.document_element() else {
        return;
    };
    let mut switcher = ThemeSwitcher::new(LocalStorage, config.theme_storage_key.clone());
    let mut current = switcher.load();
    dom::set_attribute(&root, THEME_ATTRIBUTE, current.as_str());

    let Some(toggle) = document.get_element_by_id("theme-toggle") else {
        return;
    };
    dom::on(&toggle, "click", move |_| {
        current = switcher.toggle(current);
        dom::set_attribute(&root, THEME_ATTRIBUTE, current.as_str());
        log::debug!("theme switched to {}", current.as_str());
    });
}
