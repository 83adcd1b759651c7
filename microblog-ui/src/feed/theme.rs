use dioxus_logger::tracing::warn;

use crate::error::{js_error_text, FeedError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome classes for the toggle icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-sun",
            Theme::Dark => "fas fa-moon",
        }
    }
}

pub trait ThemeStorage {
    fn load(&self) -> Result<Option<String>, FeedError>;
    fn store(&self, theme: Theme) -> Result<(), FeedError>;
}

/// Browser `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalThemeStorage {
    key: &'static str,
}

impl LocalThemeStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Result<web_sys::Storage, FeedError> {
        web_sys::window()
            .ok_or_else(|| FeedError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| FeedError::Storage(js_error_text(&e)))?
            .ok_or_else(|| FeedError::Storage("localStorage disabled".to_string()))
    }
}

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> Result<Option<String>, FeedError> {
        self.storage()?
            .get_item(self.key)
            .map_err(|e| FeedError::Storage(js_error_text(&e)))
    }

    fn store(&self, theme: Theme) -> Result<(), FeedError> {
        self.storage()?
            .set_item(self.key, theme.as_str())
            .map_err(|e| FeedError::Storage(js_error_text(&e)))
    }
}

/// Owns the current theme and keeps the stored preference in step with it.
///
/// Storage failures are logged and otherwise ignored: the page still
/// switches theme, it just won't be remembered.
#[derive(Debug)]
pub struct ThemeManager<S> {
    storage: S,
    current: Theme,
}

impl<S: ThemeStorage> ThemeManager<S> {
    /// Read the stored preference (light when absent) and write it back.
    pub fn init(storage: S) -> Self {
        let stored = match storage.load() {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read theme preference, using default: {}", e);
                None
            }
        };

        let mut manager = Self {
            storage,
            current: Theme::from_stored(stored.as_deref()),
        };
        manager.set_theme(manager.current);
        manager
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        if let Err(e) = self.storage.store(theme) {
            warn!("Failed to persist theme preference: {}", e);
        }
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.current.toggled())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

pub fn apply_theme_to_document(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        value: RefCell<Option<String>>,
    }

    impl MemoryStorage {
        fn with(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
            }
        }

        fn stored(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Result<Option<String>, FeedError> {
            Ok(self.value.borrow().clone())
        }

        fn store(&self, theme: Theme) -> Result<(), FeedError> {
            *self.value.borrow_mut() = Some(theme.as_str().to_string());
            Ok(())
        }
    }

    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn load(&self) -> Result<Option<String>, FeedError> {
            Err(FeedError::Storage("denied".to_string()))
        }

        fn store(&self, _theme: Theme) -> Result<(), FeedError> {
            Err(FeedError::Storage("denied".to_string()))
        }
    }

    #[test]
    fn missing_preference_defaults_to_light_and_is_persisted() {
        let manager = ThemeManager::init(MemoryStorage::default());
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(manager.storage().stored().as_deref(), Some("light"));
    }

    #[test]
    fn stored_dark_preference_is_restored() {
        let manager = ThemeManager::init(MemoryStorage::with("dark"));
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let manager = ThemeManager::init(MemoryStorage::with("sepia"));
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(manager.storage().stored().as_deref(), Some("light"));
    }

    #[test]
    fn toggle_round_trips_through_storage() {
        let mut manager = ThemeManager::init(MemoryStorage::with("light"));

        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(manager.storage().stored().as_deref(), Some("dark"));

        assert_eq!(manager.toggle(), Theme::Light);
        assert_eq!(manager.storage().stored().as_deref(), Some("light"));
    }

    #[test]
    fn storage_failures_do_not_block_toggling() {
        let mut manager = ThemeManager::init(BrokenStorage);
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn icons_follow_theme() {
        assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
    }
}
