//! Theme preference: light or dark.
//!
//! Load order: an explicitly stored preference wins; otherwise the OS-level
//! color-scheme preference applies. OS changes keep flowing through only
//! while the user has not picked a side.

use crate::notify::Announcer;
use fresh_store::{Store, StoreError, THEME_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The two page themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a stored value.
    pub fn from_code(code: &str) -> Option<Theme> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owns the current theme and its persistence.
pub struct ThemeManager {
    store: Store,
    announcer: Arc<dyn Announcer>,
    current: Theme,
}

impl ThemeManager {
    /// Load the theme: stored preference first, OS preference otherwise.
    pub fn new(store: Store, announcer: Arc<dyn Announcer>, system_preference: Theme) -> Self {
        let current = match store.get::<String>(THEME_KEY) {
            Ok(Some(code)) => Theme::from_code(&code).unwrap_or(system_preference),
            Ok(None) => system_preference,
            Err(e) => {
                tracing::warn!(error = %e, "stored theme unreadable, using system preference");
                system_preference
            }
        };

        Self {
            store,
            announcer,
            current,
        }
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist the choice, and announce it.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        self.apply(self.current.toggled())
    }

    /// Set an explicit theme, persist it, and announce it.
    pub fn apply(&mut self, theme: Theme) -> Result<Theme, StoreError> {
        self.current = theme;
        self.store.set(THEME_KEY, &theme.as_str())?;
        self.announcer
            .announce(&format!("Theme changed to {theme} mode"));
        Ok(theme)
    }

    /// React to an OS color-scheme change.
    ///
    /// Applies only while no explicit preference is stored, and does not
    /// store one itself.
    pub fn on_system_change(&mut self, theme: Theme) -> Result<bool, StoreError> {
        if self.store.exists(THEME_KEY)? {
            return Ok(false);
        }
        self.current = theme;
        self.announcer
            .announce(&format!("Theme changed to {theme} mode"));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::BufferedNotifier;

    fn manager(dir: &tempfile::TempDir, system: Theme) -> (Arc<BufferedNotifier>, ThemeManager) {
        let sink = Arc::new(BufferedNotifier::new());
        let store = Store::open(dir.path()).unwrap();
        let mgr = ThemeManager::new(store, sink.clone(), system);
        (sink, mgr)
    }

    #[test]
    fn test_defaults_to_system_preference() {
        let dir = tempfile::tempdir().unwrap();
        let (_, mgr) = manager(&dir, Theme::Dark);
        assert_eq!(mgr.current(), Theme::Dark);
    }

    #[test]
    fn test_stored_preference_wins_over_system() {
        let dir = tempfile::tempdir().unwrap();
        {
            let (_, mut mgr) = manager(&dir, Theme::Light);
            mgr.apply(Theme::Dark).unwrap();
        }

        let (_, mgr) = manager(&dir, Theme::Light);
        assert_eq!(mgr.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_and_announces() {
        let dir = tempfile::tempdir().unwrap();
        let (sink, mut mgr) = manager(&dir, Theme::Light);

        assert_eq!(mgr.toggle().unwrap(), Theme::Dark);
        assert_eq!(sink.announcements(), vec!["Theme changed to dark mode"]);

        let (_, reloaded) = manager(&dir, Theme::Light);
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn test_system_change_ignored_once_preference_stored() {
        let dir = tempfile::tempdir().unwrap();
        let (_, mut mgr) = manager(&dir, Theme::Light);
        mgr.apply(Theme::Light).unwrap();

        assert!(!mgr.on_system_change(Theme::Dark).unwrap());
        assert_eq!(mgr.current(), Theme::Light);
    }

    #[test]
    fn test_system_change_applies_without_storing() {
        let dir = tempfile::tempdir().unwrap();
        let (_, mut mgr) = manager(&dir, Theme::Light);

        assert!(mgr.on_system_change(Theme::Dark).unwrap());
        assert_eq!(mgr.current(), Theme::Dark);

        // Still no stored preference, so the next change applies too.
        assert!(mgr.on_system_change(Theme::Light).unwrap());
    }
}
