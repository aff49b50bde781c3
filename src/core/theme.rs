/// Storage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
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

    /// A saved value means light only when it is exactly `"light"`.
    pub fn from_saved(saved: &str) -> Theme {
        if saved == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Saved value (if non-empty) wins over the system preference; dark otherwise.
    pub fn initial(saved: Option<&str>, prefers_light: bool) -> Theme {
        match saved {
            Some(s) if !s.is_empty() => Theme::from_saved(s),
            _ if prefers_light => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

/// Durable key-value storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

pub struct ThemeToggle<S: PreferenceStore> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Resolve the starting theme. Never writes to `store`.
    pub fn new(store: S, prefers_light: bool) -> Self {
        let saved = store.load(THEME_STORAGE_KEY);
        let theme = Theme::initial(saved.as_deref(), prefers_light);
        Self { theme, store }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist the result.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(THEME_STORAGE_KEY, self.theme.as_str());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
