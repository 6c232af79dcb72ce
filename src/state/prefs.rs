//! Theme and language preferences.
//!
//! Two plain strings live in client storage under `theme` and `language`.
//! They are read once at startup and written on every explicit change;
//! anything unreadable falls back to the defaults.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

/// Local hours (inclusive start, exclusive end) that default to light.
const LIGHT_HOURS: std::ops::Range<u32> = 7..20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefError {
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    #[error("unknown language: {0:?}")]
    UnknownLanguage(String),
}

/// Color theme applied as `data-theme` on the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Default theme for a local hour of day when nothing is stored.
    #[must_use]
    pub fn for_hour(hour: u32) -> Self {
        if LIGHT_HOURS.contains(&hour) { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Accessible label for the theme toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// The AI skill icon ships in a light and a dark variant.
    pub fn ai_icon(self) -> &'static str {
        match self {
            Self::Light => "images/skills/Ai-light.svg",
            Self::Dark => "images/skills/Ai-dark.svg",
        }
    }
}

impl FromStr for Theme {
    type Err = PrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PrefError::UnknownTheme(other.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ro,
    Es,
    Fr,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::En, Self::Ro, Self::Es, Self::Fr];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ro => "ro",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }
}

impl FromStr for Language {
    type Err = PrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| PrefError::UnknownLanguage(s.to_owned()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage for preference strings.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// The two user preferences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Read stored preferences, defaulting the theme by `local_hour` and the
    /// language to English.
    pub fn load(store: &impl PreferenceStore, local_hour: u32) -> Self {
        let theme = read_or(store, THEME_KEY, || Theme::for_hour(local_hour));
        let language = read_or(store, LANGUAGE_KEY, Language::default);
        Self { theme, language }
    }

    pub fn set_theme(&mut self, store: &mut impl PreferenceStore, theme: Theme) {
        self.theme = theme;
        store.set(THEME_KEY, theme.as_str());
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle_theme(&mut self, store: &mut impl PreferenceStore) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(store, next);
        next
    }

    pub fn set_language(&mut self, store: &mut impl PreferenceStore, language: Language) {
        self.language = language;
        store.set(LANGUAGE_KEY, language.as_str());
    }
}

fn read_or<T, F>(store: &impl PreferenceStore, key: &str, fallback: F) -> T
where
    T: FromStr<Err = PrefError>,
    F: FnOnce() -> T,
{
    let Some(raw) = store.get(key) else {
        return fallback();
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("ignoring stored preference {key}: {e}");
            fallback()
        }
    }
}
