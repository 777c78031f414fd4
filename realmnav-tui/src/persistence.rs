//! Preference persistence — JSON save/load across restarts.
//!
//! Only client-side preferences are stored. Navigation state is never
//! persisted: every launch starts on the realms screen.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::theme::ColorScheme;

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Native name, as shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
        }
    }

    pub fn next(self) -> Language {
        let i = Self::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// Serializable user preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub language: Language,
    pub color_scheme: ColorScheme,
}

/// Load preferences from disk. Returns defaults if the file is missing or corrupt.
pub fn load(path: &Path) -> Preferences {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), %err, "ignoring unreadable preferences");
            Preferences::default()
        }),
        Err(_) => Preferences::default(),
    }
}

/// Save preferences to disk. Creates parent directories if needed.
pub fn save(path: &Path, prefs: &Preferences) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences {
            language: Language::Ru,
            color_scheme: ColorScheme::Light,
        };
        save(&path, &prefs).unwrap();

        assert_eq!(load(&path), prefs);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/preferences.json"));
        assert_eq!(loaded, Preferences::default());
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not valid json {{{").unwrap();

        assert_eq!(load(&path), Preferences::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{ "language": "ru" }"#).unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.language, Language::Ru);
        assert_eq!(loaded.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn language_cycles() {
        assert_eq!(Language::En.next(), Language::Ru);
        assert_eq!(Language::Ru.next(), Language::En);
    }
}
