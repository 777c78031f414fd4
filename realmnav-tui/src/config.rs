//! TOML configuration for the terminal client.
//!
//! ```toml
//! data_dir = "/home/me/.local/share/realmnav"
//!
//! [back_button]
//! mount = true
//! show = true
//! hide = true
//! on_click = true
//!
//! [log]
//! level = "debug"
//! format = "json"
//! ```
//!
//! A missing file means defaults; a malformed one is an error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use realmnav_core::logging::{parse_level, LogConfig, LogFormat};
use realmnav_core::Capabilities;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "REALMNAV_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// Where preferences and the log file live.
    pub data_dir: Option<PathBuf>,
    /// Calls the terminal back button supports.
    pub back_button: Capabilities,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    /// Defaults to `<data_dir>/realmnav.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            file: None,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            back_button: Capabilities::all(),
            log: LogSettings::default(),
        }
    }
}

impl TuiConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("realmnav")
        })
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log
            .file
            .clone()
            .unwrap_or_else(|| self.data_dir().join("realmnav.log"))
    }

    /// The terminal is busy with the UI, so logs always go to a file.
    pub fn log_config(&self) -> Result<LogConfig> {
        let level = parse_level(&self.log.level)
            .with_context(|| format!("invalid log level `{}`", self.log.level))?;
        Ok(LogConfig::default()
            .with_level(level)
            .with_format(self.log.format)
            .with_log_file(Some(self.log_file())))
    }
}

/// `$REALMNAV_CONFIG`, else `<config dir>/realmnav/config.toml`.
pub fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("realmnav")
        .join("config.toml")
}

pub fn load(path: &Path) -> Result<TuiConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(TuiConfig::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };
    parse(&content).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse(content: &str) -> Result<TuiConfig> {
    let config: TuiConfig = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.back_button, Capabilities::all());
    }

    #[test]
    fn partial_back_button_section() {
        let config = parse(
            r#"
            [back_button]
            mount = true
            show = false
            "#,
        )
        .unwrap();
        // Omitted keys stay supported.
        assert!(config.back_button.mount);
        assert!(!config.back_button.show);
        assert!(config.back_button.hide);
        assert!(config.back_button.on_click);
    }

    #[test]
    fn log_settings_and_data_dir() {
        let config = parse(
            r#"
            data_dir = "/tmp/realmnav-test"

            [log]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(
            config.log_file(),
            PathBuf::from("/tmp/realmnav-test/realmnav.log")
        );
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/realmnav-test/preferences.json")
        );
        let log = config.log_config().unwrap();
        assert_eq!(log.level, tracing::Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse("theme = \"neon\"").is_err());
    }

    #[test]
    fn rejects_bad_log_level() {
        let config = parse("[log]\nlevel = \"loud\"").unwrap();
        assert!(config.log_config().is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[back_button\nmount = ").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }
}
