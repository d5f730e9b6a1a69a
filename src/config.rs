//! User settings, read from `config.toml` in the platform config directory.
//!
//! Every field is optional in the file; missing ones take their defaults.
//!
//! ```toml
//! default_software = "maya"
//! default_tab = "shortcuts"
//! log_level = "debug"
//! sample_data = false
//! ```

use crate::models::catalog;
use crate::store::{AppState, TabView};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "LEARN3D_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_software: String,
    pub default_tab: TabView,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub sample_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_software: String::from("blender"),
            default_tab: TabView::Notes,
            log_level: String::from("info"),
            log_file: None,
            sample_data: true,
        }
    }
}

impl Settings {
    /// `$LEARN3D_CONFIG`, or `<config_dir>/learn3d/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::config_dir().map(|dir| dir.join("learn3d").join("config.toml")),
        }
    }

    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Reads settings from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Seeds the store: catalog, optional sample content, and the
    /// configured starting software and tab
    pub fn initial_state(&self) -> AppState {
        let mut state = if self.sample_data {
            AppState::sample()
        } else {
            AppState::with_catalog(catalog::software())
        };

        match state.find_software(&self.default_software).cloned() {
            Some(software) => state.active_software = software,
            None => warn!(
                software = %self.default_software,
                "unknown default software, starting with {}",
                state.active_software.name
            ),
        }
        state.active_tab = self.default_tab;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_software = \"maya\"").unwrap();
        writeln!(file, "default_tab = \"keyboard\"").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.default_software, "maya");
        assert_eq!(settings.default_tab, TabView::Keyboard);
        assert_eq!(settings.log_level, "info");
        assert!(settings.sample_data);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_tab = \"timeline\"").unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn initial_state_honours_settings() {
        let settings = Settings {
            default_software: "zbrush".into(),
            default_tab: TabView::Folders,
            sample_data: false,
            ..Settings::default()
        };

        let state = settings.initial_state();
        assert_eq!(state.active_software.id, "zbrush");
        assert_eq!(state.active_tab, TabView::Folders);
        assert_eq!(state.software.len(), 5);
        assert!(state.notes.is_empty());
        assert!(state.folders.is_empty());
    }

    #[test]
    fn unknown_default_software_falls_back_to_first() {
        let settings = Settings {
            default_software: "houdini".into(),
            ..Settings::default()
        };

        let state = settings.initial_state();
        assert_eq!(state.active_software.id, "blender");
        assert_eq!(state.notes.len(), 2);
    }
}
