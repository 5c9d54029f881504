//! Application settings loaded once at startup
//!
//! The settings file is mandatory: without it the tool has no collection
//! URL to fetch, so a missing file aborts before any network activity.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Root of the settings document.
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    #[serde(alias = "Application")]
    pub application: ApplicationSettings,
}

/// Application-level settings. Keys are accepted in camelCase or
/// PascalCase; `defaultCollectionUrl` is mandatory.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSettings {
    /// Display name shown in the startup banner.
    #[serde(default, alias = "Name")]
    pub name: String,
    /// Log file target; defaults to `runman.log` in the working directory.
    #[serde(default, alias = "LogFilePath")]
    pub log_file_path: Option<String>,
    /// URL the collection document is downloaded from at startup.
    #[serde(alias = "DefaultCollectionUrl")]
    pub default_collection_url: String,
}

impl Settings {
    /// Load settings from `./runman.json`, falling back to
    /// `~/.runman/runman.json`. Absence of both is fatal.
    pub fn load() -> Result<Self> {
        let path = find_config_file()
            .with_context(|| format!("configuration file not found: {CONFIG_FILE_NAME}"))?;
        Self::load_from(&path)
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        Ok(settings)
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let home = dirs::home_dir()?
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME);
    home.exists().then_some(home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_settings() {
        let json = r#"{
            "application": {
                "name": "Runman",
                "logFilePath": "logs/runman.log",
                "defaultCollectionUrl": "https://example.com/collection.json"
            }
        }"#;

        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.application.name, "Runman");
        assert_eq!(
            settings.application.log_file_path.as_deref(),
            Some("logs/runman.log")
        );
        assert_eq!(
            settings.application.default_collection_url,
            "https://example.com/collection.json"
        );
    }

    #[test]
    fn parses_pascal_case_settings() {
        let json = r#"{
            "Application": {
                "Name": "Runman",
                "LogFilePath": "runman.log",
                "DefaultCollectionUrl": "https://example.com/collection.json"
            }
        }"#;

        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.application.name, "Runman");
        assert_eq!(
            settings.application.default_collection_url,
            "https://example.com/collection.json"
        );
    }

    #[test]
    fn collection_url_is_mandatory() {
        let json = r#"{"application": {"name": "Runman"}}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }

    #[test]
    fn log_file_path_is_optional() {
        let json = r#"{
            "application": {"defaultCollectionUrl": "https://example.com/c.json"}
        }"#;

        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(settings.application.log_file_path.is_none());
        assert!(settings.application.name.is_empty());
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let missing = Path::new("/definitely/not/here/runman.json");
        assert!(Settings::load_from(missing).is_err());
    }
}
