use crate::application::state::Settings;
use crate::utils::APP_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Reads and writes [`Settings`] as TOML
pub struct SettingsStore {
    file_path: PathBuf,
}

impl SettingsStore {
    pub fn new() -> Result<Self> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push(APP_NAME);
        path.push("config.toml");
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { file_path: path.into() }
    }

    pub fn load(&self) -> Result<Settings> {
        if !self.file_path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.file_path)?;
        toml::from_str(&content).with_context(|| format!("Invalid settings file {:?}", self.file_path))
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("config.toml"));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "consistent_order = true\n").unwrap();

        let settings = SettingsStore::with_path(path).load().unwrap();
        assert!(settings.consistent_order);
        assert!(settings.avoid_repeats);
        assert_eq!(settings.data_file, None);
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_path(dir.path().join("cfg/config.toml"));
        let settings = Settings {
            consistent_order: true,
            avoid_repeats: false,
            data_file: Some(PathBuf::from("/tmp/mixer.json")),
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }
}
