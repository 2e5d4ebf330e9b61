use crate::application::state::AppState;
use crate::core::traits::StorageBackend;
use crate::utils::APP_NAME;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonStorageBackend {
    file_path: PathBuf,
}

impl JsonStorageBackend {
    /// State file in the user's config directory
    pub fn new() -> Result<Self> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push(APP_NAME);
        path.push("db.json");
        Self::with_path(path)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { file_path })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl StorageBackend for JsonStorageBackend {
    fn load(&self) -> Result<AppState> {
        if !self.file_path.exists() {
            return Ok(AppState::default());
        }
        let content = fs::read_to_string(&self.file_path)?;
        let state: AppState = serde_json::from_str(&content)
            .with_context(|| format!("Corrupt state file {:?}", self.file_path))?;
        debug!("Loaded state from {:?}", self.file_path);
        Ok(state)
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.file_path, content)?;
        debug!("Saved state to {:?}", self.file_path);
        Ok(())
    }
}
