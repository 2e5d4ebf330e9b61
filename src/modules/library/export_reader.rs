use crate::core::models::{Item, PlaylistRecord};
use crate::core::traits::PlaylistProvider;
use crate::utils::PLAYABLE_STATUSES;
use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A playlist exported from a video host, one entry per video
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ExportedPlaylist {
    id: String,
    title: String,
    items: Vec<ExportedItem>,
    #[serde(default)]
    thumbnails: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ExportedItem {
    video_id: String,
    privacy_status: String,
}

/// Reads an exported playlist file, keeping only playable entries
pub struct ExportFileProvider {
    path: PathBuf,
}

impl ExportFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlaylistProvider for ExportFileProvider {
    fn fetch(&self) -> Result<PlaylistRecord> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Could not read {:?}", self.path))?;
        parse_export(&content).with_context(|| format!("Invalid playlist export {:?}", self.path))
    }
}

/// Parse an export and drop entries that are private, deleted or otherwise unplayable
pub fn parse_export(content: &str) -> Result<PlaylistRecord> {
    let exported: ExportedPlaylist = serde_json::from_str(content)?;
    let total = exported.items.len();

    let items: Vec<Item> = exported
        .items
        .into_iter()
        .filter(|item| PLAYABLE_STATUSES.contains(&item.privacy_status.as_str()))
        .map(|item| Item::Single(item.video_id))
        .collect();

    info!(
        "Playlist '{}': {} of {} entries available",
        exported.title,
        items.len(),
        total
    );

    Ok(PlaylistRecord {
        id: exported.id,
        title: exported.title,
        available_video_ids: items,
        thumbnails: exported.thumbnails,
    })
}
