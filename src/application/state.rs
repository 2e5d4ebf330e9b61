use crate::core::models::PlaylistRecord;
use crate::modules::shuffle::document::{PatternDocument, PatternGroup};
use crate::modules::shuffle::interleaver::ShuffleOptions;
use crate::modules::shuffle::registry::conjoin_lists;
use crate::utils::{CONJOIN_ID_SEPARATOR, CONJOIN_TITLE_SEPARATOR};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete persisted state (single source of truth)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub library: LibraryState,

    /// The saved pattern used by `generate`
    #[serde(default)]
    pub pattern: PatternDocument,

    /// Pattern group still being built
    #[serde(default)]
    pub draft: PatternGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryState {
    pub playlists: Vec<PlaylistRecord>,
}

/// User settings, kept in the TOML config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub consistent_order: bool,
    pub avoid_repeats: bool,

    /// Overrides the default location of the state file
    pub data_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let options = ShuffleOptions::default();
        Self {
            consistent_order: options.consistent_order,
            avoid_repeats: options.avoid_immediate_repeat,
            data_file: None,
        }
    }
}

impl Settings {
    pub fn shuffle_options(&self) -> ShuffleOptions {
        ShuffleOptions {
            consistent_order: self.consistent_order,
            avoid_immediate_repeat: self.avoid_repeats,
        }
    }
}

impl LibraryState {
    pub fn find(&self, id: &str) -> Option<&PlaylistRecord> {
        self.playlists.iter().find(|playlist| playlist.id == id)
    }

    /// Store a freshly fetched playlist. Empty playlists are refused and
    /// leave the library untouched.
    pub fn import(&mut self, record: PlaylistRecord) -> Result<bool> {
        if record.is_empty() {
            bail!("'{}' has no playable items; nothing imported.", record.title);
        }
        Ok(self.upsert(record))
    }

    /// Insert `record`, replacing a playlist with the same id.
    /// Returns true if something was replaced.
    pub fn upsert(&mut self, record: PlaylistRecord) -> bool {
        match self.playlists.iter_mut().find(|playlist| playlist.id == record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                self.playlists.push(record);
                false
            }
        }
    }

    /// Build a conjoined playlist from stored playlists, in the order given.
    ///
    /// The new id joins the source ids; the title is `name` or the source
    /// titles joined. The record is returned, not stored.
    pub fn conjoin(&self, ids: &[String], name: Option<&str>) -> Result<PlaylistRecord> {
        if ids.len() < 2 {
            bail!("Conjoining needs at least two playlists, got {}.", ids.len());
        }

        let sources = ids
            .iter()
            .map(|id| {
                self.find(id)
                    .with_context(|| format!("No playlist with id '{}' in the library.", id))
            })
            .collect::<Result<Vec<_>>>()?;

        let lists: Vec<&[_]> = sources
            .iter()
            .map(|playlist| playlist.available_video_ids.as_slice())
            .collect();

        let title = match name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => sources
                .iter()
                .map(|playlist| playlist.title.as_str())
                .collect::<Vec<_>>()
                .join(CONJOIN_TITLE_SEPARATOR),
        };

        Ok(PlaylistRecord {
            id: ids.join(CONJOIN_ID_SEPARATOR),
            title,
            available_video_ids: conjoin_lists(&lists),
            thumbnails: sources[0].thumbnails.clone(),
        })
    }
}

impl AppState {
    /// Add library playlists to the draft group
    pub fn add_to_draft(&mut self, ids: &[String]) -> Result<()> {
        for id in ids {
            let playlist = self
                .library
                .find(id)
                .with_context(|| format!("No playlist with id '{}' in the library.", id))?;
            self.draft.push_playlist(&playlist.id, Some(playlist.title.as_str()));
        }
        Ok(())
    }

    /// Move the draft into the saved pattern, repeated `repeat` times
    pub fn commit_draft(&mut self, repeat: u32) -> Result<()> {
        if self.draft.is_empty() {
            bail!("The pattern draft is empty. Add playlists first.");
        }
        if repeat == 0 {
            bail!("Repeat count must be at least 1.");
        }

        let mut group = std::mem::take(&mut self.draft);
        group.count = repeat;
        self.pattern.push_group(group);
        Ok(())
    }
}
