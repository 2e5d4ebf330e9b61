//! The saved-pattern JSON document.
//!
//! Shape: `{ "fullPattern": [ { "playlists": [{ "id", "count" }], "count" } ],
//! "uniquePlaylists": [...] }`. Extra fields on playlist entries (titles,
//! thumbnails, item lists written by older hosts) are ignored on read.

use crate::modules::shuffle::pattern::PatternNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One leaf of a pattern group: play `count` items from playlist `id`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub id: String,
    pub count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A run of entries repeated `count` times
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PatternGroup {
    pub playlists: Vec<PatternEntry>,
    pub count: u32,
}

impl Default for PatternGroup {
    fn default() -> Self {
        Self {
            playlists: Vec::new(),
            count: 1,
        }
    }
}

impl PatternGroup {
    /// Append a playlist; adding the same playlist as the last entry bumps its count instead
    pub fn push_playlist(&mut self, id: &str, title: Option<&str>) {
        match self.playlists.last_mut() {
            Some(last) if last.id == id => last.count += 1,
            _ => self.playlists.push(PatternEntry {
                id: id.to_string(),
                count: 1,
                title: title.map(str::to_string),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn to_node(&self) -> PatternNode {
        let children = self
            .playlists
            .iter()
            .map(|entry| PatternNode::leaf(entry.id.clone(), entry.count))
            .collect();
        PatternNode::group(children, self.count)
    }
}

impl fmt::Display for PatternGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .playlists
            .iter()
            .map(|entry| {
                let label = entry.title.as_deref().unwrap_or(&entry.id);
                format!("{} x{}", label, entry.count)
            })
            .collect();
        write!(f, "({}) x{}", entries.join(", "), self.count)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatternDocument {
    pub full_pattern: Vec<PatternGroup>,

    #[serde(default)]
    pub unique_playlists: Vec<String>,
}

impl PatternDocument {
    pub fn new(groups: Vec<PatternGroup>) -> Self {
        let mut document = Self {
            full_pattern: groups,
            unique_playlists: Vec::new(),
        };
        document.refresh_unique_playlists();
        document
    }

    pub fn push_group(&mut self, group: PatternGroup) {
        self.full_pattern.push(group);
        self.refresh_unique_playlists();
    }

    pub fn clear(&mut self) {
        self.full_pattern.clear();
        self.unique_playlists.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.full_pattern.is_empty()
    }

    /// Recompute `unique_playlists` from the groups, in order of first appearance
    pub fn refresh_unique_playlists(&mut self) {
        let mut unique: Vec<String> = Vec::new();
        for entry in self.full_pattern.iter().flat_map(|group| &group.playlists) {
            if !unique.contains(&entry.id) {
                unique.push(entry.id.clone());
            }
        }
        self.unique_playlists = unique;
    }

    pub fn to_nodes(&self) -> Vec<PatternNode> {
        self.full_pattern.iter().map(PatternGroup::to_node).collect()
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let mut document: Self = serde_json::from_str(content)?;
        document.refresh_unique_playlists();
        Ok(document)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
