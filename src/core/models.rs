use serde::{Deserialize, Serialize};
use std::fmt;

/// One playable entry of a source sequence.
///
/// Conjoined playlists hold `Group`s: the ids of every source at the same
/// position, played back to back. Serialized untagged so a single item is a
/// JSON string and a group is a JSON array of strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Item {
    Single(String),
    Group(Vec<String>),
}

impl Item {
    /// Identifiers in playback order
    pub fn ids(&self) -> &[String] {
        match self {
            Item::Single(id) => std::slice::from_ref(id),
            Item::Group(ids) => ids,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Item::Group(_))
    }
}

impl From<&str> for Item {
    fn from(id: &str) -> Self {
        Item::Single(id.to_string())
    }
}

impl From<String> for Item {
    fn from(id: String) -> Self {
        Item::Single(id)
    }
}

impl From<Vec<String>> for Item {
    fn from(ids: Vec<String>) -> Self {
        Item::Group(ids)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Single(id) => write!(f, "{}", id),
            Item::Group(ids) => write!(f, "[{}]", ids.join(" + ")),
        }
    }
}

/// Flatten shuffled items into the id queue handed to the player.
/// Groups expand in place, keeping their members adjacent.
pub fn flatten_items<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .flat_map(|item| item.ids().iter().cloned())
        .collect()
}

/// A stored playlist, in the shape the browser host kept in local storage
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRecord {
    pub id: String,
    pub title: String,
    pub available_video_ids: Vec<Item>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<serde_json::Value>,
}

impl PlaylistRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            available_video_ids: items,
            thumbnails: None,
        }
    }

    pub fn len(&self) -> usize {
        self.available_video_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available_video_ids.is_empty()
    }

    pub fn is_conjoined(&self) -> bool {
        self.available_video_ids.iter().any(Item::is_group)
    }
}

impl fmt::Display for PlaylistRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{} items]", self.title, self.id, self.len())
    }
}
