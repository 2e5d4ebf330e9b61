//! Interleave several playlists according to a repeating, weighted pattern
//! and produce one shuffled queue that avoids immediate repeats.

pub mod application;
pub mod core;
pub mod modules;
pub mod utils;

pub use crate::core::error::{Result, ShuffleError};
pub use crate::core::models::{Item, PlaylistRecord, flatten_items};
pub use crate::modules::shuffle::{
    Interleaver, PatternNode, ShuffleOptions, SourceRegistry, conjoin_lists, expand,
};
