use crate::application::state::AppState;
use crate::core::models::PlaylistRecord;
use anyhow::Result;

/// Abstraction for persistent storage
pub trait StorageBackend {
    /// Load application state
    fn load(&self) -> Result<AppState>;

    /// Save application state
    fn save(&self, state: &AppState) -> Result<()>;
}

/// Somewhere a playlist can be fetched from.
///
/// Implementations resolve everything up front; the shuffle engine only ever
/// sees the finished record.
pub trait PlaylistProvider {
    fn fetch(&self) -> Result<PlaylistRecord>;
}
