pub mod export_reader;
pub mod scanner;
pub mod search_engine;

use crate::core::traits::PlaylistProvider;
use export_reader::ExportFileProvider;
use scanner::DirectoryProvider;
use std::path::Path;

/// Pick the provider for an import path: directories are scanned for media,
/// anything else is read as a playlist export
pub fn provider_for(path: &Path) -> Box<dyn PlaylistProvider> {
    if path.is_dir() {
        Box::new(DirectoryProvider::new(path))
    } else {
        Box::new(ExportFileProvider::new(path))
    }
}
