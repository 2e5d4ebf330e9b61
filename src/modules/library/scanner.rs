use crate::core::models::{Item, PlaylistRecord};
use crate::core::traits::PlaylistProvider;
use crate::utils::SUPPORTED_EXTENSIONS;
use anyhow::{Result, bail};
use log::info;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A local directory of media files, read as one playlist
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PlaylistProvider for DirectoryProvider {
    fn fetch(&self) -> Result<PlaylistRecord> {
        let root = self.root.canonicalize()?;
        if !root.is_dir() {
            bail!("The path provided is not a valid directory.");
        }

        let items: Vec<Item> = scan_directory(&root)?
            .into_iter()
            .map(|path| Item::Single(path.to_string_lossy().into_owned()))
            .collect();

        let title = root
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("Unknown")
            .to_string();

        info!("Scanned {:?}: {} media files", root, items.len());
        Ok(PlaylistRecord::new(root.to_string_lossy(), title, items))
    }
}

/// Media files under `root`, sorted by path
pub fn scan_directory(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_media_file(e.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

fn is_media_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn directory_becomes_playlist_of_media_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("disc2");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("b.mp4"), b"").unwrap();
        fs::write(dir.path().join("a.MKV"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(nested.join("c.mp3"), b"").unwrap();

        let record = DirectoryProvider::new(dir.path()).fetch().unwrap();
        let names: Vec<String> = record
            .available_video_ids
            .iter()
            .map(|item| {
                Path::new(&item.to_string())
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();

        assert_eq!(names, vec!["a.MKV", "b.mp4", "c.mp3"]);
        assert_eq!(record.id, dir.path().canonicalize().unwrap().to_string_lossy());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DirectoryProvider::new(dir.path().join("nope")).fetch().is_err());
    }
}
