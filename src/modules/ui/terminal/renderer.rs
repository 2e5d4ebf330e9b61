use crate::application::state::Settings;
use crate::core::models::PlaylistRecord;
use crate::modules::shuffle::document::{PatternDocument, PatternGroup};

/// Plain line-oriented output for the CLI
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn print_message(&self, message: &str) {
        println!("{}", message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }

    pub fn print_playlist_list(&self, playlists: &[PlaylistRecord]) {
        let total = playlists.len();
        for (index, playlist) in playlists.iter().enumerate() {
            let marker = if playlist.is_conjoined() { " (conjoined)" } else { "" };
            println!("[{}/{}] {}{}", index + 1, total, playlist, marker);
        }
    }

    pub fn print_search_results(&self, query: &str, results: &[(usize, PlaylistRecord)]) {
        if results.is_empty() {
            println!("No playlists found matching: '{}'", query);
        } else {
            println!("Found {} matches:", results.len());
            for (index, playlist) in results {
                println!("[{}] {}", index + 1, playlist);
            }
        }
    }

    pub fn print_pattern(&self, pattern: &PatternDocument, draft: &PatternGroup) {
        if pattern.is_empty() {
            println!("Saved pattern: (empty)");
        } else {
            println!("Saved pattern:");
            for (index, group) in pattern.full_pattern.iter().enumerate() {
                println!("  {}. {}", index + 1, group);
            }
        }

        if !draft.is_empty() {
            println!("Draft: {}", draft);
        }
    }

    pub fn print_queue(&self, queue: &[String]) {
        for id in queue {
            println!("{}", id);
        }
    }

    pub fn print_settings(&self, settings: &Settings) {
        println!("consistent_order = {}", settings.consistent_order);
        println!("avoid_repeats    = {}", settings.avoid_repeats);
        match &settings.data_file {
            Some(path) => println!("data_file        = {:?}", path),
            None => println!("data_file        = (default)"),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
