use clap::{Parser, Subcommand};
use playlist_mixer::utils::APP_NAME;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = "Interleave playlists by a repeating pattern into one shuffled queue", long_about = None)]
pub struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a playlist from a media directory or a playlist export file
    Import {
        /// Directory to scan, or exported playlist JSON
        path: PathBuf,
    },

    /// List stored playlists
    List,

    /// Fuzzy search stored playlists by title or id
    Search {
        query: String,
    },

    /// Zip playlists position by position into a new playlist
    Conjoin {
        /// Playlist ids, in conjoin order
        #[arg(required = true)]
        ids: Vec<String>,

        /// Title of the new playlist
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Build and manage the shuffle pattern
    Pattern {
        #[command(subcommand)]
        action: PatternAction,
    },

    /// Generate a shuffled queue from the saved pattern
    Generate {
        /// Replay each playlist's first shuffled order on every refill
        #[arg(long)]
        consistent_order: bool,

        /// Do not reshuffle to avoid back-to-back repeats
        #[arg(long)]
        allow_repeats: bool,

        /// Seed for a reproducible queue
        #[arg(long)]
        seed: Option<u64>,

        /// Write the queue to a file, one id per line
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or change settings
    Config {
        #[arg(long)]
        consistent_order: Option<bool>,

        #[arg(long)]
        avoid_repeats: Option<bool>,

        /// Where the playlists and pattern are stored
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum PatternAction {
    /// Append playlists to the draft group
    Add {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Save the draft group into the pattern
    Commit {
        /// How many times the group repeats
        #[arg(short, long, default_value_t = 1)]
        repeat: u32,
    },

    /// Show the saved pattern and the draft
    Show,

    /// Remove the saved pattern and the draft
    Clear,

    /// Write the saved pattern as JSON
    Export {
        file: PathBuf,
    },

    /// Replace the saved pattern with one read from JSON
    Import {
        file: PathBuf,
    },
}
