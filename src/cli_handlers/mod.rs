mod conjoin;
mod generate;
mod import;
mod list;
mod pattern;
mod search;
mod settings;

pub use conjoin::ConjoinCommand;
pub use generate::GenerateCommand;
pub use import::ImportCommand;
pub use list::ListCommand;
pub use pattern::PatternCommand;
pub use search::SearchCommand;
pub use settings::ConfigCommand;

use crate::cli::Commands;
use anyhow::Result;
use playlist_mixer::application::state::Settings;
use playlist_mixer::modules::storage::json_backend::JsonStorageBackend;
use playlist_mixer::modules::storage::settings_store::SettingsStore;

/// Every CLI command implements this trait.
///
/// Commands own their arguments and are consumed on execution, so they run exactly once.
pub trait CliCommand {
    fn execute(self: Box<Self>) -> Result<()>;
}

/// Converts a parsed [`Commands`] variant into a boxed [`CliCommand`] ready to execute.
pub fn from_cli(cmd: Commands) -> Box<dyn CliCommand> {
    match cmd {
        Commands::Import { path } => Box::new(ImportCommand { path }),
        Commands::List => Box::new(ListCommand),
        Commands::Search { query } => Box::new(SearchCommand { query }),
        Commands::Conjoin { ids, name } => Box::new(ConjoinCommand { ids, name }),
        Commands::Pattern { action } => Box::new(PatternCommand { action }),
        Commands::Generate { consistent_order, allow_repeats, seed, output } => {
            Box::new(GenerateCommand { consistent_order, allow_repeats, seed, output })
        }
        Commands::Config { consistent_order, avoid_repeats, data_file } => {
            Box::new(ConfigCommand { consistent_order, avoid_repeats, data_file })
        }
    }
}

/// Settings plus the state store they point at
fn open_storage() -> Result<(Settings, JsonStorageBackend)> {
    let settings = SettingsStore::new()?.load()?;
    let storage = match &settings.data_file {
        Some(path) => JsonStorageBackend::with_path(path)?,
        None => JsonStorageBackend::new()?,
    };
    Ok((settings, storage))
}
