use super::{CliCommand, open_storage};
use anyhow::Result;
use playlist_mixer::core::traits::StorageBackend;
use playlist_mixer::modules::library::provider_for;
use playlist_mixer::modules::ui::terminal::renderer::TerminalRenderer;
use std::path::PathBuf;

pub struct ImportCommand {
    pub path: PathBuf,
}

impl CliCommand for ImportCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let (_, storage) = open_storage()?;
        let mut state = storage.load()?;
        let ui = TerminalRenderer::new();

        let record = provider_for(&self.path).fetch()?;
        let summary = record.to_string();
        let replaced = state.library.import(record)?;
        storage.save(&state)?;

        let verb = if replaced { "Updated" } else { "Imported" };
        ui.print_message(&format!("✓ {}: {}", verb, summary));

        Ok(())
    }
}
