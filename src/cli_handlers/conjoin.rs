use super::{CliCommand, open_storage};
use anyhow::Result;
use log::info;
use playlist_mixer::core::traits::StorageBackend;
use playlist_mixer::modules::ui::terminal::renderer::TerminalRenderer;

pub struct ConjoinCommand {
    pub ids: Vec<String>,
    pub name: Option<String>,
}

impl CliCommand for ConjoinCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let (_, storage) = open_storage()?;
        let mut state = storage.load()?;
        let ui = TerminalRenderer::new();

        let record = state.library.conjoin(&self.ids, self.name.as_deref())?;
        info!("Conjoined {:?} into '{}'", self.ids, record.id);

        let summary = record.to_string();
        state.library.upsert(record);
        storage.save(&state)?;

        ui.print_message(&format!("✓ Conjoined playlist: {}", summary));

        Ok(())
    }
}
