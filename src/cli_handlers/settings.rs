use super::CliCommand;
use anyhow::Result;
use playlist_mixer::modules::storage::settings_store::SettingsStore;
use playlist_mixer::modules::ui::terminal::renderer::TerminalRenderer;
use std::path::PathBuf;

pub struct ConfigCommand {
    pub consistent_order: Option<bool>,
    pub avoid_repeats: Option<bool>,
    pub data_file: Option<PathBuf>,
}

impl CliCommand for ConfigCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let store = SettingsStore::new()?;
        let mut settings = store.load()?;
        let ui = TerminalRenderer::new();

        let changed = self.consistent_order.is_some()
            || self.avoid_repeats.is_some()
            || self.data_file.is_some();

        if let Some(consistent_order) = self.consistent_order {
            settings.consistent_order = consistent_order;
        }
        if let Some(avoid_repeats) = self.avoid_repeats {
            settings.avoid_repeats = avoid_repeats;
        }
        if let Some(data_file) = self.data_file {
            settings.data_file = Some(data_file);
        }

        if changed {
            store.save(&settings)?;
            ui.print_message("✓ Settings updated");
        }
        ui.print_settings(&settings);

        Ok(())
    }
}
