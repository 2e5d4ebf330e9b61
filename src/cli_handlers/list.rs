use super::{CliCommand, open_storage};
use anyhow::Result;
use playlist_mixer::core::traits::StorageBackend;
use playlist_mixer::modules::ui::terminal::renderer::TerminalRenderer;
use playlist_mixer::utils::APP_NAME;

pub struct ListCommand;

impl CliCommand for ListCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let (_, storage) = open_storage()?;
        let state = storage.load()?;
        let ui = TerminalRenderer::new();

        if state.library.playlists.is_empty() {
            ui.print_error(&format!("Library is empty. Run '{} import <PATH>' first.", APP_NAME));
            return Ok(());
        }

        ui.print_playlist_list(&state.library.playlists);

        Ok(())
    }
}
