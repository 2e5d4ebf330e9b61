use super::{CliCommand, open_storage};
use anyhow::Result;
use playlist_mixer::core::traits::StorageBackend;
use playlist_mixer::modules::library::search_engine::SearchEngine;
use playlist_mixer::modules::ui::terminal::renderer::TerminalRenderer;
use playlist_mixer::utils::APP_NAME;

pub struct SearchCommand {
    pub query: String,
}

impl CliCommand for SearchCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let (_, storage) = open_storage()?;
        let state = storage.load()?;
        let ui = TerminalRenderer::new();

        if state.library.playlists.is_empty() {
            ui.print_error(&format!("Library is empty. Run '{} import <PATH>' first.", APP_NAME));
            return Ok(());
        }

        let search_engine = SearchEngine::new();
        let results = search_engine.search(&state.library.playlists, &self.query);
        let indexed = search_engine.search_result_to_index(results);

        ui.print_search_results(&self.query, &indexed);

        Ok(())
    }
}
