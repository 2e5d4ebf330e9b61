use super::{CliCommand, open_storage};
use crate::cli::PatternAction;
use anyhow::{Context, Result};
use playlist_mixer::core::traits::StorageBackend;
use playlist_mixer::modules::shuffle::document::{PatternDocument, PatternGroup};
use playlist_mixer::modules::shuffle::pattern;
use playlist_mixer::modules::ui::terminal::renderer::TerminalRenderer;
use std::fs;

pub struct PatternCommand {
    pub action: PatternAction,
}

impl CliCommand for PatternCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let (_, storage) = open_storage()?;
        let mut state = storage.load()?;
        let ui = TerminalRenderer::new();

        match self.action {
            PatternAction::Add { ids } => {
                state.add_to_draft(&ids)?;
                storage.save(&state)?;
                ui.print_message(&format!("Draft: {}", state.draft));
            }
            PatternAction::Commit { repeat } => {
                state.commit_draft(repeat)?;
                storage.save(&state)?;
                ui.print_pattern(&state.pattern, &state.draft);
            }
            PatternAction::Show => {
                ui.print_pattern(&state.pattern, &state.draft);
            }
            PatternAction::Clear => {
                state.pattern.clear();
                state.draft = PatternGroup::default();
                storage.save(&state)?;
                ui.print_message("Pattern cleared.");
            }
            PatternAction::Export { file } => {
                fs::write(&file, state.pattern.to_json()?)
                    .with_context(|| format!("Could not write {:?}", file))?;
                ui.print_message(&format!("✓ Pattern written to {:?}", file));
            }
            PatternAction::Import { file } => {
                let content = fs::read_to_string(&file)
                    .with_context(|| format!("Could not read {:?}", file))?;
                let document = PatternDocument::from_json(&content)
                    .with_context(|| format!("Invalid pattern file {:?}", file))?;
                pattern::expand(&document.to_nodes())?;

                state.pattern = document;
                storage.save(&state)?;
                ui.print_pattern(&state.pattern, &state.draft);
            }
        }

        Ok(())
    }
}
