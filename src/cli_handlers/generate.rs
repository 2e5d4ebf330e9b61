use super::{CliCommand, open_storage};
use anyhow::{Context, Result};
use playlist_mixer::application::generator::QueueGenerator;
use playlist_mixer::core::traits::StorageBackend;
use playlist_mixer::modules::ui::terminal::renderer::TerminalRenderer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

pub struct GenerateCommand {
    pub consistent_order: bool,
    pub allow_repeats: bool,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

impl CliCommand for GenerateCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let (settings, storage) = open_storage()?;
        let state = storage.load()?;
        let ui = TerminalRenderer::new();

        let mut options = settings.shuffle_options();
        options.consistent_order |= self.consistent_order;
        options.avoid_immediate_repeat &= !self.allow_repeats;

        let generator = QueueGenerator::new(&state, options);
        let queue = match self.seed {
            Some(seed) => generator.generate_with(&mut StdRng::seed_from_u64(seed))?,
            None => generator.generate()?,
        };

        match self.output {
            Some(path) => {
                let mut content = queue.join("\n");
                content.push('\n');
                fs::write(&path, content).with_context(|| format!("Could not write {:?}", path))?;
                ui.print_message(&format!("✓ Wrote {} ids to {:?}", queue.len(), path));
            }
            None => ui.print_queue(&queue),
        }

        Ok(())
    }
}
