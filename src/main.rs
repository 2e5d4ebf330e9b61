mod cli;
mod cli_handlers;

use clap::Parser;
use cli::Cli;
use playlist_mixer::modules::ui::terminal::renderer::TerminalRenderer;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = cli_handlers::from_cli(cli.command).execute() {
        TerminalRenderer::new().print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
