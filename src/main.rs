use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordterm::cli::Cli;
use wordterm::core::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to stderr and only when asked.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let (config, words) = cli.into_game_config()?;

    let terminal = ratatui::init();
    let result = App::new(config, words).run(terminal).await;
    ratatui::restore();
    result
}
