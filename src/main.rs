//! Grid Games - text-mode runner for the tic-tac-toe variant family.

use anyhow::Result;
use clap::Parser;
use grid_games::{Cli, Controller, GridGameModel, Symbol, View};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the play loop owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(
        variant = %cli.variant,
        size = cli.size,
        players = cli.player_count,
        "starting session"
    );

    let symbols = cli.symbols.into_iter().map(Symbol::Token).collect();
    let model = GridGameModel::new(cli.size, symbols, cli.player_count, cli.variant)?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut controller = Controller::new(model, View::new(), stdin, stdout);
    controller.run()
}
