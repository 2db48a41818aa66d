//! Strictly Gess - terminal front end
//!
//! Two players share one prompt; the engine rejects illegal moves and
//! announces the winner.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GessConfig;
use strictly_gess::{Board, Game};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GessConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Show => run_show(&config),
    }
}

/// Play one game on stdin/stdout.
fn run_play(config: &GessConfig) -> Result<()> {
    info!("Starting Gess session");

    let mut game = Game::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    play::run(&mut game, stdin.lock(), &mut stdout, config)?;
    Ok(())
}

/// Print the starting position.
fn run_show(config: &GessConfig) -> Result<()> {
    print!("{}", render::render(&Board::standard(), config));
    Ok(())
}
