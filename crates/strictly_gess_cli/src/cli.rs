//! Command-line interface for strictly_gess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Gess - play Gess in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_gess")]
#[command(about = "Two-player Gess at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a two-player game on standard input
    Play,

    /// Print the standard starting board
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::try_parse_from(["strictly_gess", "play", "--config", "gess.toml"])
            .expect("valid arguments");
        assert_eq!(cli.command, Command::Play);
        assert_eq!(cli.config, Some(PathBuf::from("gess.toml")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["strictly_gess"]).is_err());
    }
}
