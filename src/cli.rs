//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Mark;

/// Tic-tac-toe engine driver
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play or replay tic-tac-toe sessions from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Override the starting mark (X or O)
    #[arg(long, global = true)]
    pub start: Option<Mark>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Click cells in order and print the result
    Play {
        /// Cells to play, as indices (0-8) or labels such as `top-left`
        moves: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay an event script and print the result
    Replay {
        /// Script file, one step per line
        script: PathBuf,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
