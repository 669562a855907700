//! Command-line interface for gomoku.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Gomoku - N-in-a-row on a square board
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Hot-seat N-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the preferences file
    #[arg(short, long, global = true, default_value = "gomoku.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat match
    Play {
        /// Settings overriding the preferences file
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Validate settings, optionally saving them
    Validate {
        /// Settings overriding the preferences file
        #[command(flatten)]
        settings: SettingsArgs,

        /// Write the settings to the preferences file if valid
        #[arg(long)]
        save: bool,
    },

    /// Print the effective preferences as TOML
    ShowConfig,
}

/// Per-run overrides of the stored preferences.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Name of the side moving first
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the side moving second
    #[arg(long)]
    pub player2: Option<String>,

    /// Board side (3-20)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Run length needed to win (3 to board side)
    #[arg(short, long)]
    pub win_length: Option<usize>,
}
