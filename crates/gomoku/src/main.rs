//! Gomoku - unified CLI
//!
//! Hot-seat matches and preferences management.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SettingsArgs};
use gomoku::{Preferences, play_matches};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { settings } => run_play(&cli.config, settings),
        Command::Validate { settings, save } => run_validate(&cli.config, settings, save),
        Command::ShowConfig => run_show_config(&cli.config),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Loads preferences and applies command-line overrides.
#[instrument(skip(settings))]
fn load_preferences(config: &Path, settings: SettingsArgs) -> Result<Preferences> {
    let prefs = Preferences::from_file(config)
        .with_context(|| format!("Failed to load preferences from {}", config.display()))?;
    Ok(prefs.with_overrides(
        settings.player1,
        settings.player2,
        settings.size,
        settings.win_length,
    ))
}

/// Plays hot-seat matches on stdin/stdout until the players stop.
#[instrument(skip(settings))]
fn run_play(config: &Path, settings: SettingsArgs) -> Result<()> {
    let prefs = load_preferences(config, settings)?;
    prefs.validate()?;

    info!(
        size = prefs.size(),
        win_length = prefs.win_length(),
        "Starting session"
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let outcomes = play_matches(&prefs, stdin.lock(), &mut stdout)?;
    info!(matches = outcomes.len(), "Session finished");
    Ok(())
}

/// Validates settings and optionally writes them back.
#[instrument(skip(settings))]
fn run_validate(config: &Path, settings: SettingsArgs, save: bool) -> Result<()> {
    let prefs = load_preferences(config, settings)?;
    prefs.validate()?;
    println!("Settings are valid");

    if save {
        prefs.save(config)?;
        println!("Saved to {}", config.display());
    }
    Ok(())
}

/// Prints the effective preferences.
#[instrument]
fn run_show_config(config: &Path) -> Result<()> {
    let prefs = Preferences::from_file(config)?;
    print!("{}", toml::to_string_pretty(&prefs).context("Failed to serialize preferences")?);
    Ok(())
}
