//! Mindcare cli definition and entrypoint.
pub mod chat;
pub mod ux;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mindcare_core::config::{Settings, get_settings};
use tracing::debug;

use crate::log::setup_logging;

/// Mindcare - a calm companion for checking in on how you feel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show verbose logs.
    #[arg(short, long)]
    verbose: bool,

    /// Settings file, defaults to mindcare.yml in the config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print replies at once instead of typing them out.
    #[arg(long)]
    no_typing: bool,

    /// Milliseconds between typed characters.
    #[arg(long, value_name = "MS")]
    delay: Option<u64>,

    /// Seed for reply selection.
    #[arg(long, hide = true)]
    seed: Option<u64>,
}

impl Cli {
    /// Applies command line overrides on top of the loaded settings.
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(delay) = self.delay {
            settings.typing_delay_ms = delay;
        }
        if self.no_typing {
            settings.typing_effect = false;
        }
        settings
    }
}

/// Runs the main CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        setup_logging().context("Failed to set up logging")?;
    }

    let settings = get_settings(cli.config.clone()).context("Failed to load settings")?;
    let settings = cli.apply(settings);
    debug!(?settings, "Starting chat");

    chat::execute(&settings, cli.seed)?;
    Ok(())
}
