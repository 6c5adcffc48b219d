use crate::cli::ux::TypewriterPresenter;
use anyhow::{Context, Result};
use console::Term;
use mindcare_core::config::Settings;
use mindcare_core::conversation::Conversation;
use mindcare_core::responses::ResponseTable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub mod repl;
mod test_utils;

pub use repl::{ExitReason, InputError, InputSource, LineEditor};

/// Starts an interactive chat session on the terminal.
///
/// `seed` makes reply selection reproducible; otherwise the generator is
/// seeded from system entropy.
pub fn execute(settings: &Settings, seed: Option<u64>) -> Result<ExitReason> {
    let rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
    let mut conversation = Conversation::new(ResponseTable::builtin(), rng);
    let mut input = LineEditor::new().context("Failed to initialize line editor")?;
    let mut presenter = TypewriterPresenter::new(Term::stdout(), settings.typing_delay());

    let reason = repl::run(
        &mut conversation,
        &mut input,
        &mut presenter,
        settings.show_banner,
    )?;
    info!(?reason, "Chat session ended");
    Ok(reason)
}
