use crate::cli::ux::{ChatMessageType, Presenter, style_chat_text};
use anyhow::Result;
use mindcare_core::conversation::{Conversation, Reply};
use rand::Rng;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, IsTerminal, Write};
use thiserror::Error;
use tracing::{debug, info};

pub const BANNER: [&str; 3] = [
    "🌿 Welcome to Mind_Care – Your Mental Wellness Companion 🌿",
    "I'm here to listen and guide you toward a calm mind.",
    "Not a substitute for professional care.\n",
];

pub const PROMPT: [&str; 2] = [
    "\nHow are you feeling today? (sad / stressed / happy / angry / lonely)",
    "Or type 'tips', 'motivation', or 'exit' to end the chat.",
];

pub const INPUT_PROMPT: &str = "🧘 You: ";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input stream closed")]
    Closed,
    #[error("Input interrupted")]
    Interrupted,
    #[error("Failed to read input")]
    Io(#[from] io::Error),
}

/// A source of user input lines.
pub trait InputSource {
    /// Shows `prompt` and blocks until a full line is available.
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError>;
}

/// Reads lines from the terminal with in-memory history.
///
/// rustyline does not print the prompt when stdin is piped, so the prompt is
/// written to stdout directly in that case.
pub struct LineEditor {
    editor: DefaultEditor,
    echo_prompt: bool,
}

impl LineEditor {
    pub fn new() -> Result<Self> {
        let config = rustyline::Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self {
            editor,
            echo_prompt: !io::stdin().is_terminal(),
        })
    }
}

fn write_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    out.write_all(prompt.as_bytes())?;
    out.flush()
}

impl InputSource for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        let prompt = if self.echo_prompt {
            write_prompt(&mut io::stdout(), prompt)?;
            ""
        } else {
            prompt
        };
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) => Err(InputError::Closed),
            Err(ReadlineError::Interrupted) => Err(InputError::Interrupted),
            Err(ReadlineError::Io(err)) => Err(InputError::Io(err)),
            Err(err) => Err(InputError::Io(io::Error::other(err))),
        }
    }
}

/// Why the chat loop ended. All of these are a normal, successful exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    ExitKeyword,
    InputClosed,
    Interrupted,
    OutputClosed,
}

/// Runs the chat loop until the user leaves or a stream closes.
pub fn run<R: Rng>(
    conversation: &mut Conversation<'_, R>,
    input: &mut impl InputSource,
    presenter: &mut impl Presenter,
    greet: bool,
) -> Result<ExitReason> {
    match converse(conversation, input, presenter, greet) {
        Err(err) if is_broken_pipe(&err) => {
            info!("Output closed, ending chat");
            conversation.close();
            Ok(ExitReason::OutputClosed)
        }
        other => other,
    }
}

fn converse<R: Rng>(
    conversation: &mut Conversation<'_, R>,
    input: &mut impl InputSource,
    presenter: &mut impl Presenter,
    greet: bool,
) -> Result<ExitReason> {
    if greet {
        present_all(presenter, &BANNER)?;
    }

    let prompt = style_chat_text(INPUT_PROMPT, ChatMessageType::Prompt).to_string();
    while conversation.is_running() {
        present_all(presenter, &PROMPT)?;

        let line = match input.read_line(&prompt) {
            Ok(line) => line,
            Err(InputError::Closed) => {
                info!("Input closed, ending chat");
                return say_goodbye(conversation, presenter, ExitReason::InputClosed);
            }
            Err(InputError::Interrupted) => {
                info!("Interrupted, ending chat");
                return say_goodbye(conversation, presenter, ExitReason::Interrupted);
            }
            Err(err) => return Err(err.into()),
        };

        let reply = conversation.respond(&line);
        present_all(presenter, &reply.lines())?;
    }

    debug!("Chat ended with exit keyword");
    Ok(ExitReason::ExitKeyword)
}

fn say_goodbye<R: Rng>(
    conversation: &mut Conversation<'_, R>,
    presenter: &mut impl Presenter,
    reason: ExitReason,
) -> Result<ExitReason> {
    conversation.close();
    present_all(presenter, &Reply::Farewell.lines())?;
    Ok(reason)
}

fn present_all<S: AsRef<str>>(presenter: &mut impl Presenter, lines: &[S]) -> io::Result<()> {
    for line in lines {
        presenter.present(line.as_ref())?;
    }
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
