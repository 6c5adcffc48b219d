//! Keyword dispatch for a single chat session.
use rand::Rng;
use tracing::debug;

use crate::responses::{ResponseTable, Topic};

pub const EXIT_KEYWORD: &str = "exit";
pub const SPEAKER_LABEL: &str = "Mind_Care";
pub const FALLBACK_MESSAGE: &str = "I may not fully understand, but I’m here for you. 💬";
pub const FAREWELL: [&str; 2] = [
    "\n💚 Remember: Taking care of your mind is self-love.",
    "See you soon — stay kind to yourself 🌷",
];

/// Trims surrounding whitespace, then lowercases.
pub fn normalize_input(input: &str) -> String {
    input.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Running,
    Terminated,
}

/// Outcome of dispatching one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Topic { topic: Topic, text: String },
    Fallback,
    Farewell,
}

impl Reply {
    /// Lines to present, in order, for this reply.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Reply::Topic { text, .. } => vec![format!("{SPEAKER_LABEL}: {text}")],
            Reply::Fallback => vec![format!("{SPEAKER_LABEL}: {FALLBACK_MESSAGE}")],
            Reply::Farewell => FAREWELL.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct Conversation<'a, R: Rng> {
    table: &'a ResponseTable,
    rng: R,
    state: ConversationState,
}

impl<'a, R: Rng> Conversation<'a, R> {
    pub fn new(table: &'a ResponseTable, rng: R) -> Self {
        Self {
            table,
            rng,
            state: ConversationState::Running,
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ConversationState::Running
    }

    /// Dispatches one raw line of user input.
    ///
    /// Once the conversation is terminated every further call returns
    /// `Reply::Farewell` without consuming randomness.
    pub fn respond(&mut self, input: &str) -> Reply {
        if !self.is_running() {
            return Reply::Farewell;
        }

        let normalized = normalize_input(input);
        if normalized == EXIT_KEYWORD {
            debug!("Exit keyword received");
            self.state = ConversationState::Terminated;
            return Reply::Farewell;
        }

        let picked = Topic::from_keyword(&normalized)
            .and_then(|topic| Some((topic, self.table.pick(topic, &mut self.rng)?)));
        match picked {
            Some((topic, text)) => {
                debug!(%topic, "Dispatched topic reply");
                Reply::Topic {
                    topic,
                    text: text.to_string(),
                }
            }
            None => {
                debug!("Unrecognized input, using fallback");
                Reply::Fallback
            }
        }
    }

    /// Ends the conversation without an exit keyword, e.g. when input closes.
    pub fn close(&mut self) {
        self.state = ConversationState::Terminated;
    }
}
