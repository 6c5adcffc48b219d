mod presenter;
mod typewriter;

pub use presenter::{ChatMessageType, style_chat_text};
pub use typewriter::{Presenter, TypewriterPresenter};

/// Prints a formatted error message to stderr.
pub fn present_error(error: anyhow::Error) {
    let error_text = style_chat_text("ERROR:", ChatMessageType::Error);
    eprintln!("\n{error_text} {error:#}");
}
