#![cfg(test)]

//! Test utilities for chat modules

#![allow(dead_code)]

use super::repl::{InputError, InputSource};
use crate::cli::ux::Presenter;
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptEnd {
    Closed,
    Interrupted,
    Failed,
}

/// Feeds a fixed list of lines, then ends the way the test asks.
pub struct ScriptedInput {
    lines: VecDeque<String>,
    end: ScriptEnd,
    /// Every prompt shown, in order.
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            end: ScriptEnd::Closed,
            prompts: Vec::new(),
        }
    }

    pub fn interrupt_at_end(mut self) -> Self {
        self.end = ScriptEnd::Interrupted;
        self
    }

    pub fn fail_at_end(mut self) -> Self {
        self.end = ScriptEnd::Failed;
        self
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_string());
        match self.lines.pop_front() {
            Some(line) => Ok(line),
            None => match self.end {
                ScriptEnd::Closed => Err(InputError::Closed),
                ScriptEnd::Interrupted => Err(InputError::Interrupted),
                ScriptEnd::Failed => Err(InputError::Io(io::Error::other("tty lost"))),
            },
        }
    }
}

/// Keeps each presented message as a separate line.
#[derive(Default)]
pub struct RecordingPresenter {
    pub lines: Vec<String>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}

/// Behaves like stdout after the reader went away.
pub struct ClosedOutput;

impl Presenter for ClosedOutput {
    fn present(&mut self, _text: &str) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}
