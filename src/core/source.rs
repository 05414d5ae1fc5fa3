//! Where input tokens come from
//!
//! The accumulator only ever asks for "the next token"; whether that means
//! prompting a terminal or popping a pre-recorded list is decided here.

use crate::error::{Result, TourError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// A lazily produced sequence of raw text tokens
pub trait TokenSource {
    /// Request the next token, showing `prompt` if the source is interactive.
    ///
    /// Returns `Ok(None)` once the source has nothing more to give.
    fn next_token(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompts on a writer and reads one line per token
pub struct StdinSource<R: BufRead, W: Write> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> StdinSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl StdinSource<std::io::StdinLock<'static>, std::io::Stdout> {
    /// A source reading the process's standard input
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TokenSource for StdinSource<R, W> {
    fn next_token(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt).map_err(TourError::stdout_write)?;
        self.prompt_out.flush().map_err(TourError::stdout_write)?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|source| TourError::InputRead { source })?;
        if read == 0 {
            return Ok(None);
        }

        let token = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(token))
    }
}

/// Replays a fixed list of tokens
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    tokens: VecDeque<String>,
    served: usize,
}

impl ScriptedSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            served: 0,
        }
    }

    /// Tokens handed out so far
    pub fn served(&self) -> usize {
        self.served
    }

    /// Tokens not yet handed out
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl TokenSource for ScriptedSource {
    fn next_token(&mut self, _prompt: &str) -> Result<Option<String>> {
        let token = self.tokens.pop_front();
        if token.is_some() {
            self.served += 1;
        }
        Ok(token)
    }
}
