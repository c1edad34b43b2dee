//! Line based terminal I/O used by every prompt.
//!
//! Prompts talk to a [`Console`] instead of stdin/stdout directly, so the same
//! code runs against the real terminal and against scripted input in tests.

use std::collections::VecDeque;
use std::io::{self, stdin, stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use csv_labeler_core::error::{Error, Result};

pub trait Console {
    /// Prints `prompt` without a newline and reads one line, without its line ending.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and when the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Prints `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Fails if the output cannot be written.
    fn print_line(&mut self, text: &str) -> Result<()>;

    /// Clears the screen.
    ///
    /// # Errors
    ///
    /// Fails if the output cannot be written.
    fn clear(&mut self) -> Result<()>;
}

fn input_closed() -> Error {
    Error::Stdio(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "input was closed",
    ))
}

/// Console backed by the process's stdin and stdout.
#[derive(Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            return Err(input_closed());
        }

        let line_length = input.trim_end_matches(['\n', '\r']).len();
        input.truncate(line_length);
        Ok(input)
    }

    fn print_line(&mut self, text: &str) -> Result<()> {
        let mut stdout = stdout();
        writeln!(stdout, "{text}")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let mut stdout = stdout();
        queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        stdout.flush()?;
        Ok(())
    }
}

/// Console that answers prompts from a fixed list of lines and records everything printed.
///
/// Input lines are echoed into the transcript after their prompt, the way
/// they would appear in a terminal.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: String,
    clear_count: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of times the screen was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Input lines that were not consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push_str(prompt);
        let line = self.input.pop_front().ok_or_else(input_closed)?;
        self.transcript.push_str(&line);
        self.transcript.push('\n');
        Ok(line)
    }

    fn print_line(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clear_count += 1;
        Ok(())
    }
}
