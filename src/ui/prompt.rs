//! Line-oriented prompts over any buffered reader.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `label` and read one line, without the trailing newline.
    ///
    /// Returns `AppError::InputClosed` once the input is exhausted. Bytes
    /// that are not valid UTF-8 are replaced, never rejected.
    pub fn ask(&mut self, label: &str) -> AppResult<String> {
        print!("{label}");
        io::stdout().flush().ok();

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            println!();
            return Err(AppError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read one free-text label, trimmed and lowercased.
    pub fn ask_label(&mut self, label: &str) -> AppResult<String> {
        self.ask(label).map(|s| normalize(&s))
    }

    /// Block until the user presses Enter.
    pub fn pause(&mut self, label: &str) -> AppResult<()> {
        self.ask(label).map(|_| ())
    }
}

pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
