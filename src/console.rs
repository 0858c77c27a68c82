//! Line-oriented prompting over any `BufRead`/`Write` pair.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::{SessionError, SessionResult};

pub(crate) const SEPARATOR_WIDTH: usize = 40;

/// Blocking question/answer console.
///
/// Answers are read one line at a time. End of input is reported as
/// [`SessionError::InputClosed`] so that retry loops terminate.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output, for multi-line rendering.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl AsRef<str>) -> SessionResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    pub fn separator(&mut self) -> SessionResult<()> {
        self.say("-".repeat(SEPARATOR_WIDTH))
    }

    /// Show `prompt` and return the raw answer line without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> SessionResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask `prompt` until `parse` accepts the answer.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> SessionResult<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => tracing::debug!(%answer, "rejected input"),
            }
        }
    }

    /// Ask a yes/no question until the answer is exactly `yes` or `no`
    /// (trimmed, case-insensitive).
    pub fn ask_yes_no(&mut self, prompt: &str) -> SessionResult<bool> {
        self.ask_until(prompt, parse_yes_no)
    }
}

/// `yes` → `true`, `no` → `false`, anything else (including empty) → `None`.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
