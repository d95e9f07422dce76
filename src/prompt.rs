//! Line input for interactive fallbacks
//!
//! Both tools ask for their argument when none is given on the command
//! line. The reader is injected so tests can supply canned answers.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Something that can answer a prompt with one line of text.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if BufRead::read_line(self, &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Print `message` on its own line, then read the answer from `input`.
///
/// Fails if input ends before a line arrives.
pub fn ask(message: &str, input: &mut impl LineSource, out: &mut impl Write) -> Result<String> {
    writeln!(out, "{message}")?;
    out.flush()?;

    match input.next_line()? {
        Some(answer) => Ok(answer),
        None => bail!("No input received for prompt: {message}"),
    }
}
