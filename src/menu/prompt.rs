//! Console prompts
//!
//! Every prompt parses the entered line into a `Result`. Entries that fail to
//! parse are reported and asked for again; only a closed input stream ends a
//! prompt early.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::{TaxnetError, TaxnetResult};
use crate::models::{parse_percent, Money};

/// Reads answers from `reader` after writing prompts to `writer`
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// The console stream prompts and reports are written to
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the prompter, returning the output stream
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print `prompt` and return the next line, trimmed
    pub fn read_line(&mut self, prompt: &str) -> TaxnetResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt
            writeln!(self.writer)?;
            return Err(TaxnetError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until `parse` accepts the entry
    ///
    /// Invalid-input errors are printed and the prompt repeats. Any other
    /// error is returned as-is.
    pub fn ask<T, F>(&mut self, prompt: &str, parse: F) -> TaxnetResult<T>
    where
        F: Fn(&str) -> TaxnetResult<T>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_invalid_input() => {
                    warn!(error = %e, "rejected console entry");
                    writeln!(self.writer, "{}. Please try again.", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Prompt for an amount of money
    pub fn ask_money(&mut self, prompt: &str) -> TaxnetResult<Money> {
        self.ask(prompt, parse_money)
    }

    /// Prompt for a percentage
    pub fn ask_percent(&mut self, prompt: &str) -> TaxnetResult<f64> {
        self.ask(prompt, parse_rate)
    }

    /// Prompt for a whole number; `field` names it in error messages
    pub fn ask_integer(&mut self, prompt: &str, field: &'static str) -> TaxnetResult<i64> {
        self.ask(prompt, |line| parse_integer(line, field))
    }
}

fn parse_money(line: &str) -> TaxnetResult<Money> {
    Money::parse(line).map_err(|_| TaxnetError::invalid_input("amount", line))
}

fn parse_rate(line: &str) -> TaxnetResult<f64> {
    parse_percent(line).map_err(|_| TaxnetError::invalid_input("percentage", line))
}

pub(crate) fn parse_integer(line: &str, field: &'static str) -> TaxnetResult<i64> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| TaxnetError::invalid_input(field, line))
}
