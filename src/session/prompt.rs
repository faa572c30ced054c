//! Prompted input
//!
//! Reads whitespace-separated tokens from any buffered source and re-prompts
//! until a value parses. End of input surfaces as
//! [`LedgerError::InputClosed`].

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

/// Token-oriented prompter over an input and an output stream
pub struct Prompter<R, W> {
    reader: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, output: W) -> Self {
        Self {
            reader,
            output,
            pending: VecDeque::new(),
        }
    }

    /// The output stream prompts are written to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the prompter, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next whitespace-separated token, reading more lines as needed
    pub fn next_token(&mut self) -> LedgerResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(LedgerError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Write `prompt` and read one token
    pub fn prompt_token(&mut self, prompt: &str) -> LedgerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.next_token()
    }

    /// Prompt until the token parses as a decimal amount
    pub fn prompt_money(&mut self, prompt: &str, retry: &str) -> LedgerResult<Money> {
        self.prompt_money_where(prompt, retry, |_| true)
    }

    /// Prompt until the token parses as a non-negative decimal amount
    pub fn prompt_amount(&mut self, prompt: &str, retry: &str) -> LedgerResult<Money> {
        self.prompt_money_where(prompt, retry, |m| !m.is_negative())
    }

    fn prompt_money_where(
        &mut self,
        prompt: &str,
        retry: &str,
        accept: impl Fn(Money) -> bool,
    ) -> LedgerResult<Money> {
        loop {
            let token = self.prompt_token(prompt)?;
            match Money::parse(&token) {
                Ok(amount) if accept(amount) => return Ok(amount),
                Ok(amount) => debug!(%amount, "amount rejected"),
                Err(e) => debug!(error = %e, "amount did not parse"),
            }
            writeln!(self.output, "{}", retry)?;
        }
    }

    /// Prompt until the token is a whole number of at least 1
    pub fn prompt_position(&mut self, prompt: &str, retry: &str) -> LedgerResult<usize> {
        loop {
            let token = self.prompt_token(prompt)?;
            match token.parse::<usize>() {
                Ok(n) if n >= 1 => return Ok(n),
                _ => writeln!(self.output, "{}", retry)?,
            }
        }
    }

    /// Yes/no question; only a token starting with `y` or `Y` counts as yes
    pub fn prompt_yes_no(&mut self, prompt: &str) -> LedgerResult<bool> {
        let token = self.prompt_token(prompt)?;
        Ok(matches!(token.chars().next(), Some('y') | Some('Y')))
    }
}
