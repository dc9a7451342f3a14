//! Where feedback comes from
//!
//! A session does not care whether feedback is computed locally against a known
//! secret or typed in by someone playing the real puzzle. Both sit behind
//! [`FeedbackSource`].

use crate::core::{FeedbackPattern, Word, evaluate};
use anyhow::{Result, bail};
use std::fmt;
use std::io::{BufRead, Write};

/// Supplies the feedback for each guess of a session
pub trait FeedbackSource {
    /// Feedback for `guess` against the (possibly unknown) secret
    ///
    /// # Errors
    /// Returns an error if the feedback cannot be obtained.
    fn feedback_for(&mut self, guess: &Word) -> Result<FeedbackPattern>;
}

/// Computes feedback with the feedback engine against a known secret
#[derive(Debug, Clone)]
pub struct Simulated {
    secret: Word,
}

impl Simulated {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

impl FeedbackSource for Simulated {
    fn feedback_for(&mut self, guess: &Word) -> Result<FeedbackPattern> {
        Ok(evaluate(guess, &self.secret)?)
    }
}

/// Returned by [`PromptJudge`] when the user quits mid-session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

impl fmt::Display for Aborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session aborted by the judge")
    }
}

impl std::error::Error for Aborted {}

/// Live judge: prints each guess and reads the feedback typed back
///
/// Accepts `G`/`Y`/`B` patterns (see [`FeedbackPattern`]'s parser), `win` as a
/// shortcut for all-exact, and `quit` to abort. Invalid lines are re-prompted.
pub struct PromptJudge<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptJudge<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> FeedbackSource for PromptJudge<R, W> {
    fn feedback_for(&mut self, guess: &Word) -> Result<FeedbackPattern> {
        loop {
            write!(
                self.writer,
                "Guess {} - enter feedback (G/Y/B, 'win' or 'quit'): ",
                guess.text().to_uppercase()
            )?;
            self.writer.flush()?;

            let Some(input) = self.read_line()? else {
                bail!("input closed before feedback for {guess} was given");
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Err(Aborted.into()),
                "win" | "solved" => return Ok(FeedbackPattern::solved(guess.len())),
                _ => match input.parse::<FeedbackPattern>() {
                    Ok(pattern) if pattern.len() == guess.len() => return Ok(pattern),
                    Ok(_) => writeln!(
                        self.writer,
                        "Feedback must have exactly {} marks.",
                        guess.len()
                    )?,
                    Err(e) => writeln!(self.writer, "{e}")?,
                },
            }
        }
    }
}
