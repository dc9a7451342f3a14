//! Main solver interface
//!
//! Drives the turn protocol of a session: choose a guess, obtain its feedback,
//! record it, stop once solved or out of attempts.

use super::source::{FeedbackSource, Simulated};
use super::state::{MAX_ATTEMPTS, SolverState, Status};
use super::strategy::Strategy;
use crate::core::{Dictionary, FeedbackPattern, SolverError, Word};
use log::{debug, info, warn};

/// Session settings shared by every session of a solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Attempt budget per session
    pub max_attempts: usize,
    /// Opening guess to use instead of asking the strategy
    pub first_guess: Option<Word>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            first_guess: None,
        }
    }
}

/// Why a session ended without solving the puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Every attempt was used
    AttemptsExhausted,
    /// Every dictionary word was guessed without a consistent one left
    NoCandidatesRemaining,
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Failed(FailureReason),
}

/// A single turn of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: FeedbackPattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Full record of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub turns: Vec<Turn>,
    pub outcome: Outcome,
    pub max_attempts: usize,
}

impl SessionReport {
    /// Status as seen by callers; both failure reasons read as `Failed`
    #[must_use]
    pub const fn status(&self) -> Status {
        match self.outcome {
            Outcome::Solved => Status::Solved,
            Outcome::Failed(_) => Status::Failed,
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved)
    }

    /// Number of guesses made
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.turns.len()
    }

    /// Failure reason, if the session failed
    #[must_use]
    pub const fn failure_reason(&self) -> Option<FailureReason> {
        match self.outcome {
            Outcome::Solved => None,
            Outcome::Failed(reason) => Some(reason),
        }
    }
}

/// Main puzzle solver
///
/// Holds the dictionary, the guess strategy and the session settings. Sessions
/// borrow the dictionary, so one solver can run many sessions at once.
pub struct Solver<'d, S: Strategy> {
    strategy: S,
    dictionary: &'d Dictionary,
    config: SessionConfig,
}

impl<'d, S: Strategy> Solver<'d, S> {
    /// Create a new solver
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the attempt budget is zero or the
    /// configured first guess has the wrong length.
    pub fn new(
        strategy: S,
        dictionary: &'d Dictionary,
        config: SessionConfig,
    ) -> Result<Self, SolverError> {
        if config.max_attempts == 0 {
            return Err(SolverError::InvalidInput(
                "attempt budget must be at least 1".into(),
            ));
        }
        if let Some(first) = &config.first_guess
            && first.len() != dictionary.word_length()
        {
            return Err(SolverError::InvalidInput(format!(
                "first guess '{first}' has {} letters, expected {}",
                first.len(),
                dictionary.word_length()
            )));
        }

        Ok(Self {
            strategy,
            dictionary,
            config,
        })
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Start a fresh session over the whole dictionary
    ///
    /// # Errors
    /// Propagates `SolverState::new` errors.
    pub fn new_session(&self) -> Result<SolverState<'d>, SolverError> {
        SolverState::new(self.dictionary, self.config.max_attempts)
    }

    /// The guess to play next in `state`
    ///
    /// Uses the configured first guess on an empty history, the strategy after.
    /// Once the candidate set is empty, falls back to untried words (see
    /// [`SolverState::choose_fallback_guess`]).
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidatesRemaining` if every dictionary word has
    /// been guessed without a consistent candidate left.
    pub fn next_guess<'s>(&'s self, state: &SolverState<'d>) -> Result<&'s Word, SolverError> {
        if state.history().is_empty()
            && let Some(first) = &self.config.first_guess
        {
            return Ok(first);
        }
        match state.choose_guess(&self.strategy) {
            Err(SolverError::NoCandidatesRemaining) => {
                state.choose_fallback_guess(&self.strategy)
            }
            other => other,
        }
    }

    /// Run one session to completion against `source`
    ///
    /// Feedback that rules out every dictionary word does not end the session:
    /// untried words are guessed until the budget is spent. Only when no
    /// untried word is left does it fail early, with the reason kept on the
    /// report.
    ///
    /// # Errors
    /// Returns an error if the source fails or hands back malformed feedback.
    pub fn play<F: FeedbackSource + ?Sized>(&self, source: &mut F) -> anyhow::Result<SessionReport> {
        let mut state = self.new_session()?;
        let mut turns = Vec::with_capacity(self.config.max_attempts);

        loop {
            let attempt = state.attempts_used() + 1;
            let candidates_before = state.candidates().len();

            let guess = match self.next_guess(&state) {
                Ok(guess) => guess.clone(),
                Err(SolverError::NoCandidatesRemaining) => {
                    warn!(
                        "every dictionary word was tried after {} attempts",
                        state.attempts_used()
                    );
                    let outcome = Outcome::Failed(FailureReason::NoCandidatesRemaining);
                    return Ok(self.report(turns, outcome));
                }
                Err(e) => return Err(e.into()),
            };
            debug!("attempt {attempt}: {candidates_before} candidates, guessing {guess}");

            let feedback = source.feedback_for(&guess)?;
            let status = state.record_feedback(&guess, feedback.clone())?;
            let candidates_after = state.candidates().len();
            if candidates_after == 0 && candidates_before > 0 {
                warn!("feedback for {guess} rules out every candidate; guessing untried words");
            }

            info!(
                "attempt {attempt}: {} {feedback} ({candidates_after} candidates left)",
                guess.text().to_uppercase()
            );

            turns.push(Turn {
                guess,
                feedback,
                candidates_before,
                candidates_after,
            });

            match status {
                Status::InProgress => {}
                Status::Solved => {
                    info!("solved in {attempt} attempts");
                    return Ok(self.report(turns, Outcome::Solved));
                }
                Status::Failed => {
                    warn!("attempt budget of {} exhausted", self.config.max_attempts);
                    let outcome = Outcome::Failed(FailureReason::AttemptsExhausted);
                    return Ok(self.report(turns, outcome));
                }
            }
        }
    }

    /// Simulate a session against a known secret
    ///
    /// # Errors
    /// Returns an error if `secret` has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::{Dictionary, Word};
    /// use wordle_csp::solver::{DistinctLettersStrategy, SessionConfig, Solver, Status};
    ///
    /// let words = ["crane", "slate", "trace"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let dictionary = Dictionary::new(words).unwrap();
    /// let solver = Solver::new(DistinctLettersStrategy, &dictionary, SessionConfig::default()).unwrap();
    ///
    /// let report = solver.solve(&Word::new("trace").unwrap()).unwrap();
    /// assert_eq!(report.status(), Status::Solved);
    /// assert_eq!(report.attempts(), 2);
    /// ```
    pub fn solve(&self, secret: &Word) -> anyhow::Result<SessionReport> {
        self.play(&mut Simulated::new(secret.clone()))
    }

    fn report(&self, turns: Vec<Turn>, outcome: Outcome) -> SessionReport {
        SessionReport {
            turns,
            outcome,
            max_attempts: self.config.max_attempts,
        }
    }
}
