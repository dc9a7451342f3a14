//! Per-session solver state
//!
//! A [`SolverState`] owns the candidate set and the guess history of one puzzle
//! attempt. It is created per session, advanced one turn at a time and dropped
//! once the session is solved or the attempt budget is spent.

use super::Strategy;
use crate::core::{Dictionary, FeedbackPattern, SolverError, Word, evaluate_unchecked};

/// Attempt budget of the reference puzzle
pub const MAX_ATTEMPTS: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Solved,
    Failed,
}

/// One guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: FeedbackPattern,
}

/// Candidate set and history of a single solving session
#[derive(Debug, Clone)]
pub struct SolverState<'d> {
    dictionary: &'d Dictionary,
    candidates: Vec<&'d Word>,
    /// Candidate set from just before the feedback that emptied it
    last_consistent: Vec<&'d Word>,
    history: Vec<Attempt>,
    max_attempts: usize,
}

impl<'d> SolverState<'d> {
    /// Start a session over the whole dictionary
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if `max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::{Dictionary, Word, evaluate};
    /// use wordle_csp::solver::{DistinctLettersStrategy, SolverState, Status, MAX_ATTEMPTS};
    ///
    /// let words = ["crane", "slate", "trace"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let dictionary = Dictionary::new(words).unwrap();
    /// let secret = Word::new("trace").unwrap();
    ///
    /// let mut state = SolverState::new(&dictionary, MAX_ATTEMPTS).unwrap();
    /// while state.status() == Status::InProgress {
    ///     let guess = state.choose_guess(&DistinctLettersStrategy).unwrap().clone();
    ///     let feedback = evaluate(&guess, &secret).unwrap();
    ///     state.record_feedback(&guess, feedback).unwrap();
    /// }
    /// assert_eq!(state.status(), Status::Solved);
    /// ```
    pub fn new(dictionary: &'d Dictionary, max_attempts: usize) -> Result<Self, SolverError> {
        if max_attempts == 0 {
            return Err(SolverError::InvalidInput(
                "attempt budget must be at least 1".into(),
            ));
        }

        Ok(Self {
            dictionary,
            candidates: dictionary.iter().collect(),
            last_consistent: Vec::new(),
            history: Vec::with_capacity(max_attempts),
            max_attempts,
        })
    }

    /// Pick the next guess from the remaining candidates
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidatesRemaining` if no dictionary word is
    /// consistent with the feedback so far.
    pub fn choose_guess<S: Strategy + ?Sized>(&self, strategy: &S) -> Result<&'d Word, SolverError> {
        strategy
            .select_guess(&self.candidates)
            .ok_or(SolverError::NoCandidatesRemaining)
    }

    /// Pick a guess once no candidate is left
    ///
    /// Draws from the last non-empty candidate set, then from the whole
    /// dictionary, skipping every word already guessed. Lets a session whose
    /// secret is not in the dictionary keep guessing until its budget is spent.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidatesRemaining` if every dictionary word has
    /// already been guessed.
    pub fn choose_fallback_guess<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
    ) -> Result<&'d Word, SolverError> {
        let untried = |word: &&'d Word| !self.history.iter().any(|a| a.guess == **word);

        let recent: Vec<&'d Word> = self
            .last_consistent
            .iter()
            .copied()
            .filter(untried)
            .collect();
        if let Some(guess) = strategy.select_guess(&recent) {
            return Ok(guess);
        }

        let rest: Vec<&'d Word> = self.dictionary.iter().filter(untried).collect();
        strategy
            .select_guess(&rest)
            .ok_or(SolverError::NoCandidatesRemaining)
    }

    /// Record the feedback for `guess` and narrow the candidate set
    ///
    /// Keeps only the candidates that would have produced `feedback` had they
    /// been the secret. `guess` need not be a dictionary word. The set never
    /// grows back; if it empties, the previous set is kept aside for
    /// [`SolverState::choose_fallback_guess`].
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the session is already finished or
    /// the guess or feedback length differs from the dictionary's word length.
    pub fn record_feedback(
        &mut self,
        guess: &Word,
        feedback: FeedbackPattern,
    ) -> Result<Status, SolverError> {
        if self.status() != Status::InProgress {
            return Err(SolverError::InvalidInput(
                "session is already finished".into(),
            ));
        }

        let length = self.dictionary.word_length();
        if guess.len() != length {
            return Err(SolverError::InvalidInput(format!(
                "guess '{guess}' has {} letters, expected {length}",
                guess.len()
            )));
        }
        if feedback.len() != length {
            return Err(SolverError::InvalidInput(format!(
                "feedback {feedback} has {} marks, expected {length}",
                feedback.len()
            )));
        }

        let narrowed: Vec<&'d Word> = self
            .candidates
            .iter()
            .copied()
            .filter(|&candidate| evaluate_unchecked(guess, candidate) == feedback)
            .collect();
        let previous = std::mem::replace(&mut self.candidates, narrowed);
        if self.candidates.is_empty() && !previous.is_empty() {
            self.last_consistent = previous;
        }
        self.history.push(Attempt {
            guess: guess.clone(),
            feedback,
        });

        Ok(self.status())
    }

    /// Solved after an all-exact feedback, failed once the budget is spent
    #[must_use]
    pub fn status(&self) -> Status {
        match self.history.last() {
            Some(last) if last.feedback.is_solved() => Status::Solved,
            _ if self.history.len() >= self.max_attempts => Status::Failed,
            _ => Status::InProgress,
        }
    }

    /// Words still consistent with every recorded feedback, in dictionary order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'d Word] {
        &self.candidates
    }

    /// Every recorded attempt, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::solver::DistinctLettersStrategy;

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::new(texts.iter().map(|t| Word::new(t).unwrap()).collect()).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Play a full simulated session and return the final state
    fn simulate<'d>(dictionary: &'d Dictionary, secret: &Word) -> SolverState<'d> {
        let mut state = SolverState::new(dictionary, MAX_ATTEMPTS).unwrap();
        while state.status() == Status::InProgress {
            let Ok(guess) = state.choose_guess(&DistinctLettersStrategy) else {
                break;
            };
            let guess = guess.clone();
            let feedback = evaluate(&guess, secret).unwrap();
            state.record_feedback(&guess, feedback).unwrap();
        }
        state
    }

    #[test]
    fn new_session_starts_with_full_dictionary() {
        let dict = dictionary(&["crane", "slate", "trace"]);
        let state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        assert_eq!(state.candidates().len(), 3);
        assert!(state.history().is_empty());
        assert_eq!(state.attempts_used(), 0);
        assert_eq!(state.max_attempts(), 6);
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn zero_attempt_budget_is_rejected() {
        let dict = dictionary(&["crane"]);
        assert!(matches!(
            SolverState::new(&dict, 0),
            Err(SolverError::InvalidInput(_))
        ));
    }

    #[test]
    fn narrowing_is_monotonic_and_keeps_secret() {
        let dict = dictionary(&[
            "brace", "crane", "crate", "grace", "react", "slate", "trace",
        ]);
        let secret = word("crate");
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        for guess in ["slate", "react", "brace"] {
            let before = state.candidates().len();
            let guess = word(guess);
            let feedback = evaluate(&guess, &secret).unwrap();
            state.record_feedback(&guess, feedback).unwrap();

            assert!(state.candidates().len() <= before);
            assert!(state.candidates().iter().any(|&c| *c == secret));
        }
        assert_eq!(state.attempts_used(), 3);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn record_feedback_keeps_only_consistent_words() {
        let dict = dictionary(&["brace", "crane", "grace", "trace"]);
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        let guess = word("brace");
        let feedback: FeedbackPattern = "BGGGG".parse().unwrap();
        let status = state.record_feedback(&guess, feedback).unwrap();

        assert_eq!(status, Status::InProgress);
        let texts: Vec<&str> = state.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["grace", "trace"]);
    }

    #[test]
    fn external_guess_outside_dictionary_is_accepted() {
        let dict = dictionary(&["crane", "slate", "trace"]);
        let secret = word("trace");
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        let guess = word("pudgy");
        let feedback = evaluate(&guess, &secret).unwrap();
        state.record_feedback(&guess, feedback).unwrap();

        // No shared letters with any candidate, so nothing is ruled out
        assert_eq!(state.candidates().len(), 3);
        assert_eq!(state.history()[0].guess, guess);
    }

    #[test]
    fn history_keeps_every_mark_in_order() {
        let dict = dictionary(&["crane", "slate", "trace"]);
        let state = simulate(&dict, &word("slate"));

        for attempt in state.history() {
            assert_eq!(
                attempt.feedback,
                evaluate(&attempt.guess, &word("slate")).unwrap()
            );
        }
        assert_eq!(state.history().len(), state.attempts_used());
    }

    #[test]
    fn solves_trace_from_small_dictionary() {
        let dict = dictionary(&[
            "brace", "crane", "crate", "grace", "react", "slate", "trace",
        ]);
        let state = simulate(&dict, &word("trace"));

        assert_eq!(state.status(), Status::Solved);
        assert!(state.attempts_used() <= MAX_ATTEMPTS);
        assert!(state.history().last().unwrap().feedback.is_solved());

        let guesses: Vec<&str> = state.history().iter().map(|a| a.guess.text()).collect();
        assert_eq!(guesses, ["brace", "grace", "trace"]);
    }

    #[test]
    fn secret_outside_dictionary_exhausts_attempts() {
        // Every word differs from BATCH only in its first letter, so each guess
        // rules out just itself.
        let dict = dictionary(&["catch", "hatch", "latch", "match", "patch", "watch"]);
        let state = simulate(&dict, &word("batch"));

        assert_eq!(state.status(), Status::Failed);
        assert_eq!(state.attempts_used(), MAX_ATTEMPTS);
        let guesses: Vec<&str> = state.history().iter().map(|a| a.guess.text()).collect();
        assert_eq!(
            guesses,
            ["latch", "match", "patch", "watch", "catch", "hatch"]
        );
    }

    #[test]
    fn inconsistent_feedback_empties_candidates() {
        let dict = dictionary(&["crane", "slate"]);
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        state
            .record_feedback(&word("crane"), "YGGBG".parse().unwrap())
            .unwrap();

        assert!(state.candidates().is_empty());
        assert_eq!(
            state.choose_guess(&DistinctLettersStrategy),
            Err(SolverError::NoCandidatesRemaining)
        );
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn fallback_skips_tried_words() {
        let dict = dictionary(&["brace", "crane", "slate", "trace"]);
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        // Consistent with GRACE only, which is not in the dictionary
        state
            .record_feedback(&word("trace"), "BGGGG".parse().unwrap())
            .unwrap();
        let texts: Vec<&str> = state.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["brace"]);

        state
            .record_feedback(&word("brace"), "BGGGG".parse().unwrap())
            .unwrap();
        assert!(state.candidates().is_empty());

        // BRACE was the last consistent word but is tried, so the dictionary is next
        let guess = state.choose_fallback_guess(&DistinctLettersStrategy).unwrap();
        assert_eq!(guess.text(), "crane");

        // Narrowing does not refill the emptied set
        state
            .record_feedback(&word("crane"), "BGGBG".parse().unwrap())
            .unwrap();
        assert!(state.candidates().is_empty());
        let guess = state.choose_fallback_guess(&DistinctLettersStrategy).unwrap();
        assert_eq!(guess.text(), "slate");
    }

    #[test]
    fn fallback_prefers_last_consistent_set() {
        let dict = dictionary(&["brace", "crane", "grace", "slate", "trace"]);
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        state
            .record_feedback(&word("brace"), "BGGGG".parse().unwrap())
            .unwrap();
        state
            .record_feedback(&word("grace"), "YYYYY".parse().unwrap())
            .unwrap();
        assert!(state.candidates().is_empty());

        // TRACE survived the first feedback; CRANE and SLATE did not
        let guess = state.choose_fallback_guess(&DistinctLettersStrategy).unwrap();
        assert_eq!(guess.text(), "trace");
    }

    #[test]
    fn fallback_fails_once_every_word_is_tried() {
        let dict = dictionary(&["crane", "slate"]);
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();
        let miss: FeedbackPattern = "BBBBB".parse().unwrap();

        state.record_feedback(&word("crane"), miss.clone()).unwrap();
        state.record_feedback(&word("slate"), miss).unwrap();

        assert_eq!(
            state.choose_fallback_guess(&DistinctLettersStrategy),
            Err(SolverError::NoCandidatesRemaining)
        );
    }

    #[test]
    fn finished_session_rejects_more_feedback() {
        let dict = dictionary(&["crane", "slate"]);
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        let status = state
            .record_feedback(&word("crane"), FeedbackPattern::solved(5))
            .unwrap();
        assert_eq!(status, Status::Solved);

        assert!(matches!(
            state.record_feedback(&word("slate"), FeedbackPattern::solved(5)),
            Err(SolverError::InvalidInput(_))
        ));
        assert_eq!(state.attempts_used(), 1);
    }

    #[test]
    fn attempts_never_exceed_budget() {
        let dict = dictionary(&["crane", "slate", "trace"]);
        let mut state = SolverState::new(&dict, 2).unwrap();
        let miss: FeedbackPattern = "BBBBB".parse().unwrap();

        assert_eq!(
            state.record_feedback(&word("pudgy"), miss.clone()).unwrap(),
            Status::InProgress
        );
        assert_eq!(
            state.record_feedback(&word("pudgy"), miss.clone()).unwrap(),
            Status::Failed
        );
        assert!(state.record_feedback(&word("pudgy"), miss).is_err());
        assert_eq!(state.attempts_used(), 2);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let dict = dictionary(&["crane", "slate"]);
        let mut state = SolverState::new(&dict, MAX_ATTEMPTS).unwrap();

        let long_guess = Word::with_length("planet", 6).unwrap();
        assert!(matches!(
            state.record_feedback(&long_guess, "BBBBBB".parse().unwrap()),
            Err(SolverError::InvalidInput(_))
        ));
        assert!(matches!(
            state.record_feedback(&word("crane"), "GGGG".parse().unwrap()),
            Err(SolverError::InvalidInput(_))
        ));
        assert_eq!(state.attempts_used(), 0);
    }
}
