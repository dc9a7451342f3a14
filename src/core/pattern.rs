//! Feedback evaluation and representation
//!
//! A [`FeedbackPattern`] holds one [`LetterMark`] per position of a guess. Its
//! textual form uses one character per mark:
//! - `G` = Exact (letter in the correct position)
//! - `Y` = Present (letter in the secret, elsewhere)
//! - `B` = Absent (no unconsumed occurrence in the secret)

use super::{SolverError, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMark {
    Exact,
    Present,
    Absent,
}

impl LetterMark {
    /// Single-letter code used in the textual pattern form
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Colored square used by share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    /// Parse a mark from a pattern character
    ///
    /// Accepts `G`/🟩 for exact, `Y`/🟨 for present and `B`/`X`/`-`/`_`/⬛/⬜ for
    /// absent, case-insensitively.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'G' | '🟩' => Some(Self::Exact),
            'Y' | '🟨' => Some(Self::Present),
            'B' | 'X' | '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern {
    marks: Vec<LetterMark>,
}

impl FeedbackPattern {
    /// Build a pattern from explicit marks
    #[must_use]
    pub fn from_marks(marks: Vec<LetterMark>) -> Self {
        Self { marks }
    }

    /// The all-exact pattern for words of `length` letters
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self {
            marks: vec![LetterMark::Exact; length],
        }
    }

    /// Marks in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[LetterMark] {
        &self.marks
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == LetterMark::Exact)
    }

    /// Count the number of exact marks
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterMark::Exact)
    }

    /// Count the number of present marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterMark::Present)
    }

    fn count(&self, mark: LetterMark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Convert pattern to emoji string such as "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

impl FromStr for FeedbackPattern {
    type Err = SolverError;

    /// Parse a pattern from a string like "GYBBG" or "🟩🟨⬛⬛🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SolverError::InvalidInput("empty feedback pattern".into()));
        }

        s.chars()
            .map(|ch| {
                LetterMark::from_char(ch).ok_or_else(|| {
                    SolverError::InvalidInput(format!("invalid feedback character '{ch}' in {s}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_marks)
    }
}

/// Evaluate `guess` against `secret`
///
/// Implements the standard duplicate-letter rules: all exact matches are marked
/// and consumed first, then each remaining guess letter is marked present only
/// while an unconsumed occurrence of it is left in the secret.
///
/// # Errors
/// Returns `SolverError::InvalidInput` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_csp::core::{evaluate, Word};
///
/// let guess = Word::new("crane").unwrap();
/// let secret = Word::new("slate").unwrap();
/// let pattern = evaluate(&guess, &secret).unwrap();
///
/// assert_eq!(pattern.to_string(), "BBGBG");
/// ```
pub fn evaluate(guess: &Word, secret: &Word) -> Result<FeedbackPattern, SolverError> {
    if guess.len() != secret.len() {
        return Err(SolverError::InvalidInput(format!(
            "guess '{guess}' has {} letters but secret has {}",
            guess.len(),
            secret.len()
        )));
    }
    Ok(evaluate_unchecked(guess, secret))
}

/// Evaluation for callers that already guarantee equal lengths
pub(crate) fn evaluate_unchecked(guess: &Word, secret: &Word) -> FeedbackPattern {
    debug_assert_eq!(guess.len(), secret.len());

    let mut marks = vec![LetterMark::Absent; guess.len()];
    let mut unconsumed = secret.letter_counts();

    // First pass: exact matches consume their occurrence
    for (i, (g, s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            marks[i] = LetterMark::Exact;
            if let Some(count) = unconsumed.get_mut(g) {
                *count -= 1;
            }
        }
    }

    // Second pass: present only while an occurrence is left
    for (i, letter) in guess.letters().iter().enumerate() {
        if marks[i] == LetterMark::Exact {
            continue;
        }
        if let Some(count) = unconsumed.get_mut(letter)
            && *count > 0
        {
            marks[i] = LetterMark::Present;
            *count -= 1;
        }
    }

    FeedbackPattern { marks }
}
