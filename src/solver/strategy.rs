//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy is
//! deterministic: the same candidate list always yields the same guess.

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select the best guess among `candidates`, given in dictionary order
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'w>(&self, candidates: &[&'w Word]) -> Option<&'w Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Most distinct letters first (default)
    DistinctLetters(DistinctLettersStrategy),
    /// Highest unique-letter frequency among the candidates
    LetterFrequency(LetterFrequencyStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'w>(&self, candidates: &[&'w Word]) -> Option<&'w Word> {
        match self {
            Self::DistinctLetters(s) => s.select_guess(candidates),
            Self::LetterFrequency(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 2] = ["distinct", "frequency"];

    /// Create strategy from name string
    ///
    /// Supported names: "distinct", "frequency". Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "distinct" | "distinct-letters" => {
                Some(Self::DistinctLetters(DistinctLettersStrategy))
            }
            "frequency" | "letter-frequency" => {
                Some(Self::LetterFrequency(LetterFrequencyStrategy))
            }
            _ => None,
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::DistinctLetters(DistinctLettersStrategy)
    }
}

/// Prefers the candidate with the most distinct letters
///
/// Ties go to the earliest candidate in dictionary order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistinctLettersStrategy;

impl Strategy for DistinctLettersStrategy {
    fn select_guess<'w>(&self, candidates: &[&'w Word]) -> Option<&'w Word> {
        // min_by_key keeps the first of equal keys
        candidates
            .iter()
            .copied()
            .min_by_key(|word| Reverse(word.distinct_letters()))
    }
}

/// Scores each candidate by how common its letters are among the candidates
///
/// A letter's weight is the number of candidates containing it at least once;
/// a word's score is the sum of the weights of its distinct letters. Ties fall
/// back to distinct-letter count, then to the alphabetically last word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterFrequencyStrategy;

impl Strategy for LetterFrequencyStrategy {
    fn select_guess<'w>(&self, candidates: &[&'w Word]) -> Option<&'w Word> {
        let frequency = count_words_per_letter(candidates);

        candidates
            .iter()
            .copied()
            .max_by_key(|&word| {
                let unique = unique_letters(word);
                let score: usize = unique
                    .iter()
                    .map(|letter| frequency.get(letter).copied().unwrap_or(0))
                    .sum();
                (score, unique.len(), word.text())
            })
    }
}

fn unique_letters(word: &Word) -> FxHashSet<u8> {
    word.letters().iter().copied().collect()
}

/// Number of words containing each letter at least once
fn count_words_per_letter(words: &[&Word]) -> FxHashMap<u8, usize> {
    let mut count_per_letter: FxHashMap<u8, usize> = FxHashMap::default();
    for word in words {
        for letter in unique_letters(word) {
            *count_per_letter.entry(letter).or_insert(0) += 1;
        }
    }
    count_per_letter
}
