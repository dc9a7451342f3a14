//! Shared, read-only dictionary of candidate words

use super::{SolverError, Word};
use rustc_hash::FxHashSet;
use std::ops::Deref;
use std::sync::Arc;

/// An ordered list of unique words of equal length
///
/// Built once and shared between sessions; cloning only bumps a reference count.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Arc<[Word]>,
    word_length: usize,
}

impl Dictionary {
    /// Build a dictionary that keeps the given order
    ///
    /// # Errors
    /// - `SolverError::EmptyDictionary` if `words` is empty
    /// - `SolverError::InvalidInput` if word lengths differ or a word repeats
    pub fn new(words: Vec<Word>) -> Result<Self, SolverError> {
        let word_length = words.first().ok_or(SolverError::EmptyDictionary)?.len();

        {
            let mut seen = FxHashSet::default();
            for word in &words {
                if word.len() != word_length {
                    return Err(SolverError::InvalidInput(format!(
                        "dictionary word '{word}' has {} letters, expected {word_length}",
                        word.len()
                    )));
                }
                if !seen.insert(word.text()) {
                    return Err(SolverError::InvalidInput(format!(
                        "dictionary word '{word}' appears more than once"
                    )));
                }
            }
        }

        Ok(Self {
            words: words.into(),
            word_length,
        })
    }

    /// Sort and de-duplicate `words`, then build the dictionary
    ///
    /// # Errors
    /// Same as [`Dictionary::new`], minus the duplicate check.
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::{Dictionary, Word};
    ///
    /// let words = ["slate", "crane", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let dictionary = Dictionary::from_words_dedup(words).unwrap();
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary[0].text(), "crane");
    /// ```
    pub fn from_words_dedup(mut words: Vec<Word>) -> Result<Self, SolverError> {
        words.sort();
        words.dedup();
        Self::new(words)
    }

    /// Letter count shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Check whether `word` is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.trim().to_lowercase();
        self.words.iter().find(|w| w.text() == text)
    }
}

impl Deref for Dictionary {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
