//! Word list loading utilities
//!
//! Turns raw word lists (files or embedded constants) into a [`Dictionary`]:
//! each line is trimmed and lowercased, anything that is not a five-letter word
//! is skipped, and the result is sorted and de-duplicated.

use super::WORDS;
use crate::core::{Dictionary, SolverError, Word};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Parse newline-separated words, skipping blank and invalid lines
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_csp::wordlists::loader::words_from_slice;
/// use wordle_csp::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build a dictionary from raw file content
///
/// # Errors
/// Returns `SolverError::EmptyDictionary` if no valid word remains.
pub fn dictionary_from_str(content: &str) -> Result<Dictionary, SolverError> {
    Dictionary::from_words_dedup(words_from_str(content))
}

/// Load a dictionary from a file with one word per line
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_csp::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Word list not found at {}", path.display()))?;

    let dictionary = dictionary_from_str(&content)
        .with_context(|| format!("Word list at {} was empty or invalid", path.display()))?;
    debug!("loaded {} words from {}", dictionary.len(), path.display());

    Ok(dictionary)
}

/// The dictionary compiled into the binary
///
/// # Errors
/// Only fails if the embedded list is empty, which the build never produces.
pub fn embedded_dictionary() -> Result<Dictionary, SolverError> {
    Dictionary::from_words_dedup(words_from_slice(WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn dictionary_from_str_cleans_input() {
        let dictionary = dictionary_from_str("  TRACE\n\ncrane\nslate\ncr4ne\ncrane\nplanet\n").unwrap();
        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "trace"]);
    }

    #[test]
    fn dictionary_from_str_empty() {
        assert_eq!(
            dictionary_from_str("\n  \nabc\n").unwrap_err(),
            SolverError::EmptyDictionary
        );
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "wordle_csp_loader_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "slate\nCRANE\ntrace").unwrap();
        drop(file);

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary[0].text(), "crane");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("Word list not found"));
    }

    #[test]
    fn embedded_dictionary_matches_list() {
        let dictionary = embedded_dictionary().unwrap();
        assert_eq!(dictionary.len(), WORDS.len());
        assert_eq!(dictionary.word_length(), 5);
    }
}
