//! Errors raised by the feedback engine and the constraint solver

use super::WordError;
use std::fmt;

/// Failure kinds of the solving core
///
/// None of these are retried internally; each is returned to the immediate
/// caller of the operation that detected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Malformed input, such as a guess whose length differs from the secret's
    InvalidInput(String),
    /// A dictionary was built from zero words
    EmptyDictionary,
    /// No dictionary word is consistent with the feedback received so far
    NoCandidatesRemaining,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "Invalid input: {reason}"),
            Self::EmptyDictionary => write!(f, "Dictionary contains no words"),
            Self::NoCandidatesRemaining => {
                write!(f, "No dictionary word is consistent with the feedback")
            }
        }
    }
}

impl std::error::Error for SolverError {}

impl From<WordError> for SolverError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_error_becomes_invalid_input() {
        let err: SolverError = WordError::InvalidCharacters.into();
        assert_eq!(
            err,
            SolverError::InvalidInput("Word contains invalid characters".to_string())
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            SolverError::EmptyDictionary.to_string(),
            "Dictionary contains no words"
        );
        assert_eq!(
            SolverError::InvalidInput("length mismatch".into()).to_string(),
            "Invalid input: length mismatch"
        );
    }
}
