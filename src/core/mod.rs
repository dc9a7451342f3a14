//! Core domain types for the puzzle
//!
//! Words, the shared dictionary and the feedback engine. Everything here is pure:
//! no I/O, no logging, no shared mutable state.

mod dictionary;
mod error;
mod pattern;
mod word;

pub use dictionary::Dictionary;
pub use error::SolverError;
pub use pattern::{FeedbackPattern, LetterMark, evaluate};
pub(crate) use pattern::evaluate_unchecked;
pub use word::{WORD_LENGTH, Word, WordError};
