//! Word lists for the solver
//!
//! Provides the embedded dictionary and loaders for custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
