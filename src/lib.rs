//! Wordle constraint solver
//!
//! Plays Wordle by keeping the set of dictionary words that agree with every
//! piece of feedback seen so far, and guessing from that set until the puzzle
//! is solved or the attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_csp::core::{Word, evaluate};
//! use wordle_csp::solver::{DistinctLettersStrategy, SessionConfig, Solver};
//! use wordle_csp::wordlists::loader::embedded_dictionary;
//!
//! // Feedback for a single guess
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("trace").unwrap();
//! assert_eq!(evaluate(&guess, &secret).unwrap().to_string(), "YGGBG");
//!
//! // A whole simulated session
//! let dictionary = embedded_dictionary().unwrap();
//! let solver = Solver::new(DistinctLettersStrategy, &dictionary, SessionConfig::default()).unwrap();
//! let report = solver.solve(&secret).unwrap();
//! assert!(report.attempts() <= 6);
//! ```

// Core domain types
pub mod core;

// Candidate narrowing and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
