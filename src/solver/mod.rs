//! Constraint solver
//!
//! Candidate narrowing, guess selection and the session runner.

mod engine;
pub mod source;
mod state;
pub mod strategy;

pub use engine::{FailureReason, Outcome, SessionConfig, SessionReport, Solver, Turn};
pub use source::{Aborted, FeedbackSource, PromptJudge, Simulated};
pub use state::{Attempt, MAX_ATTEMPTS, SolverState, Status};
pub use strategy::{DistinctLettersStrategy, LetterFrequencyStrategy, Strategy, StrategyType};
