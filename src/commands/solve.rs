//! Word solving command
//!
//! Solves a specific target word and returns the full session record.

use crate::core::Word;
use crate::solver::{SessionReport, Solver, Strategy};
use anyhow::{Context, Result, bail};
use log::warn;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Play even if the target is not a dictionary word
    pub allow_unknown: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            allow_unknown: false,
        }
    }
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (wrong length or not ASCII letters)
/// - The target is not in the dictionary and `allow_unknown` is off
pub fn solve_word<S: Strategy>(config: &SolveConfig, solver: &Solver<S>) -> Result<SessionReport> {
    let target = Word::new(&config.target)
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    if !solver.dictionary().contains(&target) {
        if !config.allow_unknown {
            bail!("Target word '{target}' is not in the dictionary");
        }
        warn!("target '{target}' is not in the dictionary; the session cannot be solved");
    }

    solver.solve(&target)
}
