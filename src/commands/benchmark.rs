//! Benchmark command
//!
//! Solves a random sample of dictionary words and reports how the strategy did.

use crate::core::{Dictionary, Word};
use crate::solver::{SessionReport, Solver, Strategy};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses over all sessions, failed ones included
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count per solved session
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
    pub seed: Option<u64>,
}

/// Pick `count` distinct secrets from the dictionary
///
/// The same seed always yields the same sample. Asking for more words than
/// the dictionary holds returns all of them in random order.
#[must_use]
pub fn sample_secrets(dictionary: &Dictionary, count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    dictionary
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Run benchmark on a set of target words
///
/// Sessions run in parallel; each one borrows the solver's dictionary.
///
/// # Errors
///
/// Returns an error if any session fails to run (e.g. a target has the wrong
/// length).
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[Word],
) -> Result<BenchmarkResult> {
    let start = Instant::now();

    let reports: Vec<SessionReport> = target_words
        .par_iter()
        .map(|target| solver.solve(target))
        .collect::<Result<_>>()?;

    let duration = start.elapsed();
    let total_words = reports.len();
    let solved = reports.iter().filter(|r| r.is_solved()).count();
    let total_guesses: usize = reports.iter().map(SessionReport::attempts).sum();

    let mut distribution = BTreeMap::new();
    for report in reports.iter().filter(|r| r.is_solved()) {
        *distribution.entry(report.attempts()).or_insert(0) += 1;
    }

    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };
    let words_per_second = if duration.is_zero() {
        0.0
    } else {
        total_words as f64 / duration.as_secs_f64()
    };

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        total_guesses,
        average_guesses,
        min_guesses: reports
            .iter()
            .map(SessionReport::attempts)
            .min()
            .unwrap_or(0),
        max_guesses: reports
            .iter()
            .map(SessionReport::attempts)
            .max()
            .unwrap_or(0),
        distribution,
        duration,
        words_per_second,
        seed: None,
    })
}
