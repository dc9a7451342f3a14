//! Test all words - comprehensive solver evaluation
//!
//! Runs the solver against every dictionary word and generates statistics.

use crate::solver::{FailureReason, SessionReport, Solver, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug, Clone)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Failed sessions that used every attempt
    pub attempts_exhausted: usize,
    /// Failed sessions that ran out of untried words
    pub no_candidates: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    /// Average over solved sessions
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Slowest solved words, most guesses first
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

const HARDEST_SHOWN: usize = 10;

/// Run the solver on every dictionary word (or the first `limit` of them)
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid or a session
/// fails to run.
pub fn run_test_all<S: Strategy + Sync>(
    solver: &Solver<S>,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let dictionary = solver.dictionary();
    let count = limit.map_or(dictionary.len(), |n| n.min(dictionary.len()));
    let targets = &dictionary[..count];

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<(String, SessionReport)> = targets
        .par_iter()
        .map(|target| -> Result<(String, SessionReport)> {
            let report = solver.solve(target)?;
            pb.inc(1);
            Ok((target.text().to_string(), report))
        })
        .collect::<Result<_>>()?;
    pb.finish_with_message("Complete!");
    let total_time = start.elapsed();

    let solved: Vec<(&str, usize)> = results
        .iter()
        .filter(|(_, report)| report.is_solved())
        .map(|(word, report)| (word.as_str(), report.attempts()))
        .collect();

    let mut guess_distribution = BTreeMap::new();
    for &(_, guesses) in &solved {
        *guess_distribution.entry(guesses).or_insert(0) += 1;
    }

    let count_reason = |reason: FailureReason| {
        results
            .iter()
            .filter(|(_, report)| report.failure_reason() == Some(reason))
            .count()
    };

    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        solved.iter().map(|&(_, n)| n).sum::<usize>() as f64 / solved.len() as f64
    };

    let mut hardest_words: Vec<(String, usize)> = solved
        .iter()
        .map(|&(word, n)| (word.to_string(), n))
        .collect();
    // Stable sort keeps dictionary order among equal counts
    hardest_words.sort_by_key(|&(_, n)| Reverse(n));
    hardest_words.truncate(HARDEST_SHOWN);

    Ok(TestAllStatistics {
        total_words: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        attempts_exhausted: count_reason(FailureReason::AttemptsExhausted),
        no_candidates: count_reason(FailureReason::NoCandidatesRemaining),
        guess_distribution,
        total_time,
        average_guesses,
        min_guesses: solved.iter().map(|&(_, n)| n).min().unwrap_or(0),
        max_guesses: solved.iter().map(|&(_, n)| n).max().unwrap_or(0),
        hardest_words,
        failed_words: results
            .iter()
            .filter(|(_, report)| !report.is_solved())
            .map(|(word, _)| word.clone())
            .collect(),
    })
}
