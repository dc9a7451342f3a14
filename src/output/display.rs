//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, pattern_to_emoji, result_footer};
use crate::commands::{BenchmarkResult, TestAllStatistics};
use crate::solver::{FailureReason, SessionReport};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print every turn of a finished session
pub fn print_session_report(report: &SessionReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, turn) in report.turns.iter().enumerate() {
        println!(
            "Turn {}: {}  {}",
            i + 1,
            colored_guess(&turn.guess, &turn.feedback),
            pattern_to_emoji(&turn.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
        }
    }

    println!("{}", "─".repeat(60).cyan());
    let footer = result_footer(report);
    match report.failure_reason() {
        None => println!("{}", footer.green().bold()),
        Some(reason) => {
            println!("{}", footer.red().bold());
            println!("  {}", describe_failure(reason).bright_black());
        }
    }
}

const fn describe_failure(reason: FailureReason) -> &'static str {
    match reason {
        FailureReason::AttemptsExhausted => "every attempt was used",
        FailureReason::NoCandidatesRemaining => "every dictionary word was tried",
    }
}

fn print_distribution(distribution: &BTreeMap<usize, usize>, total: usize) {
    let max_count = distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in distribution {
        let pct = count as f64 / total.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    if let Some(seed) = result.seed {
        println!("   Seed:             {seed}");
    }
    println!("   Solved:           {}", result.solved.to_string().green());
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.total_words);
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let pct = |n: usize| n as f64 / stats.total_words.max(1) as f64 * 100.0;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", pct(stats.solved)).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", pct(stats.failed)).red()
        );
        println!("    out of attempts:   {}", stats.attempts_exhausted);
        println!("    no candidates:     {}", stats.no_candidates);
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    print_distribution(&stats.guess_distribution, stats.solved);

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved Words".red().bold());
        let shown: Vec<String> = stats
            .failed_words
            .iter()
            .take(20)
            .map(|w| w.to_uppercase())
            .collect();
        println!("  {}", shown.join(", "));
    }
}
