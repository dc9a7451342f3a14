//! Wordle constraint solver - CLI
//!
//! Simulates sessions against a known word, helps play the live puzzle, and
//! measures strategies over the whole dictionary.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_csp::{
    commands::{
        SolveConfig, run_benchmark, run_play, run_test_all, sample_secrets, solve_word,
    },
    core::{Dictionary, Word},
    logging,
    output::{
        print_benchmark_result, print_session_report, print_test_all_statistics, share_grid,
    },
    solver::{SessionConfig, Solver, StrategyType},
    wordlists::loader::{embedded_dictionary, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_csp",
    about = "Rule-based Wordle solver: guesses from the words still consistent with the feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDS_PATH")]
    words: Option<PathBuf>,

    /// Strategy: distinct (default) or frequency
    #[arg(short, long, global = true, default_value = "distinct")]
    strategy: String,

    /// Attempts allowed per session
    #[arg(short = 'm', long, global = true, default_value_t = 6)]
    max_attempts: usize,

    /// Override the opening guess
    #[arg(short = 'f', long, global = true)]
    first_word: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses for the live puzzle and read back its feedback (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Allow a target outside the word list
        #[arg(long)]
        allow_unknown: bool,

        /// Print only the emoji grid and result line
        #[arg(long)]
        share: bool,
    },

    /// Benchmark solver performance on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for picking the words (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on every word in the list
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path),
        None => embedded_dictionary().context("Built-in word list is empty"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("Failed to set up logging")?;

    let dictionary = load_dictionary(cli.words.as_ref())?;

    let strategy = StrategyType::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "Unknown strategy '{}' (expected one of: {})",
            cli.strategy,
            StrategyType::NAMES.join(", ")
        )
    })?;

    let first_guess = cli
        .first_word
        .as_deref()
        .map(|text| Word::with_length(text, dictionary.word_length()))
        .transpose()
        .context("Invalid --first-word")?;
    let config = SessionConfig {
        max_attempts: cli.max_attempts,
        first_guess,
    };
    let solver = Solver::new(strategy, &dictionary, config)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let stdin = io::stdin();
            if let Some(report) = run_play(&solver, stdin.lock(), io::stdout())? {
                println!();
                print_session_report(&report, cli.verbose > 0);
            }
        }
        Commands::Solve {
            word,
            allow_unknown,
            share,
        } => {
            let config = SolveConfig {
                target: word,
                allow_unknown,
            };
            let report = solve_word(&config, &solver)?;
            if share {
                println!("{}", share_grid(&report));
            } else {
                print_session_report(&report, cli.verbose > 0);
            }
        }
        Commands::Benchmark { count, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            println!("Running benchmark on {count} random words (seed {seed})...");
            let secrets = sample_secrets(&dictionary, count, seed);
            let mut result = run_benchmark(&solver, &secrets)?;
            result.seed = Some(seed);
            print_benchmark_result(&result);
        }
        Commands::TestAll { limit } => {
            println!(
                "Testing against {} words with the '{}' strategy",
                limit.map_or(dictionary.len(), |n| n.min(dictionary.len())),
                cli.strategy
            );
            let stats = run_test_all(&solver, limit, true)?;
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
