//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use play::run_play;
pub use solve::{SolveConfig, solve_word};
pub use test_all::{TestAllStatistics, run_test_all};
