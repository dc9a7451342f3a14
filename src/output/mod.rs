//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_session_report, print_test_all_statistics};
pub use formatters::{result_footer, share_grid};
