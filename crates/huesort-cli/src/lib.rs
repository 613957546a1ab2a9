//! Shared pieces of the huesort command line tool
//!
//! Argument structs, option builders and the per-bucket orchestration loop,
//! kept out of `main.rs` so they can be tested directly.

pub mod args;
pub mod builders;
pub mod processing;

pub use args::FilterArgs;
pub use builders::{build_filter_range, build_sort_params};
pub use processing::{run_sort, SortParams, SortSummary, WrittenBucket};
