//! Bucket processing: stale file cleanup, image export and console report.

mod sort;


pub use sort::{run_sort, SortParams, SortSummary, WrittenBucket};
