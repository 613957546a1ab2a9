//! Huesort Core Library
//!
//! Sorts named colors into sixteen fixed hue buckets, narrows each bucket with
//! an inclusive HSL filter, orders the survivors by lightness and renders
//! them as stacked swatch bands.

pub mod buckets;
pub mod color;
pub mod config;
pub mod error;
pub mod exporters;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use buckets::{HueBucket, HueSelector, HUE_BUCKETS};
pub use color::{Hsl, Rgba};
pub use error::{Result, SortError};
pub use models::{ColorSwatch, FilterRange};
pub use pipeline::{select_bucket, sort_into_buckets, BucketSelection};
