//! Bucketing and sort pipeline
//!
//! For each bucket in table order:
//! 1. select the swatches whose hue falls in the bucket's range
//! 2. narrow them with the user's HSL filter box
//! 3. stable-sort the survivors by ascending lightness
//!
//! The filter only ever removes swatches from the bucket their hue already
//! placed them in; it never decides which bucket a swatch belongs to.

use crate::buckets::{HueBucket, HUE_BUCKETS};
use crate::models::{ColorSwatch, FilterRange};


/// Swatches selected for one bucket, darkest first
#[derive(Debug, Clone)]
pub struct BucketSelection<'a> {
    pub bucket: &'static HueBucket,
    /// Swatches whose hue fell in the bucket, before the HSL filter
    pub hue_matches: usize,
    pub swatches: Vec<&'a ColorSwatch>,
}

impl BucketSelection<'_> {
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }
}

/// Run one bucket through hue selection, HSL filter and lightness sort
pub fn select_bucket<'a>(
    bucket: &'static HueBucket,
    swatches: &'a [ColorSwatch],
    filter: &FilterRange,
) -> BucketSelection<'a> {
    let in_bucket: Vec<&ColorSwatch> = swatches
        .iter()
        .filter(|swatch| bucket.contains_hue(swatch.hue()))
        .collect();
    let hue_matches = in_bucket.len();

    let mut selected: Vec<&ColorSwatch> = in_bucket
        .into_iter()
        .filter(|swatch| filter.matches(swatch))
        .collect();
    sort_by_lightness(&mut selected);

    BucketSelection {
        bucket,
        hue_matches,
        swatches: selected,
    }
}

/// Select every bucket of the table, in table order (empty buckets included)
pub fn sort_into_buckets<'a>(
    swatches: &'a [ColorSwatch],
    filter: &FilterRange,
) -> Vec<BucketSelection<'a>> {
    HUE_BUCKETS
        .iter()
        .map(|bucket| select_bucket(bucket, swatches, filter))
        .collect()
}

/// Stable ascending sort by lightness; equal lightness keeps input order
pub fn sort_by_lightness(swatches: &mut [&ColorSwatch]) {
    swatches.sort_by(|a, b| a.lightness().total_cmp(&b.lightness()));
}
