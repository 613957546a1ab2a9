//! FilterRange and SortParams builders.

use std::path::{Path, PathBuf};

use huesort_core::config::{load_sorter_config, SorterDefaults};
use huesort_core::{FilterRange, Result};

use crate::args::FilterArgs;
use crate::processing::SortParams;

/// Merge CLI flags over config defaults and validate the result
///
/// Precedence: explicit flag, then config file, then built-in default.
///
/// # Errors
///
/// `SortError::InvalidOption` if any bound is out of domain or a range is inverted.
pub fn build_filter_range(args: &FilterArgs, defaults: &SorterDefaults) -> Result<FilterRange> {
    let filter = FilterRange {
        min_hue: args.min_hue.unwrap_or(defaults.min_hue),
        max_hue: args.max_hue.unwrap_or(defaults.max_hue),
        min_saturation: args.min_saturation.unwrap_or(defaults.min_saturation),
        max_saturation: args.max_saturation.unwrap_or(defaults.max_saturation),
        min_lightness: args.min_lightness.unwrap_or(defaults.min_lightness),
        max_lightness: args.max_lightness.unwrap_or(defaults.max_lightness),
    };
    filter.validate()?;
    Ok(filter)
}

/// Resolve config, filter flags and output directory into run parameters
///
/// Nothing here touches the swatch file; a bad config or option stops the
/// run before any input is read.
pub fn build_sort_params(
    swatch_path: PathBuf,
    out: Option<PathBuf>,
    filter_args: &FilterArgs,
    config_path: Option<&Path>,
) -> Result<SortParams> {
    let config_handle = load_sorter_config(config_path)?;
    config_handle.log_usage();
    let defaults = &config_handle.config.defaults;

    let filter = build_filter_range(filter_args, defaults)?;
    Ok(SortParams {
        swatch_path,
        output_dir: out.unwrap_or_else(|| defaults.output_dir.clone()),
        filter,
    })
}
