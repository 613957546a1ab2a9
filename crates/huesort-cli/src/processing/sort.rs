//! One full sorting run over a swatch file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use huesort_core::exporters::export_swatches;
use huesort_core::loader::load_swatches;
use huesort_core::report::write_bucket_report;
use huesort_core::verbose_println;
use huesort_core::{sort_into_buckets, FilterRange, Result, SortError};

/// Inputs for a sorting run
#[derive(Clone, Debug)]
pub struct SortParams {
    pub swatch_path: PathBuf,
    pub output_dir: PathBuf,
    pub filter: FilterRange,
}

/// A bucket image that was written
#[derive(Clone, Debug, PartialEq)]
pub struct WrittenBucket {
    pub name: &'static str,
    pub swatch_count: usize,
    pub path: PathBuf,
}

/// What a run produced
#[derive(Clone, Debug, Default)]
pub struct SortSummary {
    pub swatches_loaded: usize,
    pub written: Vec<WrittenBucket>,
}

/// Load, bucket, filter and sort the swatches, then for every bucket in table
/// order: delete its stale image, and if anything survived, write the new
/// image and the report.
///
/// The filter is expected to be validated already (see `build_filter_range`).
/// Any I/O failure aborts the run.
pub fn run_sort<W: Write>(params: &SortParams, out: &mut W) -> Result<SortSummary> {
    let swatches = load_swatches(&params.swatch_path)?;

    fs::create_dir_all(&params.output_dir).map_err(|e| SortError::Io {
        path: params.output_dir.clone(),
        source: e,
    })?;

    let mut summary = SortSummary {
        swatches_loaded: swatches.len(),
        written: Vec::new(),
    };

    for selection in sort_into_buckets(&swatches, &params.filter) {
        let bucket = selection.bucket;
        let path = params.output_dir.join(bucket.file_name());

        remove_stale_output(&path)?;

        verbose_println!(
            "[{}] {} in hue range, {} after filter",
            bucket.name,
            selection.hue_matches,
            selection.len()
        );

        if selection.is_empty() {
            continue;
        }

        export_swatches(&selection.swatches, &path)?;
        verbose_println!("[{}] wrote {}", bucket.name, path.display());

        write_bucket_report(out, bucket.name, &selection.swatches).map_err(|e| SortError::Io {
            path: PathBuf::from("<stdout>"),
            source: e,
        })?;

        summary.written.push(WrittenBucket {
            name: bucket.name,
            swatch_count: selection.len(),
            path,
        });
    }

    Ok(summary)
}

/// Delete a previous run's image so an empty bucket leaves no file behind
fn remove_stale_output(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    fs::remove_file(path).map_err(|e| SortError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    verbose_println!("[cleanup] removed {}", path.display());
    Ok(())
}
