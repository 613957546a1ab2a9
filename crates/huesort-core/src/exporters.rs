//! Swatch image export
//!
//! Each swatch becomes one solid horizontal band, stacked top to bottom in
//! the order given, written as 8-bit RGBA PNG. Rows are streamed to the
//! encoder one at a time, so memory use does not grow with the bucket size.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, SortError};
use crate::models::ColorSwatch;

/// Image width in pixels
pub const SWATCH_WIDTH: u32 = 200;

/// Height of one swatch band in pixels
pub const SWATCH_HEIGHT: u32 = 200;

/// Total image height for `swatch_count` bands, `None` past `u32::MAX`
pub fn image_height(swatch_count: usize) -> Option<u32> {
    u32::try_from(swatch_count).ok()?.checked_mul(SWATCH_HEIGHT)
}

/// One row of pixels in a single color
fn band_row(swatch: &ColorSwatch) -> Vec<u8> {
    swatch.color().to_array().repeat(SWATCH_WIDTH as usize)
}

/// Render the swatches and write them to `path`, replacing any existing file
///
/// # Errors
///
/// An empty swatch list, or one too tall for a PNG, is rejected with
/// `SortError::Encode` and nothing is written.
pub fn export_swatches<P: AsRef<Path>>(swatches: &[&ColorSwatch], path: P) -> Result<()> {
    let path = path.as_ref();
    if swatches.is_empty() {
        return Err(SortError::Encode {
            path: path.to_path_buf(),
            reason: "no swatches to render".to_string(),
        });
    }
    let height = image_height(swatches.len()).ok_or_else(|| SortError::Encode {
        path: path.to_path_buf(),
        reason: format!("{} swatches do not fit in one image", swatches.len()),
    })?;

    let file = File::create(path).map_err(|e| SortError::io(path, e))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), SWATCH_WIDTH, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let encode_err = |e: png::EncodingError| match e {
        png::EncodingError::IoError(source) => SortError::io(path, source),
        other => SortError::Encode {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    };

    let mut writer = encoder.write_header().map_err(encode_err)?;
    let mut stream = writer.stream_writer().map_err(encode_err)?;
    for swatch in swatches {
        let row = band_row(swatch);
        for _ in 0..SWATCH_HEIGHT {
            stream.write_all(&row).map_err(|e| SortError::io(path, e))?;
        }
    }
    stream.finish().map_err(encode_err)?;
    writer.finish().map_err(encode_err)?;
    Ok(())
}
