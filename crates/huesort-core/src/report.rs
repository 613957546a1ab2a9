//! Console report for populated buckets
//!
//! ```text
//! Red
//! 000.000, 1.000, 0.500: Cherry
//!
//! ```

use std::io::{self, Write};

use crate::models::ColorSwatch;

/// `hue, saturation, lightness: name` with fixed-width hue
pub fn format_swatch_line(swatch: &ColorSwatch) -> String {
    format!(
        "{:07.3}, {:.3}, {:.3}: {}",
        swatch.hue(),
        swatch.saturation(),
        swatch.lightness(),
        swatch.name()
    )
}

/// Bucket header, one line per swatch, then a blank line
///
/// Writes nothing for an empty list.
pub fn write_bucket_report<W: Write>(
    out: &mut W,
    bucket_name: &str,
    swatches: &[&ColorSwatch],
) -> io::Result<()> {
    if swatches.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", bucket_name)?;
    for swatch in swatches {
        writeln!(out, "{}", format_swatch_line(swatch))?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_format_swatch_line() {
        let cherry = ColorSwatch::new("Cherry", Rgba::opaque(0xFF, 0x00, 0x00));
        assert_eq!(format_swatch_line(&cherry), "000.000, 1.000, 0.500: Cherry");

        let sky = ColorSwatch::new("Sky", Rgba::opaque(0x33, 0x99, 0xFF));
        assert_eq!(format_swatch_line(&sky), "210.000, 1.000, 0.600: Sky");

        let leaf = ColorSwatch::new("Leaf", Rgba::opaque(0x33, 0x99, 0x33));
        assert_eq!(format_swatch_line(&leaf), "120.000, 0.500, 0.400: Leaf");
    }

    #[test]
    fn test_format_pads_small_hue() {
        let scarlet = ColorSwatch::new("Scarlet", Rgba::opaque(255, 20, 0));
        assert!(format_swatch_line(&scarlet).starts_with("004.706, "));
    }

    #[test]
    fn test_write_bucket_report() {
        let dark = ColorSwatch::new("Forest", Rgba::opaque(0x00, 0x33, 0x00));
        let mid = ColorSwatch::new("Lime", Rgba::opaque(0x00, 0xFF, 0x00));
        let mut out = Vec::new();

        write_bucket_report(&mut out, "Green", &[&dark, &mid]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Green\n120.000, 1.000, 0.100: Forest\n120.000, 1.000, 0.500: Lime\n\n"
        );
    }

    #[test]
    fn test_empty_bucket_writes_nothing() {
        let mut out = Vec::new();
        write_bucket_report(&mut out, "Cyan", &[]).unwrap();
        assert!(out.is_empty());
    }
}
