//! Swatch list loading
//!
//! One swatch per line as `name,#hex`. The line is split on the first comma
//! only, so names never need escaping for anything but a comma.
//! Blank lines are rejected rather than skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::color::parse_hex_color;
use crate::error::{Result, SortError};
use crate::models::ColorSwatch;
use crate::verbose_println;

/// Read every swatch from a file, in file order
///
/// # Errors
///
/// `SortError::Io` if the file cannot be opened or read,
/// `SortError::MalformedInput` for the first line that does not parse.
pub fn load_swatches<P: AsRef<Path>>(path: P) -> Result<Vec<ColorSwatch>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SortError::io(path, e))?;
    let swatches = read_swatches(BufReader::new(file)).map_err(|err| match err {
        SortError::Io { source, .. } => SortError::io(path, source),
        other => other,
    })?;

    verbose_println!(
        "[load] {} swatches from {}",
        swatches.len(),
        path.display()
    );
    Ok(swatches)
}

/// Parse swatches from any buffered reader
///
/// I/O errors are reported against an empty path; [`load_swatches`] fills in
/// the real one.
pub fn read_swatches<R: BufRead>(reader: R) -> Result<Vec<ColorSwatch>> {
    let mut swatches = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| SortError::io("", e))?;
        swatches.push(parse_swatch_line(&line, index + 1)?);
    }
    Ok(swatches)
}

/// Parse a single `name,#hex` line
pub fn parse_swatch_line(line: &str, line_number: usize) -> Result<ColorSwatch> {
    if line.trim().is_empty() {
        return Err(SortError::malformed(line_number, "blank line"));
    }

    let (name, color) = line.split_once(',').ok_or_else(|| {
        SortError::malformed(line_number, format!("expected 'name,#hex', got '{}'", line))
    })?;

    let color = parse_hex_color(color)
        .map_err(|e| SortError::malformed(line_number, format!("{} in '{}'", e, line)))?;

    Ok(ColorSwatch::new(name, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_line_splits_on_first_comma() {
        let swatch = parse_swatch_line("Cherry,#FF0000", 1).unwrap();
        assert_eq!(swatch.name(), "Cherry");
        assert_eq!(swatch.color(), Rgba::opaque(255, 0, 0));

        // Only the first comma splits, so the remainder must be the color
        let err = parse_swatch_line("Salt,Pepper,#808080", 4).unwrap_err();
        assert!(matches!(err, SortError::MalformedInput { line: 4, .. }));
    }

    #[test]
    fn test_parse_line_keeps_name_verbatim() {
        let swatch = parse_swatch_line(" Deep Sea ,#003366", 1).unwrap();
        assert_eq!(swatch.name(), " Deep Sea ");
        assert_eq!(swatch.color(), Rgba::opaque(0x00, 0x33, 0x66));
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(matches!(
            parse_swatch_line("NoComma #FF0000", 2),
            Err(SortError::MalformedInput { line: 2, .. })
        ));
        assert!(matches!(
            parse_swatch_line("Bad,#XYZ", 3),
            Err(SortError::MalformedInput { line: 3, .. })
        ));
        assert!(matches!(
            parse_swatch_line("NoHash,FF0000", 5),
            Err(SortError::MalformedInput { line: 5, .. })
        ));
        assert!(matches!(
            parse_swatch_line("   ", 6),
            Err(SortError::MalformedInput { line: 6, .. })
        ));
    }

    #[test]
    fn test_read_swatches_preserves_order() {
        let input = "Cherry,#FF0000\r\nSky,#3399FF\nLeaf,#339933\n";
        let swatches = read_swatches(Cursor::new(input)).unwrap();
        let names: Vec<&str> = swatches.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Cherry", "Sky", "Leaf"]);
        assert_eq!(swatches[0].color(), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_read_swatches_rejects_blank_line() {
        let input = "Cherry,#FF0000\n\nLeaf,#339933\n";
        match read_swatches(Cursor::new(input)) {
            Err(SortError::MalformedInput { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("blank"));
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_read_swatches_empty_input() {
        assert!(read_swatches(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_load_swatches_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Cherry,#FF0000").unwrap();
        writeln!(file, "Lime,#0F0").unwrap();

        let swatches = load_swatches(file.path()).unwrap();
        assert_eq!(swatches.len(), 2);
        assert_eq!(swatches[1].color(), Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn test_load_swatches_missing_file() {
        let err = load_swatches("/nonexistent/swatches.txt").unwrap_err();
        match err {
            SortError::Io { path, .. } => {
                assert_eq!(path, std::path::PathBuf::from("/nonexistent/swatches.txt"))
            }
            other => panic!("expected Io, got {:?}", other),
        }
    }
}
