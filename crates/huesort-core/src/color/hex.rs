//! Web hex color parsing
//!
//! Accepted forms (leading `#` required):
//! * `#RGB`
//! * `#RRGGBB`
//! * `#AARRGGBB` (alpha first)

use super::Rgba;

/// Reasons a hex color token is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexColorError {
    Empty,
    MissingHash,
    InvalidLength(usize),
    InvalidDigit(char),
}

impl std::fmt::Display for HexColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexColorError::Empty => write!(f, "empty color"),
            HexColorError::MissingHash => write!(f, "hex color must start with '#'"),
            HexColorError::InvalidLength(len) => {
                write!(f, "hex color must have 3, 6 or 8 digits, got {}", len)
            }
            HexColorError::InvalidDigit(c) => write!(f, "invalid hex digit '{}'", c),
        }
    }
}

impl std::error::Error for HexColorError {}

/// Parse a `#`-prefixed hex color
pub fn parse_hex_color(token: &str) -> Result<Rgba, HexColorError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(HexColorError::Empty);
    }
    let digits = token.strip_prefix('#').ok_or(HexColorError::MissingHash)?;

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(HexColorError::InvalidDigit(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    let byte = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];

    match nibbles.len() {
        3 => Ok(Rgba::opaque(
            nibbles[0] * 17,
            nibbles[1] * 17,
            nibbles[2] * 17,
        )),
        6 => Ok(Rgba::opaque(byte(0), byte(2), byte(4))),
        8 => Ok(Rgba {
            r: byte(2),
            g: byte(4),
            b: byte(6),
            a: byte(0),
        }),
        len => Err(HexColorError::InvalidLength(len)),
    }
}
