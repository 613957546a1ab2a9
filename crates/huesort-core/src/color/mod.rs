//! Color model
//!
//! Everything the rest of the crate knows about color goes through here:
//! 8-bit RGBA values, hex parsing and HSL derivation. Nothing in this module
//! touches the filesystem or the image encoder.

mod hex;
mod hsl;


pub use hex::{parse_hex_color, HexColorError};
pub use hsl::{normalize_hue, rgb_to_hsl, Hsl};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// HSL of the color channels; alpha is ignored
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb8(self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}
