//! HSL (Hue-Saturation-Lightness) derivation from RGB

/// HSL color representation
/// - H (hue): 0.0-360.0 degrees, exclusive of 360
/// - S (saturation): 0.0-1.0
/// - L (lightness): 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    /// Derive HSL from 8-bit RGB channels
    ///
    /// Every value is a single division of integers, so hues that sit on a
    /// whole degree come out exact and colors with the same `max + min`
    /// share one lightness.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let sum = max + min;

        let l = sum as f32 / 510.0;
        if delta == 0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if sum <= 255 {
            delta as f32 / sum as f32
        } else {
            delta as f32 / (510 - sum) as f32
        };

        // Sextant numerator in units of delta, always in [0, 6 * delta)
        let sextant = if max == r {
            let n = g - b;
            if n < 0 {
                n + 6 * delta
            } else {
                n
            }
        } else if max == g {
            b - r + 2 * delta
        } else {
            r - g + 4 * delta
        };

        Hsl {
            h: normalize_hue((60 * sextant) as f32 / delta as f32),
            s,
            l,
        }
    }
}

/// Convert RGB to HSL
///
/// Input: RGB values in range 0.0-1.0
/// Output: HSL where H is 0.0-360.0 (exclusive), S and L are 0.0-1.0
#[inline]
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> Hsl {
    let r = r.clamp(0.0, 1.0);
    let g = g.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    // Achromatic: no meaningful hue
    if delta < 1e-6 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if (max - r).abs() < 1e-6 {
        let mut h = (g - b) / delta;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < 1e-6 {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    Hsl {
        h: normalize_hue(h),
        s,
        l,
    }
}

/// Wrap any hue in degrees into [0, 360)
#[inline]
pub fn normalize_hue(hue: f32) -> f32 {
    let h = hue % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -0.0 % 360 and rounding at the top edge can both land outside the half-open range
    if h >= 360.0 {
        0.0
    } else {
        h.abs()
    }
}
