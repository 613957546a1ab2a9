//! Core data types: named swatches and the HSL filter box

use crate::color::{Hsl, Rgba};
use crate::error::{Result, SortError};

/// A named color sample
///
/// HSL is derived once at construction; the value is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSwatch {
    name: String,
    color: Rgba,
    hsl: Hsl,
}

impl ColorSwatch {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            name: name.into(),
            color,
            hsl: color.to_hsl(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn hue(&self) -> f32 {
        self.hsl.h
    }

    pub fn saturation(&self) -> f32 {
        self.hsl.s
    }

    pub fn lightness(&self) -> f32 {
        self.hsl.l
    }
}

/// Inclusive hue/saturation/lightness box applied after bucketing
///
/// Both ends of every range are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterRange {
    pub min_hue: f32,
    pub max_hue: f32,
    pub min_saturation: f32,
    pub max_saturation: f32,
    pub min_lightness: f32,
    pub max_lightness: f32,
}

impl Default for FilterRange {
    fn default() -> Self {
        Self {
            min_hue: 0.0,
            max_hue: 360.0,
            min_saturation: 0.0,
            max_saturation: 1.0,
            min_lightness: 0.0,
            max_lightness: 1.0,
        }
    }
}

impl FilterRange {
    /// True if every component lies within its inclusive range
    #[inline]
    pub fn contains(&self, hsl: Hsl) -> bool {
        hsl.h >= self.min_hue
            && hsl.h <= self.max_hue
            && hsl.s >= self.min_saturation
            && hsl.s <= self.max_saturation
            && hsl.l >= self.min_lightness
            && hsl.l <= self.max_lightness
    }

    #[inline]
    pub fn matches(&self, swatch: &ColorSwatch) -> bool {
        self.contains(swatch.hsl())
    }

    /// Reject out-of-domain values and inverted ranges
    ///
    /// # Errors
    ///
    /// Returns `SortError::InvalidOption` naming the first offending flag.
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, f32, f32); 6] = [
            ("min-hue", self.min_hue, 360.0),
            ("max-hue", self.max_hue, 360.0),
            ("min-saturation", self.min_saturation, 1.0),
            ("max-saturation", self.max_saturation, 1.0),
            ("min-lightness", self.min_lightness, 1.0),
            ("max-lightness", self.max_lightness, 1.0),
        ];
        for (option, value, upper) in checks {
            if value.is_nan() {
                return Err(SortError::invalid_option(option, "value is not a number"));
            }
            if !(0.0..=upper).contains(&value) {
                return Err(SortError::invalid_option(
                    option,
                    format!("{} is outside [0, {}]", value, upper),
                ));
            }
        }

        let pairs: [(&'static str, &'static str, f32, f32); 3] = [
            ("min-hue", "max-hue", self.min_hue, self.max_hue),
            (
                "min-saturation",
                "max-saturation",
                self.min_saturation,
                self.max_saturation,
            ),
            (
                "min-lightness",
                "max-lightness",
                self.min_lightness,
                self.max_lightness,
            ),
        ];
        for (min_option, max_option, min, max) in pairs {
            if min > max {
                return Err(SortError::invalid_option(
                    min_option,
                    format!("{} is greater than --{} {}", min, max_option, max),
                ));
            }
        }

        Ok(())
    }
}
