//! Filter argument structs for the CLI.

use clap::Args;

/// HSL filter bounds. Unset values fall back to the config file, then to
/// the built-in defaults (full hue circle, full saturation and lightness).
#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct FilterArgs {
    /// Minimum hue in degrees, inclusive [default: 0.0]
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub min_hue: Option<f32>,

    /// Maximum hue in degrees, inclusive [default: 360.0]
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub max_hue: Option<f32>,

    /// Minimum saturation (0.0-1.0), inclusive [default: 0.0]
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub min_saturation: Option<f32>,

    /// Maximum saturation (0.0-1.0), inclusive [default: 1.0]
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub max_saturation: Option<f32>,

    /// Minimum lightness (0.0-1.0), inclusive [default: 0.0]
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub min_lightness: Option<f32>,

    /// Maximum lightness (0.0-1.0), inclusive [default: 1.0]
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub max_lightness: Option<f32>,
}
