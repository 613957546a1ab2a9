use crate::error::{Result, SortError};
use crate::models::FilterRange;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

// Global verbose flag for controlling diagnostic output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, diagnostic messages are printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Environment variable pointing at a config file.
pub const CONFIG_ENV_VAR: &str = "HUESORT_CONFIG";

/// Candidate config file names searched for on disk.
const CONFIG_FILENAMES: &[&str] = &["huesort.yml", "huesort.yaml"];

/// Loaded configuration, where it came from, and anything that went wrong finding it.
#[derive(Debug)]
pub struct SorterConfigHandle {
    pub config: SorterConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl SorterConfigHandle {
    fn with_config(config: SorterConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }

    /// Report config source and warnings in verbose mode.
    pub fn log_usage(&self) {
        if let Some(source) = &self.source {
            verbose_println!("[huesort] Loaded config from {}", source.display());
        } else {
            verbose_println!("[huesort] Using built-in defaults");
        }
        for warning in &self.warnings {
            verbose_println!("[huesort] Config warning: {}", warning);
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SorterConfig {
    pub defaults: SorterDefaults,
}

/// Defaults used when a flag is not given on the command line.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SorterDefaults {
    pub min_hue: f32,
    pub max_hue: f32,
    pub min_saturation: f32,
    pub max_saturation: f32,
    pub min_lightness: f32,
    pub max_lightness: f32,
    /// Directory the bucket images are written to
    pub output_dir: PathBuf,
}

impl Default for SorterDefaults {
    fn default() -> Self {
        let filter = FilterRange::default();
        Self {
            min_hue: filter.min_hue,
            max_hue: filter.max_hue,
            min_saturation: filter.min_saturation,
            max_saturation: filter.max_saturation,
            min_lightness: filter.min_lightness,
            max_lightness: filter.max_lightness,
            output_dir: PathBuf::from("."),
        }
    }
}

impl SorterDefaults {
    /// Clamp values into their domains and un-invert ranges
    pub(crate) fn sanitize(&mut self) {
        let clamp = |v: f32, upper: f32, fallback: f32| {
            if v.is_nan() {
                fallback
            } else {
                v.clamp(0.0, upper)
            }
        };
        self.min_hue = clamp(self.min_hue, 360.0, 0.0);
        self.max_hue = clamp(self.max_hue, 360.0, 360.0).max(self.min_hue);
        self.min_saturation = clamp(self.min_saturation, 1.0, 0.0);
        self.max_saturation = clamp(self.max_saturation, 1.0, 1.0).max(self.min_saturation);
        self.min_lightness = clamp(self.min_lightness, 1.0, 0.0);
        self.max_lightness = clamp(self.max_lightness, 1.0, 1.0).max(self.min_lightness);
        if self.output_dir.as_os_str().is_empty() {
            self.output_dir = PathBuf::from(".");
        }
    }

    /// Filter box described by these defaults
    pub fn filter_range(&self) -> FilterRange {
        FilterRange {
            min_hue: self.min_hue,
            max_hue: self.max_hue,
            min_saturation: self.min_saturation,
            max_saturation: self.max_saturation,
            min_lightness: self.min_lightness,
            max_lightness: self.max_lightness,
        }
    }
}

/// Load the config file named on the command line, or the first readable,
/// parsable file among the discovered candidates.
///
/// # Errors
///
/// A `custom_path` that cannot be read gives `SortError::Io`, one that does
/// not parse gives `SortError::Config`. Problems with discovered candidates
/// are only recorded as warnings, and with no usable file the built-in
/// defaults are returned.
pub fn load_sorter_config(custom_path: Option<&Path>) -> Result<SorterConfigHandle> {
    if let Some(path) = custom_path {
        let contents = fs::read_to_string(path).map_err(|e| SortError::io(path, e))?;
        let config = parse_sorter_config(&contents).map_err(|e| SortError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let source = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        return Ok(SorterConfigHandle::with_config(config, Some(source), Vec::new()));
    }

    let mut warnings = Vec::new();
    for candidate in get_config_candidates() {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match parse_sorter_config(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return Ok(SorterConfigHandle::with_config(config, Some(source), warnings));
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No config found; using built-in defaults.".to_string());
    Ok(SorterConfigHandle::with_config(SorterConfig::default(), None, warnings))
}

/// Parse and sanitize YAML config text.
pub fn parse_sorter_config(
    contents: &str,
) -> std::result::Result<SorterConfig, serde_yaml::Error> {
    let mut config: SorterConfig = serde_yaml::from_str(contents)?;
    config.defaults.sanitize();
    Ok(config)
}

fn get_config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("huesort").join(name));
        }
    }

    candidates
}
