//! Error type shared by every huesort operation

use std::path::PathBuf;

/// Result alias used throughout huesort
pub type Result<T> = std::result::Result<T, SortError>;

/// Errors that abort a sorting run
#[derive(Debug)]
pub enum SortError {
    /// A file could not be opened, read, created or deleted
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A swatch line could not be parsed (1-based line number)
    MalformedInput { line: usize, reason: String },
    /// A filter option is out of domain or its range is inverted
    InvalidOption { option: &'static str, reason: String },
    /// The PNG encoder rejected the image or failed to write it
    Encode { path: PathBuf, reason: String },
    /// A config file named on the command line is not valid YAML for huesort
    Config { path: PathBuf, reason: String },
}

impl SortError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SortError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        SortError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_option(option: &'static str, reason: impl Into<String>) -> Self {
        SortError::InvalidOption {
            option,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            SortError::MalformedInput { line, reason } => {
                write!(f, "Malformed swatch on line {}: {}", line, reason)
            }
            SortError::InvalidOption { option, reason } => {
                write!(f, "Invalid option --{}: {}", option, reason)
            }
            SortError::Encode { path, reason } => {
                write!(f, "Failed to write image {}: {}", path.display(), reason)
            }
            SortError::Config { path, reason } => {
                write!(f, "Invalid config {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
