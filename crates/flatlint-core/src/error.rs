//! Error types and handling for flat configuration resolution

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration resolution operations
#[derive(Debug, Error)]
pub enum FlatlintError {
    /// A glob pattern in `files` or `ignores` failed to compile
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Two matching fragments redefined a scalar language option with
    /// incompatible source shapes (e.g. symbolic vs numeric `ecmaVersion`)
    #[error(
        "Conflicting types for language option '{option}': '{previous}' redefined as '{conflicting}'"
    )]
    ConflictingOptionType {
        option: String,
        previous: String,
        conflicting: String,
    },

    /// A severity value outside the recognized enumeration
    #[error("Unknown severity value '{value}' (expected \"off\", \"warn\", \"error\", 0, 1, or 2)")]
    UnknownSeverity { value: String },

    /// Configuration loading, parsing, or discovery errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Pattern,
    Conflict,
    Severity,
    Config,
    Io,
}

impl FlatlintError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlatlintError::InvalidPattern { .. } => ErrorKind::Pattern,
            FlatlintError::ConflictingOptionType { .. } => ErrorKind::Conflict,
            FlatlintError::UnknownSeverity { .. } => ErrorKind::Severity,
            FlatlintError::ConfigError { .. } => ErrorKind::Config,
            FlatlintError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Check if this error is recoverable (the caller can retry resolution
    /// under a last-write-wins conflict policy)
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Conflict)
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a conflicting option type error
    pub fn conflicting_option_type(
        option: impl Into<String>,
        previous: impl ToString,
        conflicting: impl ToString,
    ) -> Self {
        Self::ConflictingOptionType {
            option: option.into(),
            previous: previous.to_string(),
            conflicting: conflicting.to_string(),
        }
    }

    /// Create an unknown severity error
    pub fn unknown_severity(value: impl Into<String>) -> Self {
        Self::UnknownSeverity {
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for FlatlintError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
