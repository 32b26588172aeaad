// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// File could not be parsed.
    #[error("Failed to parse {format} config: {message}")]
    Parse {
        /// The format that was being parsed.
        format: &'static str,
        /// The parser's error message.
        message: String,
    },

    /// File extension does not map to a supported format.
    #[error("Unsupported config format: {path} (expected .yaml, .yml, or .toml)")]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// A configuration value failed validation.
    #[error("Invalid configuration: {message}")]
    Validation {
        /// What failed.
        message: String,
    },

    /// The session secret is not configured.
    #[error("Session secret is not configured (set FESTIQUE_SESSION_SECRET)")]
    MissingSecret,
}

impl ConfigError {
    /// Creates an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::validation("port out of range");
        assert_eq!(err.to_string(), "Invalid configuration: port out of range");

        let err = ConfigError::MissingSecret;
        assert!(err.to_string().contains("FESTIQUE_SESSION_SECRET"));
    }
}
