// ABOUTME: Configuration error types for engine and club catalog validation
// ABOUTME: Defines error variants for invalid ranges, unreadable files, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Configuration error types.

use std::io;

use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., fraction not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Environment variable could not be parsed
    #[error("Invalid value for {name}: {value}")]
    InvalidEnvValue {
        /// Variable name
        name: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Configuration file is not valid JSON for the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::Io { .. } => ErrorCode::ConfigMissing,
            ConfigError::InvalidRange(_) | ConfigError::InvalidEnvValue { .. } => {
                ErrorCode::ValueOutOfRange
            }
            ConfigError::Parse(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
