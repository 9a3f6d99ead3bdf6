// ABOUTME: Unified error types for snapshot loading and configuration handling
// ABOUTME: Defines ErrorCode categories and the AppError value carried across crate boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! # Error handling
//!
//! The scoring engine never fails on data: sparse or empty input is reported
//! through explicit insufficient-data outcomes. `AppError` covers the glue
//! around it, namely reading shot snapshots and loading configuration.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a glue-layer failure, serialized in `SCREAMING_SNAKE_CASE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request arguments are inconsistent (e.g. one comparison session named)
    InvalidInput = 3000,
    /// A threshold or window lies outside its admissible range
    ValueOutOfRange = 3003,
    /// Session id absent from the snapshot
    ResourceNotFound = 4000,
    /// Configuration file could not be read
    ConfigMissing = 6001,
    /// Configuration parsed but failed validation
    ConfigInvalid = 6002,
    /// Snapshot file could not be read
    StorageError = 9002,
    /// Snapshot JSON did not match the shot schema
    SerializationError = 9003,
}

impl ErrorCode {
    /// Short label used as the prefix of rendered errors
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid request",
            Self::ValueOutOfRange => "Value out of range",
            Self::ResourceNotFound => "Not found",
            Self::ConfigMissing => "Configuration unavailable",
            Self::ConfigInvalid => "Invalid configuration",
            Self::StorageError => "Snapshot unreadable",
            Self::SerializationError => "Snapshot malformed",
        }
    }
}

/// Error raised while loading snapshots or configuration
#[derive(Debug, Error)]
pub struct AppError {
    /// Failure category
    pub code: ErrorCode,
    /// Detail for the operator
    pub message: String,
    /// Resource the error refers to (file path, session id)
    pub resource_id: Option<String>,
    /// Underlying I/O or parse error
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            source: None,
        }
    }

    /// Attach the resource the error refers to
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(ErrorCode::ResourceNotFound, format!("{resource} not found"))
            .with_resource_id(resource)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage read failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)?;
        if let Some(resource) = &self.resource_id {
            write!(f, " ({resource})")?;
        }
        Ok(())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_resource() {
        let error = AppError::not_found("shots.json");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(
            error.to_string(),
            "Not found: shots.json not found (shots.json)"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse = serde_json::from_str::<Vec<f64>>("[1.0,").unwrap_err();
        let error: AppError = parse.into();
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }
}
