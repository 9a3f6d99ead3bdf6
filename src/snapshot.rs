// ABOUTME: Read-only shot snapshot sources feeding the analytics engine
// ABOUTME: JSON file store accepting a bare shot array or a wrapped shots document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::Shot;

/// Source of an immutable shot snapshot
///
/// Implementations return shots in insertion order, which is chronological
/// within each session.
pub trait ShotStore {
    /// Load every shot in the snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded
    fn load_shots(&self) -> AppResult<Vec<Shot>>;

    /// Human-readable description of the source
    fn describe(&self) -> String;
}

/// Shots already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryShotStore {
    shots: Vec<Shot>,
}

impl InMemoryShotStore {
    /// Wrap a shot collection
    #[must_use]
    pub const fn new(shots: Vec<Shot>) -> Self {
        Self { shots }
    }
}

impl ShotStore for InMemoryShotStore {
    fn load_shots(&self) -> AppResult<Vec<Shot>> {
        Ok(self.shots.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory snapshot ({} shots)", self.shots.len())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Shots(Vec<Shot>),
    Wrapped { shots: Vec<Shot> },
}

impl SnapshotDocument {
    fn into_shots(self) -> Vec<Shot> {
        match self {
            Self::Shots(shots) | Self::Wrapped { shots } => shots,
        }
    }
}

/// JSON snapshot file
#[derive(Debug, Clone)]
pub struct JsonShotStore {
    path: PathBuf,
}

impl JsonShotStore {
    /// Store reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decode shots from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is neither a shot array nor
    /// an object with a `shots` array
    pub fn parse(json: &str) -> AppResult<Vec<Shot>> {
        let document: SnapshotDocument = serde_json::from_str(json).map_err(|e| {
            AppError::serialization(format!("Invalid shot snapshot: {e}")).with_source(e)
        })?;
        Ok(document.into_shots())
    }
}

impl ShotStore for JsonShotStore {
    fn load_shots(&self) -> AppResult<Vec<Shot>> {
        let path_label = self.path.display().to_string();
        debug!(path = %path_label, "Reading shot snapshot");

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AppError::storage(format!("Failed to read shot snapshot: {e}"))
                .with_resource_id(path_label.clone())
                .with_source(e)
        })?;
        let shots = Self::parse(&contents).map_err(|e| e.with_resource_id(path_label.clone()))?;

        info!(path = %path_label, shots = shots.len(), "Loaded shot snapshot");
        Ok(shots)
    }

    fn describe(&self) -> String {
        format!("JSON snapshot at {}", self.path.display())
    }
}
