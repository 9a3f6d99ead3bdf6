// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
// ABOUTME: Snapshot input helpers for carrylab
// ABOUTME: Resolves the snapshot path and loads shots through the JSON shot store

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

use carrylab::models::Shot;
use carrylab::snapshot::{JsonShotStore, ShotStore};

/// Require a snapshot path from `--input` or `CARRYLAB_INPUT`
pub fn resolve_input(input: Option<&Path>) -> Result<PathBuf> {
    let Some(path) = input else {
        bail!("No shot snapshot given: pass --input <path> or set CARRYLAB_INPUT");
    };
    Ok(path.to_path_buf())
}

/// Load every shot in the snapshot
pub fn load_snapshot(path: &Path) -> Result<Vec<Shot>> {
    let store = JsonShotStore::new(path);
    debug!(source = %store.describe(), "Loading shot snapshot");
    store
        .load_shots()
        .with_context(|| format!("Failed to load shots from {}", path.display()))
}
