// ABOUTME: Immutable club catalog built once from the club target configuration
// ABOUTME: Resolves labels and aliases to smash targets and canonical bag positions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Club Catalog
//!
//! The catalog is constructed once at process start and passed by reference
//! to every component that needs club targets or bag ordering. It is never
//! mutated afterwards, so concurrent readers share it without locking.
//!
//! Target lookup order: configured target for the name, configured target
//! for the alias' canonical name, category default for the parsed
//! [`ClubKind`], global default.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ConfigError;
use crate::models::ClubKind;

/// Bag order used when the configuration provides none
const DEFAULT_BAG_ORDER: [&str; 14] = [
    "Driver", "3 Wood", "5 Wood", "4 Hybrid", "4 Iron", "5 Iron", "6 Iron", "7 Iron", "8 Iron",
    "9 Iron", "PW", "GW", "SW", "LW",
];

/// Raw club configuration as stored in JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubTargetConfig {
    /// Club name to target smash factor
    #[serde(default)]
    pub smash_targets: BTreeMap<String, f64>,
    /// Alternate label to canonical club name
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Canonical club names, longest club first
    #[serde(default)]
    pub bag_order: Vec<String>,
}

impl ClubTargetConfig {
    /// Parse configuration from a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid club configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// Resolved view of one club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubProfile {
    /// Canonical club name
    pub name: String,
    /// Parsed club category
    pub kind: ClubKind,
    /// Smash-factor target for this club
    pub smash_target: f64,
    /// Index in the configured bag order, if listed
    pub bag_position: Option<usize>,
}

/// Immutable lookup table for club targets and ordering
#[derive(Debug, Clone)]
pub struct ClubCatalog {
    profiles: HashMap<String, ClubProfile>,
    aliases: HashMap<String, String>,
    bag_order: Vec<String>,
}

impl Default for ClubCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ClubCatalog {
    /// Catalog with the default bag and category-derived targets
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_config(&ClubTargetConfig::default())
    }

    /// Build the catalog, classifying every configured club once
    #[must_use]
    pub fn from_config(config: &ClubTargetConfig) -> Self {
        let bag_order: Vec<String> = if config.bag_order.is_empty() {
            DEFAULT_BAG_ORDER.iter().map(|&name| name.to_owned()).collect()
        } else {
            config.bag_order.clone()
        };

        let mut profiles = HashMap::new();
        for (position, name) in bag_order.iter().enumerate() {
            let kind = ClubKind::parse(name);
            profiles.insert(
                lookup_key(name),
                ClubProfile {
                    name: name.clone(),
                    kind,
                    smash_target: kind.default_smash_target(),
                    bag_position: Some(position),
                },
            );
        }

        for (name, &target) in &config.smash_targets {
            if !target.is_finite() || target <= 0.0 {
                warn!(club = %name, target, "Ignoring invalid smash target");
                continue;
            }
            profiles
                .entry(lookup_key(name))
                .and_modify(|profile| profile.smash_target = target)
                .or_insert_with(|| ClubProfile {
                    name: name.clone(),
                    kind: ClubKind::parse(name),
                    smash_target: target,
                    bag_position: None,
                });
        }

        let aliases = config
            .aliases
            .iter()
            .map(|(alias, canonical)| (lookup_key(alias), canonical.clone()))
            .collect();

        debug!(
            clubs = profiles.len(),
            bag_size = bag_order.len(),
            "Club catalog built"
        );

        Self {
            profiles,
            aliases,
            bag_order,
        }
    }

    /// Load the catalog from an optional JSON file
    ///
    /// Absent or malformed configuration degrades to the built-in catalog.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match ClubTargetConfig::from_file(path) {
            Ok(config) => Self::from_config(&config),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    "Failed to load club configuration: {e}, using defaults"
                );
                Self::builtin()
            }
        }
    }

    /// Resolve a label (or alias) to its club profile
    #[must_use]
    pub fn resolve(&self, label: &str) -> ClubProfile {
        let canonical = self.canonical_name(label);
        if let Some(profile) = self.profiles.get(&lookup_key(canonical)) {
            return profile.clone();
        }
        let kind = ClubKind::parse(canonical);
        ClubProfile {
            name: canonical.trim().to_owned(),
            kind,
            smash_target: kind.default_smash_target(),
            bag_position: None,
        }
    }

    /// Canonical name for a label, following aliases
    #[must_use]
    pub fn canonical_name<'a>(&'a self, label: &'a str) -> &'a str {
        self.aliases
            .get(&lookup_key(label))
            .map_or(label, String::as_str)
    }

    /// Grouping key for a label: labels naming the same club share a key
    /// regardless of alias, case, or surrounding whitespace
    #[must_use]
    pub fn club_key(&self, label: &str) -> String {
        lookup_key(self.canonical_name(label))
    }

    /// Smash-factor target for a club label
    #[must_use]
    pub fn smash_target(&self, label: &str) -> f64 {
        let canonical = self.canonical_name(label);
        self.profiles.get(&lookup_key(canonical)).map_or_else(
            || ClubKind::parse(canonical).default_smash_target(),
            |profile| profile.smash_target,
        )
    }

    /// Canonical bag order
    #[must_use]
    pub fn bag_order(&self) -> &[String] {
        &self.bag_order
    }

    /// Order two club labels by bag position, then category, then name
    #[must_use]
    pub fn compare_clubs(&self, left: &str, right: &str) -> Ordering {
        let left_profile = self.resolve(left);
        let right_profile = self.resolve(right);
        let rank = |profile: &ClubProfile| {
            (
                profile.bag_position.unwrap_or(usize::MAX),
                profile.kind.bag_rank(),
            )
        };
        rank(&left_profile)
            .cmp(&rank(&right_profile))
            .then_with(|| left.cmp(right))
    }
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}
