// ABOUTME: Unit tests for engine configuration and club catalog loading
// ABOUTME: Validates environment overrides, range validation, and club config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::fs;

use carrylab::config::{ClubCatalog, ConfigError, EngineConfig};
use serial_test::serial;
use tempfile::TempDir;

const OVERRIDES: [&str; 7] = [
    "CARRYLAB_MIN_CARRY",
    "CARRYLAB_WARMUP_WINDOW",
    "CARRYLAB_WARMUP_FRACTION",
    "CARRYLAB_WARMUP_STREAK",
    "CARRYLAB_WARMUP_MIN_SHOTS",
    "CARRYLAB_TREND_THRESHOLD",
    "CARRYLAB_CLUB_CONFIG",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_overrides();
    let config = EngineConfig::from_environment().unwrap();
    assert_eq!(config, EngineConfig::default());
    assert!(config.club_config_path.is_none());
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_overrides();
    env::set_var("CARRYLAB_WARMUP_WINDOW", "7");
    env::set_var("CARRYLAB_WARMUP_MIN_SHOTS", "20");
    env::set_var("CARRYLAB_TREND_THRESHOLD", "0.05");
    env::set_var("CARRYLAB_CLUB_CONFIG", "/etc/carrylab/clubs.json");

    let config = EngineConfig::from_environment().unwrap();
    clear_overrides();

    assert_eq!(config.warmup.window_size, 7);
    assert_eq!(config.warmup.min_session_shots, 20);
    assert!((config.trend.flat_threshold - 0.05).abs() < f64::EPSILON);
    assert_eq!(
        config.club_config_path.unwrap().to_str(),
        Some("/etc/carrylab/clubs.json")
    );
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("CARRYLAB_WARMUP_WINDOW", "five");
    let result = EngineConfig::from_environment();
    clear_overrides();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnvValue {
            name: "CARRYLAB_WARMUP_WINDOW",
            ..
        })
    ));
}

#[test]
#[serial]
fn test_window_larger_than_minimum_session_is_rejected() {
    clear_overrides();
    env::set_var("CARRYLAB_WARMUP_WINDOW", "30");
    let result = EngineConfig::from_environment();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_invalid_ranges_fail_validation() {
    let mut config = EngineConfig::default();
    config.warmup.stabilization_fraction = 1.5;
    assert!(config.validate().is_err());

    let mut config = EngineConfig::default();
    config.trend.needs_attention_score = 3;
    assert!(config.validate().is_err());

    let mut config = EngineConfig::default();
    config.comparison.carry = -1.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_club_config_file_overrides_targets() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clubs.json");
    fs::write(
        &path,
        r#"{
            "smash_targets": { "7 Iron": 1.36 },
            "aliases": { "7i": "7 Iron" },
            "bag_order": ["Driver", "7 Iron", "PW"]
        }"#,
    )
    .unwrap();

    let catalog = ClubCatalog::load(Some(&path));
    assert!((catalog.smash_target("7i") - 1.36).abs() < f64::EPSILON);
    assert_eq!(catalog.canonical_name("7i"), "7 Iron");
    assert_eq!(catalog.bag_order(), ["Driver", "7 Iron", "PW"]);
}

#[test]
fn test_unreadable_club_config_falls_back_to_builtin() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    assert_eq!(
        ClubCatalog::load(Some(&missing)).bag_order(),
        ClubCatalog::builtin().bag_order()
    );

    let malformed = dir.path().join("malformed.json");
    fs::write(&malformed, "{ not json").unwrap();
    let catalog = ClubCatalog::load(Some(&malformed));
    assert!((catalog.smash_target("Driver") - 1.48).abs() < f64::EPSILON);
}
