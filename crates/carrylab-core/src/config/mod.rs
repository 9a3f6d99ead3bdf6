// ABOUTME: Configuration module for the carrylab engine
// ABOUTME: Club target catalog, engine thresholds, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

/// Club smash targets, aliases, and bag order
pub mod club_catalog;
/// Engine thresholds with environment overrides
pub mod engine;
/// Configuration error types
pub mod error;

pub use club_catalog::{ClubCatalog, ClubProfile, ClubTargetConfig};
pub use engine::{
    ComparisonThresholds, EngineConfig, ExclusionPolicy, TrendSettings, WarmupSettings,
};
pub use error::ConfigError;
