// ABOUTME: Engine configuration replacing magic numbers with validated, overridable settings
// ABOUTME: Covers shot exclusion, warmup windows, trend thresholds, and session comparison gates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Engine Configuration
//!
//! Defaults reproduce the published scoring contract. Environment variables
//! may override the tunable windows and thresholds; the calibration anchors
//! in [`crate::constants::calibration`] are deliberately not overridable.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::constants::{comparison, exclusion, trend, warmup};
use crate::models::ClubKind;

/// Shot admission rules shared by every analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    /// Non-club labels to discard (case-insensitive)
    pub excluded_clubs: Vec<String>,
    /// Minimum admissible carry in yards (inclusive)
    pub min_carry: f64,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            excluded_clubs: exclusion::EXCLUDED_CLUBS
                .iter()
                .map(|&label| label.to_owned())
                .collect(),
            min_carry: exclusion::MIN_CARRY_YARDS,
        }
    }
}

impl ExclusionPolicy {
    /// Whether a club label is excluded from analysis
    ///
    /// An excluded putter also covers its abbreviations (`pt`).
    #[must_use]
    pub fn excludes_club(&self, club: &str) -> bool {
        let club = club.trim();
        let putter = ClubKind::parse(club).is_putter();
        self.excluded_clubs.iter().any(|excluded| {
            excluded.eq_ignore_ascii_case(club)
                || (putter && ClubKind::parse(excluded).is_putter())
        })
    }

    /// Whether a carry value is admissible
    #[must_use]
    pub fn admits_carry(&self, carry: f64) -> bool {
        carry.is_finite() && carry >= self.min_carry
    }
}

/// Warmup stabilization detector settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupSettings {
    /// Rolling window size in shots
    pub window_size: usize,
    /// Fraction of the peak rolling carry that counts as stabilized
    pub stabilization_fraction: f64,
    /// Consecutive qualifying windows required
    pub required_streak: usize,
    /// Sessions with fewer shots are skipped
    pub min_session_shots: usize,
    /// Opening shots compared against post-warmup shots
    pub opening_shots: usize,
    /// Shots added to the median warmup when recommending a length
    pub safety_buffer: usize,
    /// Relative difference (percent) below which a change is immaterial
    pub material_difference_pct: f64,
}

impl Default for WarmupSettings {
    fn default() -> Self {
        Self {
            window_size: warmup::WINDOW_SIZE,
            stabilization_fraction: warmup::STABILIZATION_FRACTION,
            required_streak: warmup::REQUIRED_STREAK,
            min_session_shots: warmup::MIN_SESSION_SHOTS,
            opening_shots: warmup::OPENING_SHOTS,
            safety_buffer: warmup::SAFETY_BUFFER,
            material_difference_pct: warmup::MATERIAL_DIFFERENCE_PCT,
        }
    }
}

/// Trend classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSettings {
    /// Relative change beyond which a series is up or down
    pub flat_threshold: f64,
    /// Trend score at or above which a club is most improved
    pub most_improved_score: i32,
    /// Trend score at or below which a club needs attention
    pub needs_attention_score: i32,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            flat_threshold: trend::FLAT_THRESHOLD,
            most_improved_score: trend::MOST_IMPROVED_SCORE,
            needs_attention_score: trend::NEEDS_ATTENTION_SCORE,
        }
    }
}

/// Minimum meaningful per-club deltas between two sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonThresholds {
    /// Carry (yards)
    pub carry: f64,
    /// Smash factor
    pub smash: f64,
    /// Face-to-path (degrees)
    pub face: f64,
    /// Strike distance (mm)
    pub strike: f64,
}

impl Default for ComparisonThresholds {
    fn default() -> Self {
        Self {
            carry: comparison::CARRY_MIN_DELTA,
            smash: comparison::SMASH_MIN_DELTA,
            face: comparison::FACE_MIN_DELTA,
            strike: comparison::STRIKE_MIN_DELTA,
        }
    }
}

/// Main engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shot admission rules
    pub exclusion: ExclusionPolicy,
    /// Warmup detection settings
    pub warmup: WarmupSettings,
    /// Trend classification settings
    pub trend: TrendSettings,
    /// Session comparison gates
    pub comparison: ComparisonThresholds,
    /// Optional club target configuration file
    pub club_config_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(min_carry) = env_override("CARRYLAB_MIN_CARRY")? {
            config.exclusion.min_carry = min_carry;
        }
        if let Some(window) = env_override("CARRYLAB_WARMUP_WINDOW")? {
            config.warmup.window_size = window;
        }
        if let Some(fraction) = env_override("CARRYLAB_WARMUP_FRACTION")? {
            config.warmup.stabilization_fraction = fraction;
        }
        if let Some(streak) = env_override("CARRYLAB_WARMUP_STREAK")? {
            config.warmup.required_streak = streak;
        }
        if let Some(min_shots) = env_override("CARRYLAB_WARMUP_MIN_SHOTS")? {
            config.warmup.min_session_shots = min_shots;
        }
        if let Some(threshold) = env_override("CARRYLAB_TREND_THRESHOLD")? {
            config.trend.flat_threshold = threshold;
        }
        if let Ok(path) = env::var("CARRYLAB_CLUB_CONFIG") {
            if !path.trim().is_empty() {
                config.club_config_path = Some(PathBuf::from(path));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.exclusion.min_carry.is_finite() || self.exclusion.min_carry < 0.0 {
            return Err(ConfigError::InvalidRange(
                "min_carry must be a non-negative number".into(),
            ));
        }

        let warmup = &self.warmup;
        if warmup.window_size == 0 {
            return Err(ConfigError::InvalidRange(
                "warmup window_size must be > 0".into(),
            ));
        }
        if warmup.required_streak == 0 {
            return Err(ConfigError::InvalidRange(
                "warmup required_streak must be > 0".into(),
            ));
        }
        if !(warmup.stabilization_fraction > 0.0 && warmup.stabilization_fraction <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "warmup stabilization_fraction must be in (0, 1]".into(),
            ));
        }
        if warmup.min_session_shots < warmup.window_size {
            return Err(ConfigError::InvalidRange(format!(
                "warmup min_session_shots ({}) must be >= window_size ({})",
                warmup.min_session_shots, warmup.window_size
            )));
        }
        if warmup.material_difference_pct < 0.0 {
            return Err(ConfigError::InvalidRange(
                "warmup material_difference_pct must be >= 0".into(),
            ));
        }

        let trend = &self.trend;
        if !(trend.flat_threshold >= 0.0 && trend.flat_threshold.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "trend flat_threshold must be >= 0".into(),
            ));
        }
        if trend.needs_attention_score >= trend.most_improved_score {
            return Err(ConfigError::InvalidRange(
                "trend needs_attention_score must be < most_improved_score".into(),
            ));
        }

        let gates = &self.comparison;
        if [gates.carry, gates.smash, gates.face, gates.strike]
            .iter()
            .any(|gate| !gate.is_finite() || *gate < 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "comparison thresholds must be >= 0".into(),
            ));
        }

        Ok(())
    }
}

fn env_override<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue { name, value }),
        Err(_) => Ok(None),
    }
}
