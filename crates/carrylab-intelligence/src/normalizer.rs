// ABOUTME: Maps raw shot metrics onto bounded [0, 1] desirability scores
// ABOUTME: Linear curves between calibrated anchors with a neutral score for missing readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Normalizer
//!
//! A missing reading scores a neutral `0.5` so one absent metric cannot pull
//! a composite score to either pole. Outputs are always clamped to `[0, 1]`.

use carrylab_core::constants::calibration::NEUTRAL_SCORE;
use serde::{Deserialize, Serialize};

/// Which end of a metric's range is desirable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Smaller readings are better (dispersion, face angle, strike offset)
    LowerIsBetter,
    /// Larger readings are better (smash factor, carry)
    HigherIsBetter,
}

/// Score 1.0 at or below `best`, 0.0 at or above `worst`, linear in between
#[must_use]
pub fn normalize_lower_is_better(value: Option<f64>, best: f64, worst: f64) -> f64 {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return NEUTRAL_SCORE;
    };
    if value <= best {
        return 1.0;
    }
    if value >= worst {
        return 0.0;
    }
    ((worst - value) / (worst - best)).clamp(0.0, 1.0)
}

/// Score 0.0 at or below `floor`, 1.0 at or above `ceiling`, linear in between
#[must_use]
pub fn normalize_higher_is_better(value: Option<f64>, floor: f64, ceiling: f64) -> f64 {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        return NEUTRAL_SCORE;
    };
    if value <= floor {
        return 0.0;
    }
    if value >= ceiling {
        return 1.0;
    }
    ((value - floor) / (ceiling - floor)).clamp(0.0, 1.0)
}

/// Calibrated anchors for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricAnchors {
    /// Desirable direction
    pub polarity: Polarity,
    /// Reading that scores 1.0
    pub best: f64,
    /// Reading that scores 0.0
    pub worst: f64,
}

impl MetricAnchors {
    /// Anchors for a metric where smaller is better
    #[must_use]
    pub const fn lower_is_better(best: f64, worst: f64) -> Self {
        Self {
            polarity: Polarity::LowerIsBetter,
            best,
            worst,
        }
    }

    /// Anchors for a metric where larger is better
    #[must_use]
    pub const fn higher_is_better(floor: f64, ceiling: f64) -> Self {
        Self {
            polarity: Polarity::HigherIsBetter,
            best: ceiling,
            worst: floor,
        }
    }

    /// Normalize a reading against these anchors
    #[must_use]
    pub fn normalize(&self, value: Option<f64>) -> f64 {
        match self.polarity {
            Polarity::LowerIsBetter => normalize_lower_is_better(value, self.best, self.worst),
            Polarity::HigherIsBetter => normalize_higher_is_better(value, self.worst, self.best),
        }
    }

    /// Whether `best` and `worst` are ordered consistently with the polarity
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        match self.polarity {
            Polarity::LowerIsBetter => self.best < self.worst,
            Polarity::HigherIsBetter => self.best > self.worst,
        }
    }
}
