// ABOUTME: Per-club correlation between strike distance from center and carry
// ABOUTME: Gates sparse clubs behind a minimum number of paired observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

use carrylab_core::config::ClubCatalog;
use carrylab_core::constants::statistics::MIN_CORRELATION_POINTS;
use carrylab_core::models::Shot;
use serde::{Deserialize, Serialize};

use crate::metrics_extractor::MetricExtractor;
use crate::outcome::AnalysisOutcome;
use crate::statistics;

/// Strength of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    /// `|r| >= 0.7`
    Strong,
    /// `|r| >= 0.4`
    Moderate,
    /// `|r| >= 0.2`
    Weak,
    /// `|r| < 0.2`
    Negligible,
}

impl CorrelationStrength {
    /// Classify a coefficient
    #[must_use]
    pub fn from_coefficient(r: f64) -> Self {
        match r.abs() {
            v if v >= 0.7 => Self::Strong,
            v if v >= 0.4 => Self::Moderate,
            v if v >= 0.2 => Self::Weak,
            _ => Self::Negligible,
        }
    }
}

/// Correlation between |strike distance| and carry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Pearson coefficient
    pub coefficient: f64,
    /// Strength bucket
    pub strength: CorrelationStrength,
    /// Paired observations used
    pub pairs: usize,
}

/// Correlation outcome for one club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubCorrelation {
    /// Canonical club name
    pub club: String,
    /// Result, or insufficient data for sparse clubs
    pub correlation: AnalysisOutcome<CorrelationResult>,
}

/// Correlate |strike distance| with carry over shots that carry both
#[must_use]
pub fn strike_carry_correlation(shots: &[&Shot]) -> AnalysisOutcome<CorrelationResult> {
    let (strikes, carries): (Vec<f64>, Vec<f64>) = shots
        .iter()
        .filter(|shot| shot.carry.is_finite())
        .filter_map(|shot| {
            shot.strike_distance
                .filter(|strike| strike.is_finite())
                .map(|strike| (strike.abs(), shot.carry))
        })
        .unzip();

    if strikes.len() < MIN_CORRELATION_POINTS {
        return AnalysisOutcome::insufficient(
            "strike_carry_correlation",
            MIN_CORRELATION_POINTS,
            strikes.len(),
        );
    }

    statistics::pearson_correlation(&strikes, &carries).map_or_else(
        || {
            AnalysisOutcome::insufficient(
                "strike_carry_correlation",
                MIN_CORRELATION_POINTS,
                strikes.len(),
            )
        },
        |coefficient| {
            AnalysisOutcome::Ready(CorrelationResult {
                coefficient,
                strength: CorrelationStrength::from_coefficient(coefficient),
                pairs: strikes.len(),
            })
        },
    )
}

/// Strike/carry correlation for each club, in bag order
#[must_use]
pub fn club_correlations(shots: &[&Shot], catalog: &ClubCatalog) -> Vec<ClubCorrelation> {
    MetricExtractor::group_by_club(shots, catalog)
        .into_iter()
        .map(|group| ClubCorrelation {
            correlation: strike_carry_correlation(&group.shots),
            club: group.key,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn shot(carry: f64, strike: Option<f64>) -> Shot {
        let shot = Shot::new("s1", NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(), "7 Iron", carry);
        match strike {
            Some(strike) => shot.with_strike_distance(strike),
            None => shot,
        }
    }

    #[test]
    fn test_fewer_than_three_pairs_is_insufficient() {
        let shots = [shot(150.0, Some(2.0)), shot(145.0, Some(-8.0)), shot(148.0, None)];
        let refs: Vec<&Shot> = shots.iter().collect();
        let outcome = strike_carry_correlation(&refs);
        assert_eq!(
            outcome,
            AnalysisOutcome::insufficient("strike_carry_correlation", 3, 2)
        );
    }

    #[test]
    fn test_off_center_strikes_lose_carry() {
        let shots = [
            shot(152.0, Some(1.0)),
            shot(146.0, Some(-6.0)),
            shot(140.0, Some(12.0)),
            shot(149.0, Some(3.0)),
        ];
        let refs: Vec<&Shot> = shots.iter().collect();
        let result = strike_carry_correlation(&refs).ready().unwrap();
        assert!(result.coefficient < -0.7);
        assert_eq!(result.strength, CorrelationStrength::Strong);
        assert_eq!(result.pairs, 4);
    }

    #[test]
    fn test_constant_strike_has_zero_correlation() {
        let shots = [
            shot(150.0, Some(4.0)),
            shot(140.0, Some(4.0)),
            shot(145.0, Some(-4.0)),
        ];
        let refs: Vec<&Shot> = shots.iter().collect();
        let result = strike_carry_correlation(&refs).ready().unwrap();
        assert!(result.coefficient.abs() < f64::EPSILON);
        assert_eq!(result.strength, CorrelationStrength::Negligible);
    }
}
