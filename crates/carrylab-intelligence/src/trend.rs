// ABOUTME: Period-over-period trend classification for session and monthly aggregates
// ABOUTME: Direction, relative change, and per-period rate plus multi-metric trend scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
#![allow(clippy::cast_precision_loss)] // Safe: period counts are far below f64 precision limits

use carrylab_core::config::{ClubCatalog, TrendSettings};
use carrylab_core::models::Shot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics_extractor::{MetricExtractor, SessionAggregate, ShotGroup};
use crate::outcome::AnalysisOutcome;
use crate::quality_scorer::RawMetrics;

/// Trend direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Improving beyond the flat band
    Up,
    /// Declining beyond the flat band
    Down,
    /// Within the flat band
    Flat,
}

impl TrendDirection {
    /// Contribution to a trend score
    #[must_use]
    pub const fn score(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
            Self::Flat => 0,
        }
    }
}

/// Trend over an ordered series of period values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Direction of change
    pub direction: TrendDirection,
    /// `(last - first) / |first|`
    pub pct_change: f64,
    /// `(last - first) / (n - 1)`
    pub rate: f64,
    /// First period value
    pub first: f64,
    /// Last period value
    pub last: f64,
    /// Number of periods
    pub periods: usize,
}

/// Metric followed across periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    /// Mean carry
    CarryMean,
    /// Carry coefficient of variation
    CarryConsistency,
    /// Mean absolute face control
    FaceControl,
    /// Mean absolute strike distance
    StrikeCentering,
    /// Mean absolute smash deviation from target
    SmashDeviation,
}

impl TrendMetric {
    /// Metrics contributing to a trend score
    pub const ALL: [Self; 5] = [
        Self::CarryMean,
        Self::CarryConsistency,
        Self::FaceControl,
        Self::StrikeCentering,
        Self::SmashDeviation,
    ];

    /// Whether a larger reading is an improvement
    #[must_use]
    pub const fn higher_is_better(self) -> bool {
        matches!(self, Self::CarryMean)
    }

    /// Raw reading from a period's metrics
    #[must_use]
    pub const fn value(self, raw: &RawMetrics) -> Option<f64> {
        match self {
            Self::CarryMean => raw.carry_mean,
            Self::CarryConsistency => raw.carry_cv,
            Self::FaceControl => raw.face_mean_abs,
            Self::StrikeCentering => raw.strike_mean_abs,
            Self::SmashDeviation => raw.smash_deviation,
        }
    }

    /// Reading signed so that higher is always better
    #[must_use]
    pub fn signed_value(self, raw: &RawMetrics) -> Option<f64> {
        let value = self.value(raw)?;
        Some(if self.higher_is_better() { value } else { -value })
    }
}

/// Metrics for one session or month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// Session id or `YYYY-MM`
    pub period: String,
    /// Earliest date in the period
    pub first_date: NaiveDate,
    /// Shots in the period
    pub shot_count: usize,
    /// Raw metrics
    pub metrics: RawMetrics,
}

impl PeriodAggregate {
    fn from_group(group: &ShotGroup<'_>, catalog: &ClubCatalog) -> Self {
        let aggregate = SessionAggregate::from_shots(&group.shots, catalog);
        Self {
            period: group.key.clone(),
            first_date: group.first_date,
            shot_count: aggregate.shot_count,
            metrics: RawMetrics::from_aggregate(&aggregate),
        }
    }
}

/// Trend of one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTrend {
    /// Metric
    pub metric: TrendMetric,
    /// Raw per-period values, periods lacking the metric skipped
    pub values: Vec<f64>,
    /// Classification over the signed values
    pub trend: AnalysisOutcome<TrendResult>,
}

/// Bucket for a multi-metric trend score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendCategory {
    /// Score at or above the most-improved threshold
    MostImproved,
    /// Mixed or flat
    Plateaued,
    /// Score at or below the needs-attention threshold
    NeedsAttention,
}

/// Trends of every metric over a period series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Periods in order
    pub periods: Vec<PeriodAggregate>,
    /// Per-metric trends
    pub metrics: Vec<MetricTrend>,
    /// +1 per improving metric, -1 per declining metric
    pub trend_score: i32,
    /// Bucket for the score
    pub category: TrendCategory,
}

/// Trend summary for one club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubTrend {
    /// Canonical club name
    pub club: String,
    /// Sessions in which the club was hit
    pub sessions: usize,
    /// Trend summary across those sessions
    pub summary: TrendSummary,
}

/// Clubs bucketed by trend category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubTrendReport {
    /// Clubs improving across several metrics
    pub most_improved: Vec<ClubTrend>,
    /// Clubs without a clear trend
    pub plateaued: Vec<ClubTrend>,
    /// Clubs declining across several metrics
    pub needs_attention: Vec<ClubTrend>,
    /// Clubs hit in fewer than two sessions
    pub insufficient_data: Vec<String>,
}

/// Trend classifier bound to trend settings
pub struct TrendClassifier<'a> {
    settings: &'a TrendSettings,
}

impl<'a> TrendClassifier<'a> {
    /// Create a classifier
    #[must_use]
    pub const fn new(settings: &'a TrendSettings) -> Self {
        Self { settings }
    }

    /// Relative change from `first` to `last`
    ///
    /// A zero `first` yields 0.0 when `last` is also zero, else ±1.0 by the
    /// sign of `last`.
    #[must_use]
    pub fn pct_change(first: f64, last: f64) -> f64 {
        if first == 0.0 {
            if last == 0.0 {
                0.0
            } else {
                last.signum()
            }
        } else {
            (last - first) / first.abs()
        }
    }

    /// Direction for a relative change
    #[must_use]
    pub fn direction(&self, pct_change: f64) -> TrendDirection {
        if pct_change > self.settings.flat_threshold {
            TrendDirection::Up
        } else if pct_change < -self.settings.flat_threshold {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        }
    }

    /// Classify an ordered series already signed so that higher is better
    #[must_use]
    pub fn classify(&self, values: &[f64]) -> AnalysisOutcome<TrendResult> {
        let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
            return AnalysisOutcome::insufficient("trend", 2, 0);
        };
        if values.len() < 2 {
            return AnalysisOutcome::insufficient("trend", 2, values.len());
        }
        let pct_change = Self::pct_change(first, last);
        AnalysisOutcome::Ready(TrendResult {
            direction: self.direction(pct_change),
            pct_change,
            rate: (last - first) / (values.len() - 1) as f64,
            first,
            last,
            periods: values.len(),
        })
    }

    /// Bucket a trend score
    #[must_use]
    pub const fn category(&self, trend_score: i32) -> TrendCategory {
        if trend_score >= self.settings.most_improved_score {
            TrendCategory::MostImproved
        } else if trend_score <= self.settings.needs_attention_score {
            TrendCategory::NeedsAttention
        } else {
            TrendCategory::Plateaued
        }
    }

    /// Sum of direction contributions over classified metrics
    #[must_use]
    pub fn trend_score(metrics: &[MetricTrend]) -> i32 {
        metrics
            .iter()
            .filter_map(|metric| metric.trend.as_ready())
            .map(|trend| trend.direction.score())
            .sum()
    }

    /// One period per session, oldest first
    #[must_use]
    pub fn session_series(
        sessions: &[ShotGroup<'_>],
        catalog: &ClubCatalog,
    ) -> Vec<PeriodAggregate> {
        sessions
            .iter()
            .map(|session| PeriodAggregate::from_group(session, catalog))
            .collect()
    }

    /// One period per calendar month, oldest first
    #[must_use]
    pub fn monthly_series(shots: &[&Shot], catalog: &ClubCatalog) -> Vec<PeriodAggregate> {
        MetricExtractor::group_by_month(shots)
            .iter()
            .map(|month| PeriodAggregate::from_group(month, catalog))
            .collect()
    }

    /// Classify every metric across a period series
    #[must_use]
    pub fn summarize(&self, periods: Vec<PeriodAggregate>) -> AnalysisOutcome<TrendSummary> {
        if periods.len() < 2 {
            return AnalysisOutcome::insufficient("trend_summary", 2, periods.len());
        }

        let metrics: Vec<MetricTrend> = TrendMetric::ALL
            .iter()
            .map(|&metric| {
                let values: Vec<f64> = periods
                    .iter()
                    .filter_map(|period| metric.value(&period.metrics))
                    .collect();
                let signed: Vec<f64> = periods
                    .iter()
                    .filter_map(|period| metric.signed_value(&period.metrics))
                    .collect();
                MetricTrend {
                    metric,
                    values,
                    trend: self.classify(&signed),
                }
            })
            .collect();

        let trend_score = Self::trend_score(&metrics);
        AnalysisOutcome::Ready(TrendSummary {
            periods,
            metrics,
            trend_score,
            category: self.category(trend_score),
        })
    }

    /// Bucket every club by its session-over-session trend
    #[must_use]
    pub fn club_trends(&self, shots: &[&Shot], catalog: &ClubCatalog) -> ClubTrendReport {
        let mut report = ClubTrendReport::default();

        for club in MetricExtractor::group_by_club(shots, catalog) {
            let sessions = MetricExtractor::group_by_session(&club.shots);
            let session_count = sessions.len();
            let periods = Self::session_series(&sessions, catalog);

            match self.summarize(periods) {
                AnalysisOutcome::Ready(summary) => {
                    let category = summary.category;
                    let trend = ClubTrend {
                        club: club.key,
                        sessions: session_count,
                        summary,
                    };
                    match category {
                        TrendCategory::MostImproved => report.most_improved.push(trend),
                        TrendCategory::Plateaued => report.plateaued.push(trend),
                        TrendCategory::NeedsAttention => report.needs_attention.push(trend),
                    }
                }
                AnalysisOutcome::InsufficientData(_) => report.insufficient_data.push(club.key),
            }
        }

        debug!(
            most_improved = report.most_improved.len(),
            plateaued = report.plateaued.len(),
            needs_attention = report.needs_attention.len(),
            insufficient = report.insufficient_data.len(),
            "Club trends classified"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_carry_trend_up() {
        let settings = TrendSettings::default();
        let trend = TrendClassifier::new(&settings)
            .classify(&[150.0, 152.0, 160.0])
            .ready()
            .unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
        assert!((trend.pct_change - 0.066_666_666).abs() < 1e-6);
        assert!((trend.rate - 5.0).abs() < 1e-12);
        assert_eq!(trend.periods, 3);
    }

    #[test]
    fn test_flat_band_is_inclusive() {
        let settings = TrendSettings::default();
        let classifier = TrendClassifier::new(&settings);
        assert_eq!(classifier.direction(0.02), TrendDirection::Flat);
        assert_eq!(classifier.direction(-0.02), TrendDirection::Flat);
        assert_eq!(classifier.direction(0.0201), TrendDirection::Up);
    }

    #[test]
    fn test_zero_first_value() {
        assert!(TrendClassifier::pct_change(0.0, 0.0).abs() < f64::EPSILON);
        assert!((TrendClassifier::pct_change(0.0, -3.0) + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pre_negated_metric_improves_upward() {
        let settings = TrendSettings::default();
        // face control 4.0 -> 2.0 degrees, negated before classification
        let trend = TrendClassifier::new(&settings)
            .classify(&[-4.0, -3.0, -2.0])
            .ready()
            .unwrap();
        assert_eq!(trend.direction, TrendDirection::Up);
    }

    #[test]
    fn test_single_period_is_insufficient() {
        let settings = TrendSettings::default();
        assert!(!TrendClassifier::new(&settings).classify(&[150.0]).is_ready());
        assert!(!TrendClassifier::new(&settings).classify(&[]).is_ready());
    }

    #[test]
    fn test_score_categories() {
        let settings = TrendSettings::default();
        let classifier = TrendClassifier::new(&settings);
        assert_eq!(classifier.category(2), TrendCategory::MostImproved);
        assert_eq!(classifier.category(1), TrendCategory::Plateaued);
        assert_eq!(classifier.category(-1), TrendCategory::Plateaued);
        assert_eq!(classifier.category(-2), TrendCategory::NeedsAttention);
    }
}
