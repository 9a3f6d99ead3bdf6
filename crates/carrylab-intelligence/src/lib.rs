// ABOUTME: Practice-session quality scoring and trend analytics engine
// ABOUTME: Normalization, composite scoring, warmup detection, trends, and session comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

#![deny(unsafe_code)]

//! # Carrylab Intelligence
//!
//! Turns noisy launch-monitor shots into bounded quality scores, warmup
//! lengths, and trend classifications. Every operation is a pure, synchronous
//! read over an already-materialized shot collection: sparse or empty input
//! yields an [`AnalysisOutcome::InsufficientData`] value, never an error.
//!
//! Pipeline: [`MetricExtractor`] filters and groups shots, the
//! [`normalizer`] maps raw metrics onto `[0, 1]`, [`QualityScorer`] weights
//! them into a 0-100 score, and [`WarmupDetector`], [`TrendClassifier`] and
//! [`SessionComparator`] build on those aggregates.

/// Strike-distance versus carry correlation per club
pub mod correlation;
/// Shot filtering, grouping, and per-metric aggregation
pub mod metrics_extractor;
/// Bounded desirability curves
pub mod normalizer;
/// Explicit insufficient-data outcomes
pub mod outcome;
/// Weighted composite scoring and letter grades
pub mod quality_scorer;
/// Per-club deltas between two sessions
pub mod session_comparator;
/// Shared numeric helpers with degenerate-case fallbacks
pub mod statistics;
/// Period-over-period trend classification
pub mod trend;
/// Rolling-window warmup stabilization detection
pub mod warmup;

pub use correlation::{
    club_correlations, strike_carry_correlation, ClubCorrelation, CorrelationResult,
    CorrelationStrength,
};
pub use metrics_extractor::{
    is_plausible_smash, MetricExtractor, SessionAggregate, ShotGroup, SmashReading,
};
pub use normalizer::{
    normalize_higher_is_better, normalize_lower_is_better, MetricAnchors, Polarity,
};
pub use outcome::{AnalysisOutcome, InsufficientData};
pub use quality_scorer::{
    ClubScore, ComponentWeights, Grade, MetricCounts, ProfileCalibration, ProfileKind,
    QualityScorer, RawMetrics, Score, SessionScore, SmashScoring, SubScores, WeightProfile,
};
pub use session_comparator::{
    Area, AreaVerdict, AreaWinner, ClubComparison, DeltaVerdict, MetricDelta, SessionComparator,
    SessionComparison,
};
pub use trend::{
    ClubTrend, ClubTrendReport, MetricTrend, PeriodAggregate, TrendCategory, TrendClassifier,
    TrendDirection, TrendMetric, TrendResult, TrendSummary,
};
pub use warmup::{
    MetricShift, RollingSeries, WarmupComparison, WarmupDetector, WarmupDistribution,
    WarmupLengthStats, WarmupMetric, WarmupResult, WarmupSummary,
};
