// ABOUTME: Integration tests for warmup stabilization detection
// ABOUTME: Validates rolling-carry stabilization, skipped sessions, buckets, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carrylab::config::{ExclusionPolicy, WarmupSettings};
use carrylab::intelligence::{
    AnalysisOutcome, MetricExtractor, WarmupDetector, WarmupDistribution, WarmupMetric,
};
use carrylab::models::Shot;
use common::{carry_shots, date, init_test_logging, warmup_session};

fn short_window_settings() -> WarmupSettings {
    WarmupSettings {
        window_size: 3,
        stabilization_fraction: 0.95,
        required_streak: 3,
        min_session_shots: 11,
        ..WarmupSettings::default()
    }
}

#[test]
fn test_stabilizes_at_sixth_shot() {
    init_test_logging();
    let settings = short_window_settings();
    let shots = warmup_session("s1", date(2025, 5, 1));
    let refs: Vec<&Shot> = shots.iter().collect();

    let result = WarmupDetector::new(&settings)
        .detect("s1", date(2025, 5, 1), &refs)
        .ready()
        .unwrap();

    assert_eq!(result.warmup_length, Some(6));
    assert_eq!(result.shot_count, 11);
    let peak = result.peak_rolling_carry.unwrap();
    assert!((peak - 290.0 / 3.0).abs() < 1e-9);
    assert!((result.threshold.unwrap() - peak * 0.95).abs() < 1e-9);
    assert!((result.post_warmup_carry.unwrap() - 578.0 / 6.0).abs() < 1e-9);
}

#[test]
fn test_rolling_series_is_trailing_aligned() {
    let settings = short_window_settings();
    let shots = warmup_session("s1", date(2025, 5, 1));
    let refs: Vec<&Shot> = shots.iter().collect();

    let result = WarmupDetector::new(&settings)
        .detect("s1", date(2025, 5, 1), &refs)
        .ready()
        .unwrap();
    let carry = result
        .rolling
        .iter()
        .find(|series| series.metric == WarmupMetric::Carry)
        .unwrap();

    assert_eq!(carry.values.len(), 11);
    assert!(carry.values[0].is_none());
    assert!(carry.values[1].is_none());
    assert!((carry.values[2].unwrap() - 81.0).abs() < 1e-9);
    assert!((carry.values[5].unwrap() - 96.0).abs() < 1e-9);

    let smash = result
        .rolling
        .iter()
        .find(|series| series.metric == WarmupMetric::Smash)
        .unwrap();
    assert!(smash.values.iter().all(Option::is_none));
}

#[test]
fn test_opening_shots_compared_against_post_warmup() {
    let settings = short_window_settings();
    let shots = warmup_session("s1", date(2025, 5, 1));
    let refs: Vec<&Shot> = shots.iter().collect();

    let comparison = WarmupDetector::new(&settings)
        .detect("s1", date(2025, 5, 1), &refs)
        .ready()
        .unwrap()
        .comparison
        .unwrap();

    assert_eq!(comparison.opening_shots, 5);
    assert_eq!(comparison.post_warmup_shots, 6);
    let carry = comparison
        .shifts
        .iter()
        .find(|shift| shift.metric == WarmupMetric::Carry)
        .unwrap();
    assert!((carry.opening_mean.unwrap() - 86.8).abs() < 1e-9);
    assert!(carry.material);
    assert!(carry.improved);
    assert!(comparison.has_material_difference());

    let strike = comparison
        .shifts
        .iter()
        .find(|shift| shift.metric == WarmupMetric::Strike)
        .unwrap();
    assert!(strike.pct_difference.is_none());
    assert!(!strike.material);
}

#[test]
fn test_flat_session_stabilizes_immediately() {
    let settings = short_window_settings();
    let shots = carry_shots("s1", date(2025, 5, 1), "7 Iron", &[150.0; 12]);
    let refs: Vec<&Shot> = shots.iter().collect();

    let result = WarmupDetector::new(&settings)
        .detect("s1", date(2025, 5, 1), &refs)
        .ready()
        .unwrap();
    assert_eq!(result.warmup_length, Some(3));
}

#[test]
fn test_short_session_is_insufficient() {
    let settings = short_window_settings();
    let shots = carry_shots("s1", date(2025, 5, 1), "7 Iron", &[150.0; 10]);
    let refs: Vec<&Shot> = shots.iter().collect();

    let outcome = WarmupDetector::new(&settings).detect("s1", date(2025, 5, 1), &refs);
    assert_eq!(
        outcome,
        AnalysisOutcome::insufficient("warmup_detection", 11, 10)
    );
}

#[test]
fn test_summary_recommends_median_plus_buffer() {
    init_test_logging();
    let settings = short_window_settings();
    let mut shots = warmup_session("s1", date(2025, 5, 1));
    shots.extend(warmup_session("s2", date(2025, 5, 3)));
    shots.extend(carry_shots("s3", date(2025, 5, 5), "7 Iron", &[150.0; 4]));

    let policy = ExclusionPolicy::default();
    let sessions = MetricExtractor::new(&policy).sessions(&shots).ready().unwrap();
    let summary = WarmupDetector::new(&settings)
        .summarize(&sessions)
        .ready()
        .unwrap();

    assert_eq!(summary.sessions.len(), 2);
    assert_eq!(summary.skipped_sessions, vec!["s3".to_owned()]);
    let stats = summary.length_stats.unwrap();
    assert!((stats.median - 6.0).abs() < f64::EPSILON);
    assert_eq!((stats.min, stats.max), (6, 6));
    assert_eq!(summary.recommended_warmup, Some(8));
    assert_eq!(summary.distribution.five_to_ten, 2);

    let pooled = summary.comparison.unwrap();
    assert_eq!(pooled.opening_shots, 10);
    assert_eq!(pooled.post_warmup_shots, 12);
}

#[test]
fn test_summary_without_eligible_sessions_is_insufficient() {
    let settings = short_window_settings();
    let shots = carry_shots("s1", date(2025, 5, 1), "7 Iron", &[150.0; 4]);
    let policy = ExclusionPolicy::default();
    let sessions = MetricExtractor::new(&policy).sessions(&shots).ready().unwrap();

    let outcome = WarmupDetector::new(&settings).summarize(&sessions);
    assert_eq!(outcome, AnalysisOutcome::insufficient("warmup_summary", 11, 4));
}

#[test]
fn test_distribution_buckets_are_half_open() {
    let distribution = WarmupDistribution::from_lengths(&[3, 5, 9, 10, 14, 15, 22]);
    assert_eq!(distribution.under_five, 1);
    assert_eq!(distribution.five_to_ten, 2);
    assert_eq!(distribution.ten_to_fifteen, 2);
    assert_eq!(distribution.fifteen_plus, 2);

    let json = serde_json::to_value(distribution).unwrap();
    assert_eq!(json["<5"], 1);
    assert_eq!(json["15+"], 2);
}
