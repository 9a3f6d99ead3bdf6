// ABOUTME: Integration tests for session quality scoring
// ABOUTME: Validates weight profiles, neutral handling of missing metrics, and grade boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carrylab::config::{ClubCatalog, ExclusionPolicy};
use carrylab::intelligence::{
    Grade, MetricExtractor, ProfileKind, QualityScorer, SessionAggregate, WeightProfile,
};
use carrylab::models::Shot;
use common::{date, init_test_logging};

fn on_target_shots(catalog: &ClubCatalog, count: usize) -> Vec<Shot> {
    let target = catalog.smash_target("7 Iron");
    (0..count)
        .map(|_| {
            Shot::new("s1", date(2025, 4, 2), "7 Iron", 150.0)
                .with_smash(target)
                .with_strike_distance(0.0)
                .with_club_path(0.0)
        })
        .collect()
}

#[test]
fn test_missing_face_scores_neutral() {
    init_test_logging();
    let catalog = ClubCatalog::builtin();
    let shots = on_target_shots(&catalog, 6);
    let refs: Vec<&Shot> = shots.iter().collect();

    let scorer = QualityScorer::new(WeightProfile::grading(), &catalog);
    let score = scorer.score_shots(&refs).ready().unwrap();

    assert!((score.sub_scores.face_control - 50.0).abs() < 1e-9);
    assert!((score.sub_scores.carry_consistency - 100.0).abs() < 1e-9);
    assert!((score.sub_scores.smash_fidelity - 100.0).abs() < 1e-9);
    assert!((score.total_score - 90.0).abs() < 1e-6);
    assert_eq!(score.counts.face, 0);
    assert!(score.raw.face_mean_abs.is_none());
}

#[test]
fn test_scoring_is_deterministic() {
    init_test_logging();
    let catalog = ClubCatalog::builtin();
    let shots = common::two_session_snapshot();
    let policy = ExclusionPolicy::default();
    let admitted = MetricExtractor::new(&policy).admissible(&shots);

    let scorer = QualityScorer::new(WeightProfile::grading(), &catalog);
    let first = scorer.score_shots(&admitted);
    let second = scorer.score_shots(&admitted);
    assert_eq!(first, second);
}

#[test]
fn test_overall_quality_ignores_path() {
    let catalog = ClubCatalog::builtin();
    let shots: Vec<Shot> = (0..5)
        .map(|_| {
            Shot::new("s1", date(2025, 4, 2), "7 Iron", 150.0)
                .with_smash(1.45)
                .with_face_to_path(0.0)
                .with_strike_distance(0.0)
                .with_club_path(10.0)
        })
        .collect();
    let refs: Vec<&Shot> = shots.iter().collect();

    let overall = QualityScorer::new(WeightProfile::overall_quality(), &catalog)
        .score_shots(&refs)
        .ready()
        .unwrap();
    assert_eq!(overall.profile, ProfileKind::OverallQuality);
    assert!(overall.total_score > 99.999);
    assert!(overall.sub_scores.path_neutrality.abs() < 1e-9);

    let grading = QualityScorer::new(WeightProfile::grading(), &catalog)
        .score_shots(&refs)
        .ready()
        .unwrap();
    assert!(grading.total_score < overall.total_score);
}

#[test]
fn test_implausible_smash_readings_are_ignored() {
    let catalog = ClubCatalog::builtin();
    let shots = [
        Shot::new("s1", date(2025, 4, 2), "7 Iron", 150.0).with_smash(3.1),
        Shot::new("s1", date(2025, 4, 2), "7 Iron", 151.0).with_smash(0.0),
    ];
    let refs: Vec<&Shot> = shots.iter().collect();

    let aggregate = SessionAggregate::from_shots(&refs, &catalog);
    assert!(aggregate.smash.is_empty());

    let score = QualityScorer::new(WeightProfile::grading(), &catalog).score_aggregate(&aggregate);
    assert!((score.sub_scores.smash_fidelity - 50.0).abs() < 1e-9);
}

#[test]
fn test_grade_boundaries_are_inclusive() {
    assert_eq!(Grade::from_score(100.0), Grade::A);
    assert_eq!(Grade::from_score(90.0), Grade::A);
    assert_eq!(Grade::from_score(89.999), Grade::B);
    assert_eq!(Grade::from_score(80.0), Grade::B);
    assert_eq!(Grade::from_score(79.99), Grade::C);
    assert_eq!(Grade::from_score(70.0), Grade::C);
    assert_eq!(Grade::from_score(60.0), Grade::D);
    assert_eq!(Grade::from_score(59.9), Grade::F);
    assert_eq!(Grade::from_score(0.0), Grade::F);
}

#[test]
fn test_builtin_profiles_validate() {
    for profile in WeightProfile::all() {
        assert!(profile.validate().is_ok(), "{} invalid", profile.kind);
    }
}

#[test]
fn test_better_session_scores_higher() {
    init_test_logging();
    let catalog = ClubCatalog::builtin();
    let shots = common::two_session_snapshot();
    let policy = ExclusionPolicy::default();
    let sessions = MetricExtractor::new(&policy).sessions(&shots).ready().unwrap();

    let scores = QualityScorer::new(WeightProfile::grading(), &catalog).score_sessions(&sessions);
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].session_id, "2025-03-01-a");
    assert_eq!(scores[1].session_id, "2025-03-08-a");
    assert!(scores[1].score.total_score > scores[0].score.total_score);
    assert!(scores
        .iter()
        .all(|s| (0.0..=100.0).contains(&s.score.total_score)));
}
