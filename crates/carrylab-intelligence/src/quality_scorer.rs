// ABOUTME: Weighted composite quality scoring with named weight profiles and letter grades
// ABOUTME: One scorer serves the session grader and the lighter overall-quality summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Quality scorer
//!
//! Five sub-metrics (carry consistency, smash fidelity, face control, strike
//! centering, club-path neutrality) are normalized onto `[0, 1]`, weighted by a
//! [`WeightProfile`] and scaled to a 0-100 total with an A-F grade.

use std::fmt;
use std::str::FromStr;

use carrylab_core::config::ClubCatalog;
use carrylab_core::constants::{calibration, grades, weights};
use carrylab_core::errors::{AppError, AppResult};
use carrylab_core::models::Shot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics_extractor::{MetricExtractor, SessionAggregate, ShotGroup};
use crate::normalizer::MetricAnchors;
use crate::outcome::AnalysisOutcome;

/// Named weight profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Five-metric session grader
    Grading,
    /// Lighter summary weighting smash and face control
    OverallQuality,
}

impl ProfileKind {
    /// Stable profile name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grading => "grading",
            Self::OverallQuality => "overall_quality",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "grading" | "grade" => Ok(Self::Grading),
            "overall_quality" | "overall" => Ok(Self::OverallQuality),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight profile '{other}', expected 'grading' or 'overall_quality'"
            ))),
        }
    }
}

/// Per-component weights; a valid profile sums to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    /// Carry consistency
    pub carry: f64,
    /// Smash fidelity
    pub smash: f64,
    /// Face control
    pub face: f64,
    /// Strike centering
    pub strike: f64,
    /// Club-path neutrality
    pub path: f64,
}

impl ComponentWeights {
    /// Sum of all weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.carry + self.smash + self.face + self.strike + self.path
    }

    fn all_non_negative(&self) -> bool {
        [self.carry, self.smash, self.face, self.strike, self.path]
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0)
    }
}

/// How the smash component is measured
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "anchors")]
pub enum SmashScoring {
    /// Mean absolute deviation from each shot's club target, lower is better
    TargetDeviation(MetricAnchors),
    /// Raw mean smash factor, higher is better
    RawSmash(MetricAnchors),
}

impl SmashScoring {
    const fn anchors(&self) -> &MetricAnchors {
        match self {
            Self::TargetDeviation(anchors) | Self::RawSmash(anchors) => anchors,
        }
    }
}

/// Normalization anchors for every component of a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileCalibration {
    /// Carry coefficient of variation
    pub carry_cv: MetricAnchors,
    /// Smash measurement and anchors
    pub smash: SmashScoring,
    /// Mean absolute face control
    pub face: MetricAnchors,
    /// Mean absolute strike distance
    pub strike: MetricAnchors,
    /// Mean absolute club path
    pub path: MetricAnchors,
}

/// Weights plus calibration, selected by name
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    /// Profile name
    pub kind: ProfileKind,
    /// Component weights
    pub weights: ComponentWeights,
    /// Component anchors
    pub calibration: ProfileCalibration,
}

impl WeightProfile {
    /// Session grader: carry 0.30, smash 0.20, face 0.20, strike 0.15, path 0.15
    #[must_use]
    pub const fn grading() -> Self {
        Self {
            kind: ProfileKind::Grading,
            weights: ComponentWeights {
                carry: weights::GRADING_CARRY,
                smash: weights::GRADING_SMASH,
                face: weights::GRADING_FACE,
                strike: weights::GRADING_STRIKE,
                path: weights::GRADING_PATH,
            },
            calibration: ProfileCalibration {
                carry_cv: MetricAnchors::lower_is_better(
                    calibration::CARRY_CV_BEST_GRADING,
                    calibration::CARRY_CV_WORST_GRADING,
                ),
                smash: SmashScoring::TargetDeviation(MetricAnchors::lower_is_better(
                    calibration::SMASH_DEVIATION_BEST,
                    calibration::SMASH_DEVIATION_WORST,
                )),
                face: MetricAnchors::lower_is_better(
                    calibration::FACE_BEST_DEG,
                    calibration::FACE_WORST_DEG,
                ),
                strike: MetricAnchors::lower_is_better(
                    calibration::STRIKE_BEST_MM,
                    calibration::STRIKE_WORST_MM_GRADING,
                ),
                path: MetricAnchors::lower_is_better(
                    calibration::PATH_BEST_DEG,
                    calibration::PATH_WORST_DEG,
                ),
            },
        }
    }

    /// Overall quality: smash 0.35, face 0.30, strike 0.25, carry CV 0.10
    #[must_use]
    pub const fn overall_quality() -> Self {
        Self {
            kind: ProfileKind::OverallQuality,
            weights: ComponentWeights {
                carry: weights::OVERALL_CARRY,
                smash: weights::OVERALL_SMASH,
                face: weights::OVERALL_FACE,
                strike: weights::OVERALL_STRIKE,
                path: weights::OVERALL_PATH,
            },
            calibration: ProfileCalibration {
                carry_cv: MetricAnchors::lower_is_better(
                    calibration::CARRY_CV_BEST_OVERALL,
                    calibration::CARRY_CV_WORST_OVERALL,
                ),
                smash: SmashScoring::RawSmash(MetricAnchors::higher_is_better(
                    calibration::SMASH_FLOOR,
                    calibration::SMASH_CEILING,
                )),
                face: MetricAnchors::lower_is_better(
                    calibration::FACE_BEST_DEG,
                    calibration::FACE_WORST_DEG,
                ),
                strike: MetricAnchors::lower_is_better(
                    calibration::STRIKE_BEST_MM,
                    calibration::STRIKE_WORST_MM_OVERALL,
                ),
                path: MetricAnchors::lower_is_better(
                    calibration::PATH_BEST_DEG,
                    calibration::PATH_WORST_DEG,
                ),
            },
        }
    }

    /// Profile for a name
    #[must_use]
    pub const fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Grading => Self::grading(),
            ProfileKind::OverallQuality => Self::overall_quality(),
        }
    }

    /// Every built-in profile
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::grading(), Self::overall_quality()]
    }

    /// Check weights sum to 1.0 and every anchor pair is ordered
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first violated constraint
    pub fn validate(&self) -> AppResult<()> {
        if !self.weights.all_non_negative() {
            return Err(AppError::config(format!(
                "Profile '{}' has a negative or non-finite weight",
                self.kind
            )));
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > weights::WEIGHT_SUM_TOLERANCE {
            return Err(AppError::config(format!(
                "Profile '{}' weights sum to {sum}, expected 1.0",
                self.kind
            )));
        }
        let calibration = &self.calibration;
        let anchors = [
            ("carry_cv", &calibration.carry_cv),
            ("smash", calibration.smash.anchors()),
            ("face", &calibration.face),
            ("strike", &calibration.strike),
            ("path", &calibration.path),
        ];
        if let Some((name, _)) = anchors.iter().find(|(_, a)| !a.is_ordered()) {
            return Err(AppError::config(format!(
                "Profile '{}' has unordered anchors for {name}",
                self.kind
            )));
        }
        Ok(())
    }
}

/// Letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 90 and above
    A,
    /// 80 to below 90
    B,
    /// 70 to below 80
    C,
    /// 60 to below 70
    D,
    /// Below 60
    F,
}

impl Grade {
    /// Grade for a 0-100 score; lower bounds are inclusive
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= grades::A_MIN {
            Self::A
        } else if score >= grades::B_MIN {
            Self::B
        } else if score >= grades::C_MIN {
            Self::C
        } else if score >= grades::D_MIN {
            Self::D
        } else {
            Self::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

/// Component scores on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    /// Carry consistency
    pub carry_consistency: f64,
    /// Smash fidelity
    pub smash_fidelity: f64,
    /// Face control
    pub face_control: f64,
    /// Strike centering
    pub strike_centering: f64,
    /// Club-path neutrality
    pub path_neutrality: f64,
}

/// Raw component measurements behind a score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMetrics {
    /// Mean carry (yards)
    pub carry_mean: Option<f64>,
    /// Carry coefficient of variation
    pub carry_cv: Option<f64>,
    /// Mean smash factor
    pub smash_mean: Option<f64>,
    /// Mean absolute smash deviation from target
    pub smash_deviation: Option<f64>,
    /// Mean absolute face control (degrees)
    pub face_mean_abs: Option<f64>,
    /// Mean absolute strike distance (mm)
    pub strike_mean_abs: Option<f64>,
    /// Mean absolute club path (degrees)
    pub path_mean_abs: Option<f64>,
}

impl RawMetrics {
    /// Measure an aggregate
    #[must_use]
    pub fn from_aggregate(aggregate: &SessionAggregate) -> Self {
        Self {
            carry_mean: aggregate.carry_mean(),
            carry_cv: aggregate.carry_cv(),
            smash_mean: aggregate.smash_mean(),
            smash_deviation: aggregate.smash_deviation(),
            face_mean_abs: aggregate.face_mean_abs(),
            strike_mean_abs: aggregate.strike_mean_abs(),
            path_mean_abs: aggregate.path_mean_abs(),
        }
    }
}

/// Observations behind each component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCounts {
    /// Shots scored
    pub shots: usize,
    /// Carry readings
    pub carry: usize,
    /// Plausible smash readings
    pub smash: usize,
    /// Face readings
    pub face: usize,
    /// Strike readings
    pub strike: usize,
    /// Club path readings
    pub path: usize,
}

/// Composite quality score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Profile used
    pub profile: ProfileKind,
    /// Component scores
    pub sub_scores: SubScores,
    /// Weighted total in `[0, 100]`
    pub total_score: f64,
    /// Letter grade of the total
    pub grade: Grade,
    /// Raw measurements
    pub raw: RawMetrics,
    /// Observation counts
    pub counts: MetricCounts,
}

/// Score for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionScore {
    /// Session identifier
    pub session_id: String,
    /// Session date
    pub session_date: NaiveDate,
    /// Session score
    pub score: Score,
}

/// Score for one club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubScore {
    /// Canonical club name
    pub club: String,
    /// Club score
    pub score: Score,
}

/// Composite scorer bound to a profile and club catalog
pub struct QualityScorer<'a> {
    profile: WeightProfile,
    catalog: &'a ClubCatalog,
}

impl<'a> QualityScorer<'a> {
    /// Create a scorer
    #[must_use]
    pub const fn new(profile: WeightProfile, catalog: &'a ClubCatalog) -> Self {
        Self { profile, catalog }
    }

    /// Score a pre-built aggregate
    #[must_use]
    pub fn score_aggregate(&self, aggregate: &SessionAggregate) -> Score {
        let raw = RawMetrics::from_aggregate(aggregate);
        let calibration = &self.profile.calibration;
        let weights = &self.profile.weights;

        let carry = calibration.carry_cv.normalize(raw.carry_cv);
        let smash = match &calibration.smash {
            SmashScoring::TargetDeviation(anchors) => anchors.normalize(raw.smash_deviation),
            SmashScoring::RawSmash(anchors) => anchors.normalize(raw.smash_mean),
        };
        let face = calibration.face.normalize(raw.face_mean_abs);
        let strike = calibration.strike.normalize(raw.strike_mean_abs);
        let path = calibration.path.normalize(raw.path_mean_abs);

        let weighted = weights.path.mul_add(
            path,
            weights.strike.mul_add(
                strike,
                weights
                    .face
                    .mul_add(face, weights.smash.mul_add(smash, weights.carry * carry)),
            ),
        );
        let total_score = (weighted * 100.0).clamp(0.0, 100.0);

        Score {
            profile: self.profile.kind,
            sub_scores: SubScores {
                carry_consistency: carry * 100.0,
                smash_fidelity: smash * 100.0,
                face_control: face * 100.0,
                strike_centering: strike * 100.0,
                path_neutrality: path * 100.0,
            },
            total_score,
            grade: Grade::from_score(total_score),
            raw,
            counts: MetricCounts {
                shots: aggregate.shot_count,
                carry: aggregate.carries.len(),
                smash: aggregate.smash.len(),
                face: aggregate.face.len(),
                strike: aggregate.strike.len(),
                path: aggregate.path.len(),
            },
        }
    }

    /// Score a set of already-filtered shots
    #[must_use]
    pub fn score_shots(&self, shots: &[&Shot]) -> AnalysisOutcome<Score> {
        if shots.is_empty() {
            return AnalysisOutcome::insufficient("quality_score", 1, 0);
        }
        let aggregate = SessionAggregate::from_shots(shots, self.catalog);
        AnalysisOutcome::Ready(self.score_aggregate(&aggregate))
    }

    /// Score each session group
    #[must_use]
    pub fn score_sessions(&self, sessions: &[ShotGroup<'_>]) -> Vec<SessionScore> {
        sessions
            .iter()
            .filter(|session| !session.shots.is_empty())
            .map(|session| {
                let aggregate = SessionAggregate::from_shots(&session.shots, self.catalog);
                let score = self.score_aggregate(&aggregate);
                debug!(
                    session_id = %session.key,
                    profile = %self.profile.kind,
                    total = score.total_score,
                    grade = %score.grade,
                    "Scored session"
                );
                SessionScore {
                    session_id: session.key.clone(),
                    session_date: session.first_date,
                    score,
                }
            })
            .collect()
    }

    /// Score each club's shots, in bag order
    #[must_use]
    pub fn score_by_club(&self, shots: &[&Shot]) -> Vec<ClubScore> {
        MetricExtractor::group_by_club(shots, self.catalog)
            .into_iter()
            .map(|group| {
                let aggregate = SessionAggregate::from_shots(&group.shots, self.catalog);
                ClubScore {
                    club: group.key,
                    score: self.score_aggregate(&aggregate),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 12).unwrap()
    }

    #[test]
    fn test_profiles_validate_and_sum_to_one() {
        for profile in WeightProfile::all() {
            profile.validate().unwrap();
            assert!((profile.weights.sum() - 1.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn test_unbalanced_profile_is_rejected() {
        let mut profile = WeightProfile::grading();
        profile.weights.carry = 0.5;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_profile_lookup_by_name() {
        assert_eq!("grading".parse::<ProfileKind>().unwrap(), ProfileKind::Grading);
        assert_eq!(
            "overall-quality".parse::<ProfileKind>().unwrap(),
            ProfileKind::OverallQuality
        );
        assert!("weekly".parse::<ProfileKind>().is_err());
    }

    #[test]
    fn test_grade_boundaries_are_inclusive() {
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.999), Grade::B);
        assert_eq!(Grade::from_score(80.0), Grade::B);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(59.999), Grade::F);
    }

    #[test]
    fn test_empty_aggregate_scores_neutral() {
        let catalog = ClubCatalog::builtin();
        let scorer = QualityScorer::new(WeightProfile::grading(), &catalog);
        let score = scorer.score_aggregate(&SessionAggregate::default());
        assert!((score.total_score - 50.0).abs() < 1e-9);
        assert_eq!(score.grade, Grade::F);
    }

    #[test]
    fn test_perfect_session_scores_a() {
        let catalog = ClubCatalog::builtin();
        let scorer = QualityScorer::new(WeightProfile::grading(), &catalog);
        let shots: Vec<Shot> = (0..5)
            .map(|_| {
                Shot::new("s1", date(), "7 Iron", 150.0)
                    .with_smash(1.34)
                    .with_face_to_path(0.2)
                    .with_strike_distance(1.0)
                    .with_club_path(0.5)
            })
            .collect();
        let refs: Vec<&Shot> = shots.iter().collect();
        let score = scorer.score_shots(&refs).ready().unwrap();
        assert!((score.total_score - 100.0).abs() < 1e-9);
        assert_eq!(score.grade, Grade::A);
    }

    #[test]
    fn test_empty_shot_set_is_insufficient() {
        let catalog = ClubCatalog::builtin();
        let scorer = QualityScorer::new(WeightProfile::overall_quality(), &catalog);
        assert!(!scorer.score_shots(&[]).is_ready());
    }
}
