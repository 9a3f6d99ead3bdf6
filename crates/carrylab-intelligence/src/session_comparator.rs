// ABOUTME: Club-by-club comparison of two practice sessions with gated deltas
// ABOUTME: Reports per-metric verdicts, area winners, and the overall quality-score delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

use std::cmp::Ordering;
use std::collections::HashMap;

use carrylab_core::config::{ClubCatalog, ComparisonThresholds};
use carrylab_core::constants::comparison::THRESHOLD_EPSILON;
use carrylab_core::models::Shot;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics_extractor::{MetricExtractor, SessionAggregate, ShotGroup};
use crate::outcome::AnalysisOutcome;
use crate::quality_scorer::{QualityScorer, Score, WeightProfile};

/// Area of the game compared between sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    /// Mean carry
    Carry,
    /// Mean smash factor
    Smash,
    /// Mean absolute face control
    Face,
    /// Mean absolute strike distance
    Strike,
}

impl Area {
    /// Every compared area
    pub const ALL: [Self; 4] = [Self::Carry, Self::Smash, Self::Face, Self::Strike];

    /// Whether a larger reading is an improvement
    #[must_use]
    pub const fn higher_is_better(self) -> bool {
        matches!(self, Self::Carry | Self::Smash)
    }

    /// Smallest delta treated as a change
    #[must_use]
    pub const fn threshold(self, thresholds: &ComparisonThresholds) -> f64 {
        match self {
            Self::Carry => thresholds.carry,
            Self::Smash => thresholds.smash,
            Self::Face => thresholds.face,
            Self::Strike => thresholds.strike,
        }
    }

    fn value(self, aggregate: &SessionAggregate) -> Option<f64> {
        match self {
            Self::Carry => aggregate.carry_mean(),
            Self::Smash => aggregate.smash_mean(),
            Self::Face => aggregate.face_mean_abs(),
            Self::Strike => aggregate.strike_mean_abs(),
        }
    }
}

/// Verdict for a single delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaVerdict {
    /// The older session was better
    Session1Better,
    /// The newer session was better
    Session2Better,
    /// Delta below the meaningful threshold
    NoChange,
    /// Metric missing in at least one session
    Unavailable,
}

/// Signed change of one metric for one club
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    /// Area compared
    pub area: Area,
    /// Older session value
    pub session1: Option<f64>,
    /// Newer session value
    pub session2: Option<f64>,
    /// `session2 - session1`
    pub delta: Option<f64>,
    /// Gated verdict
    pub verdict: DeltaVerdict,
}

/// Per-club comparison for a club hit in both sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubComparison {
    /// Canonical club name
    pub club: String,
    /// Shots in the older session
    pub session1_shots: usize,
    /// Shots in the newer session
    pub session2_shots: usize,
    /// Per-area deltas
    pub deltas: Vec<MetricDelta>,
}

/// Winner of an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaWinner {
    /// Older session won more clubs
    Session1,
    /// Newer session won more clubs
    Session2,
    /// Equal club wins
    Even,
}

/// Club wins per area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaVerdict {
    /// Area
    pub area: Area,
    /// Clubs better in the older session
    pub session1_wins: usize,
    /// Clubs better in the newer session
    pub session2_wins: usize,
    /// Overall winner
    pub winner: AreaWinner,
}

/// Full comparison of two sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionComparison {
    /// Older session identifier
    pub session1_id: Option<String>,
    /// Newer session identifier
    pub session2_id: Option<String>,
    /// Clubs hit in both sessions, in bag order
    pub clubs: Vec<ClubComparison>,
    /// Clubs hit only in the older session
    pub only_in_session1: Vec<String>,
    /// Clubs hit only in the newer session
    pub only_in_session2: Vec<String>,
    /// Older session score
    pub session1_score: AnalysisOutcome<Score>,
    /// Newer session score
    pub session2_score: AnalysisOutcome<Score>,
    /// Newer minus older total score
    pub score_delta: Option<f64>,
    /// Area-by-area verdicts
    pub areas: Vec<AreaVerdict>,
}

/// Compares two filtered sessions
pub struct SessionComparator<'a> {
    thresholds: &'a ComparisonThresholds,
    catalog: &'a ClubCatalog,
    profile: WeightProfile,
}

impl<'a> SessionComparator<'a> {
    /// Create a comparator scoring sessions with `profile`
    #[must_use]
    pub const fn new(
        thresholds: &'a ComparisonThresholds,
        catalog: &'a ClubCatalog,
        profile: WeightProfile,
    ) -> Self {
        Self {
            thresholds,
            catalog,
            profile,
        }
    }

    /// Gate and classify a delta for an area; a delta equal to the threshold counts
    #[must_use]
    pub fn classify_delta(&self, area: Area, delta: f64) -> DeltaVerdict {
        if delta.abs() + THRESHOLD_EPSILON < area.threshold(self.thresholds) {
            return DeltaVerdict::NoChange;
        }
        let newer_is_higher = delta > 0.0;
        if newer_is_higher == area.higher_is_better() {
            DeltaVerdict::Session2Better
        } else {
            DeltaVerdict::Session1Better
        }
    }

    fn metric_delta(
        &self,
        area: Area,
        older: &SessionAggregate,
        newer: &SessionAggregate,
    ) -> MetricDelta {
        let session1 = area.value(older);
        let session2 = area.value(newer);
        let (delta, verdict) = match (session1, session2) {
            (Some(first), Some(second)) => {
                let delta = second - first;
                (Some(delta), self.classify_delta(area, delta))
            }
            _ => (None, DeltaVerdict::Unavailable),
        };
        MetricDelta {
            area,
            session1,
            session2,
            delta,
            verdict,
        }
    }

    /// Compare two session groups, older first
    #[must_use]
    pub fn compare_groups(
        &self,
        older: &ShotGroup<'_>,
        newer: &ShotGroup<'_>,
    ) -> SessionComparison {
        let mut comparison = self.compare(&older.shots, &newer.shots);
        comparison.session1_id = Some(older.key.clone());
        comparison.session2_id = Some(newer.key.clone());
        comparison
    }

    /// Compare two filtered shot sets, older first
    #[must_use]
    pub fn compare(&self, older: &[&Shot], newer: &[&Shot]) -> SessionComparison {
        let older_clubs = MetricExtractor::group_by_club(older, self.catalog);
        let newer_clubs = MetricExtractor::group_by_club(newer, self.catalog);
        let newer_index: HashMap<&str, &ShotGroup<'_>> = newer_clubs
            .iter()
            .map(|group| (group.key.as_str(), group))
            .collect();

        let mut clubs = Vec::new();
        let mut only_in_session1 = Vec::new();
        for older_group in &older_clubs {
            let Some(newer_group) = newer_index.get(older_group.key.as_str()) else {
                only_in_session1.push(older_group.key.clone());
                continue;
            };
            let older_aggregate = SessionAggregate::from_shots(&older_group.shots, self.catalog);
            let newer_aggregate = SessionAggregate::from_shots(&newer_group.shots, self.catalog);
            clubs.push(ClubComparison {
                club: older_group.key.clone(),
                session1_shots: older_group.shots.len(),
                session2_shots: newer_group.shots.len(),
                deltas: Area::ALL
                    .iter()
                    .map(|&area| self.metric_delta(area, &older_aggregate, &newer_aggregate))
                    .collect(),
            });
        }

        let only_in_session2: Vec<String> = newer_clubs
            .iter()
            .filter(|group| !older_clubs.iter().any(|older| older.key == group.key))
            .map(|group| group.key.clone())
            .collect();

        let scorer = QualityScorer::new(self.profile, self.catalog);
        let session1_score = scorer.score_shots(older);
        let session2_score = scorer.score_shots(newer);
        let score_delta = match (session1_score.as_ready(), session2_score.as_ready()) {
            (Some(first), Some(second)) => Some(second.total_score - first.total_score),
            _ => None,
        };

        let areas = Self::area_verdicts(&clubs);
        debug!(
            shared_clubs = clubs.len(),
            only_in_session1 = only_in_session1.len(),
            only_in_session2 = only_in_session2.len(),
            score_delta,
            "Session comparison complete"
        );

        SessionComparison {
            session1_id: None,
            session2_id: None,
            clubs,
            only_in_session1,
            only_in_session2,
            session1_score,
            session2_score,
            score_delta,
            areas,
        }
    }

    fn area_verdicts(clubs: &[ClubComparison]) -> Vec<AreaVerdict> {
        Area::ALL
            .iter()
            .map(|&area| {
                let verdicts = clubs
                    .iter()
                    .flat_map(|club| club.deltas.iter())
                    .filter(|delta| delta.area == area)
                    .map(|delta| delta.verdict);
                let (session1_wins, session2_wins) =
                    verdicts.fold((0, 0), |(first, second), verdict| match verdict {
                        DeltaVerdict::Session1Better => (first + 1, second),
                        DeltaVerdict::Session2Better => (first, second + 1),
                        DeltaVerdict::NoChange | DeltaVerdict::Unavailable => (first, second),
                    });
                let winner = match session1_wins.cmp(&session2_wins) {
                    Ordering::Greater => AreaWinner::Session1,
                    Ordering::Less => AreaWinner::Session2,
                    Ordering::Equal => AreaWinner::Even,
                };
                AreaVerdict {
                    area,
                    session1_wins,
                    session2_wins,
                    winner,
                }
            })
            .collect()
    }
}
