// ABOUTME: Filters raw shots to the analyzable population and groups them for analysis
// ABOUTME: Builds per-metric aggregates with partial-field tolerance for missing readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

use std::collections::HashMap;

use carrylab_core::config::{ClubCatalog, ExclusionPolicy};
use carrylab_core::constants::plausibility::{MAX_SMASH_EXCLUSIVE, MIN_SMASH_EXCLUSIVE};
use carrylab_core::models::Shot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::outcome::AnalysisOutcome;
use crate::statistics;

/// Shots sharing a session, club, or month, in input order
#[derive(Debug, Clone)]
pub struct ShotGroup<'s> {
    /// Group key: session id, canonical club name, or `YYYY-MM`
    pub key: String,
    /// Earliest session date in the group
    pub first_date: NaiveDate,
    /// Member shots, chronological within each session
    pub shots: Vec<&'s Shot>,
}

/// Smash reading paired with its club target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmashReading {
    /// Measured smash factor
    pub value: f64,
    /// Target for the shot's club
    pub target: f64,
}

impl SmashReading {
    /// Absolute deviation from target
    #[must_use]
    pub fn deviation(&self) -> f64 {
        (self.value - self.target).abs()
    }
}

/// Per-metric value collections for a set of shots
///
/// Each collection only holds shots that carried that reading, so a missing
/// field removes a shot from one metric without dropping it elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionAggregate {
    /// Shots that contributed
    pub shot_count: usize,
    /// Carry values (yards)
    pub carries: Vec<f64>,
    /// Plausible smash readings with targets
    pub smash: Vec<SmashReading>,
    /// Face control readings (degrees, signed)
    pub face: Vec<f64>,
    /// Strike distances (mm, signed)
    pub strike: Vec<f64>,
    /// Club path readings (degrees, signed)
    pub path: Vec<f64>,
}

impl SessionAggregate {
    /// Collect readings from shots, resolving smash targets through the catalog
    #[must_use]
    pub fn from_shots(shots: &[&Shot], catalog: &ClubCatalog) -> Self {
        let mut aggregate = Self {
            shot_count: shots.len(),
            ..Self::default()
        };
        let mut targets: HashMap<&str, f64> = HashMap::new();

        for shot in shots {
            if shot.carry.is_finite() {
                aggregate.carries.push(shot.carry);
            }
            if let Some(value) = shot.smash.filter(|&v| is_plausible_smash(v)) {
                let target = *targets
                    .entry(shot.club.as_str())
                    .or_insert_with(|| catalog.smash_target(&shot.club));
                aggregate.smash.push(SmashReading { value, target });
            }
            if let Some(face) = shot.face_control().filter(|v| v.is_finite()) {
                aggregate.face.push(face);
            }
            if let Some(strike) = shot.strike_distance.filter(|v| v.is_finite()) {
                aggregate.strike.push(strike);
            }
            if let Some(path) = shot.club_path.filter(|v| v.is_finite()) {
                aggregate.path.push(path);
            }
        }

        aggregate
    }

    /// Mean carry
    #[must_use]
    pub fn carry_mean(&self) -> Option<f64> {
        statistics::mean(&self.carries)
    }

    /// Carry coefficient of variation
    #[must_use]
    pub fn carry_cv(&self) -> Option<f64> {
        statistics::coefficient_of_variation(&self.carries)
    }

    /// Mean smash factor
    #[must_use]
    pub fn smash_mean(&self) -> Option<f64> {
        let values: Vec<f64> = self.smash.iter().map(|reading| reading.value).collect();
        statistics::mean(&values)
    }

    /// Mean absolute deviation of smash from club targets
    #[must_use]
    pub fn smash_deviation(&self) -> Option<f64> {
        let deviations: Vec<f64> = self.smash.iter().map(SmashReading::deviation).collect();
        statistics::mean(&deviations)
    }

    /// Mean absolute face control
    #[must_use]
    pub fn face_mean_abs(&self) -> Option<f64> {
        statistics::mean_abs(&self.face)
    }

    /// Mean absolute strike distance
    #[must_use]
    pub fn strike_mean_abs(&self) -> Option<f64> {
        statistics::mean_abs(&self.strike)
    }

    /// Mean absolute club path
    #[must_use]
    pub fn path_mean_abs(&self) -> Option<f64> {
        statistics::mean_abs(&self.path)
    }
}

/// Smash readings outside `(0, 2.5)` are sensor artifacts
#[must_use]
pub fn is_plausible_smash(value: f64) -> bool {
    value.is_finite() && value > MIN_SMASH_EXCLUSIVE && value < MAX_SMASH_EXCLUSIVE
}

/// Applies the exclusion policy and groups admissible shots
pub struct MetricExtractor<'a> {
    policy: &'a ExclusionPolicy,
}

impl<'a> MetricExtractor<'a> {
    /// Create an extractor bound to an exclusion policy
    #[must_use]
    pub const fn new(policy: &'a ExclusionPolicy) -> Self {
        Self { policy }
    }

    /// Whether a shot belongs to the analyzable population
    #[must_use]
    pub fn is_admissible(&self, shot: &Shot) -> bool {
        !self.policy.excludes_club(&shot.club) && self.policy.admits_carry(shot.carry)
    }

    /// Admissible shots in input order
    #[must_use]
    pub fn admissible<'s>(&self, shots: &'s [Shot]) -> Vec<&'s Shot> {
        let admitted: Vec<&Shot> = shots.iter().filter(|s| self.is_admissible(s)).collect();
        debug!(
            total = shots.len(),
            admitted = admitted.len(),
            excluded = shots.len() - admitted.len(),
            "Filtered shots by exclusion policy"
        );
        admitted
    }

    /// Admissible shots, or an insufficient-data outcome when none qualify
    #[must_use]
    pub fn filter<'s>(&self, shots: &'s [Shot]) -> AnalysisOutcome<Vec<&'s Shot>> {
        let admitted = self.admissible(shots);
        if admitted.is_empty() {
            return AnalysisOutcome::insufficient("qualifying_shots", 1, 0);
        }
        AnalysisOutcome::Ready(admitted)
    }

    /// Admissible shots grouped by session, oldest session first
    #[must_use]
    pub fn sessions<'s>(&self, shots: &'s [Shot]) -> AnalysisOutcome<Vec<ShotGroup<'s>>> {
        self.filter(shots).map(|admitted| Self::group_by_session(&admitted))
    }

    /// Admissible shots grouped by club, in bag order
    #[must_use]
    pub fn clubs<'s>(
        &self,
        shots: &'s [Shot],
        catalog: &ClubCatalog,
    ) -> AnalysisOutcome<Vec<ShotGroup<'s>>> {
        self.filter(shots)
            .map(|admitted| Self::group_by_club(&admitted, catalog))
    }

    /// Admissible shots grouped by calendar month, oldest first
    #[must_use]
    pub fn months<'s>(&self, shots: &'s [Shot]) -> AnalysisOutcome<Vec<ShotGroup<'s>>> {
        self.filter(shots).map(|admitted| Self::group_by_month(&admitted))
    }

    /// Group shots by `session_id`, ordered by `(session_date, session_id)`
    #[must_use]
    pub fn group_by_session<'s>(shots: &[&'s Shot]) -> Vec<ShotGroup<'s>> {
        let mut groups = group_preserving_order(shots, |shot| shot.session_id.clone());
        groups.sort_by(|a, b| a.first_date.cmp(&b.first_date).then_with(|| a.key.cmp(&b.key)));
        groups
    }

    /// Group shots by canonical club name, ordered by bag position
    ///
    /// Labels differing only in case, whitespace, or alias land in one group
    /// keyed by the catalog name (or the first spelling seen for unknown clubs).
    #[must_use]
    pub fn group_by_club<'s>(shots: &[&'s Shot], catalog: &ClubCatalog) -> Vec<ShotGroup<'s>> {
        let mut groups = group_preserving_order(shots, |shot| catalog.club_key(&shot.club));
        for group in &mut groups {
            if let Some(first) = group.shots.first() {
                group.key = catalog.resolve(&first.club).name;
            }
        }
        groups.sort_by(|a, b| catalog.compare_clubs(&a.key, &b.key));
        groups
    }

    /// Group shots by `YYYY-MM` of their session date
    #[must_use]
    pub fn group_by_month<'s>(shots: &[&'s Shot]) -> Vec<ShotGroup<'s>> {
        let mut groups = group_preserving_order(shots, |shot| {
            shot.session_date.format("%Y-%m").to_string()
        });
        groups.sort_by(|a, b| a.key.cmp(&b.key));
        groups
    }
}

fn group_preserving_order<'s>(
    shots: &[&'s Shot],
    key_of: impl Fn(&Shot) -> String,
) -> Vec<ShotGroup<'s>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ShotGroup<'s>> = Vec::new();

    for &shot in shots {
        let key = key_of(shot);
        if let Some(&position) = index.get(&key) {
            let group = &mut groups[position];
            group.first_date = group.first_date.min(shot.session_date);
            group.shots.push(shot);
        } else {
            index.insert(key.clone(), groups.len());
            groups.push(ShotGroup {
                key,
                first_date: shot.session_date,
                shots: vec![shot],
            });
        }
    }

    groups
}
