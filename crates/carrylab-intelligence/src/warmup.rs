// ABOUTME: Rolling-window warmup stabilization detection within a practice session
// ABOUTME: Finds where rolling carry settles near its session peak and summarizes warmup lengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
#![allow(clippy::cast_precision_loss)] // Safe: shot counts are far below f64 precision limits

//! Warmup stabilization detector
//!
//! Rolling carry is aligned to shot positions: position `i` averages the
//! window ending at shot `i`. Once `k` consecutive positions reach
//! `peak * fraction`, the warmup length is the 1-based shot number where that
//! run began.

use carrylab_core::config::WarmupSettings;
use carrylab_core::models::Shot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics_extractor::{is_plausible_smash, ShotGroup};
use crate::outcome::AnalysisOutcome;
use crate::statistics;

/// Signals tracked across a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarmupMetric {
    /// Carry distance, primary signal
    Carry,
    /// Smash factor
    Smash,
    /// Absolute strike distance
    Strike,
}

impl WarmupMetric {
    /// Every tracked metric, primary first
    pub const ALL: [Self; 3] = [Self::Carry, Self::Smash, Self::Strike];

    /// Whether a larger reading is an improvement
    #[must_use]
    pub const fn higher_is_better(self) -> bool {
        matches!(self, Self::Carry | Self::Smash)
    }

    /// Reading for a shot; missing or implausible readings are absent
    #[must_use]
    pub fn reading(self, shot: &Shot) -> Option<f64> {
        match self {
            Self::Carry => Some(shot.carry).filter(|carry| carry.is_finite()),
            Self::Smash => shot.smash.filter(|&smash| is_plausible_smash(smash)),
            Self::Strike => shot
                .strike_distance
                .filter(|strike| strike.is_finite())
                .map(f64::abs),
        }
    }
}

/// Rolling mean of one metric aligned to shot positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingSeries {
    /// Metric
    pub metric: WarmupMetric,
    /// One entry per shot; `None` before the first full window
    pub values: Vec<Option<f64>>,
}

impl RollingSeries {
    /// Build the series for a shot sequence
    #[must_use]
    pub fn compute(metric: WarmupMetric, shots: &[&Shot], window: usize) -> Self {
        let readings: Vec<Option<f64>> = shots.iter().map(|shot| metric.reading(shot)).collect();
        Self {
            metric,
            values: statistics::rolling_mean(&readings, window),
        }
    }

    /// Largest rolling value
    #[must_use]
    pub fn peak(&self) -> Option<f64> {
        self.values
            .iter()
            .flatten()
            .copied()
            .reduce(f64::max)
    }
}

/// Opening shots versus post-warmup shots for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricShift {
    /// Metric compared
    pub metric: WarmupMetric,
    /// Mean over the opening shots
    pub opening_mean: Option<f64>,
    /// Mean from the warmup shot onward
    pub post_warmup_mean: Option<f64>,
    /// `(post - opening) / |opening| * 100`
    pub pct_difference: Option<f64>,
    /// Whether the difference reaches the materiality threshold
    pub material: bool,
    /// Material and in the desirable direction
    pub improved: bool,
}

impl MetricShift {
    fn between(
        metric: WarmupMetric,
        opening: &[&Shot],
        post_warmup: &[&Shot],
        material_pct: f64,
    ) -> Self {
        let mean_of = |shots: &[&Shot]| {
            let values: Vec<f64> = shots.iter().filter_map(|s| metric.reading(s)).collect();
            statistics::mean(&values)
        };
        let opening_mean = mean_of(opening);
        let post_warmup_mean = mean_of(post_warmup);

        let pct_difference = match (opening_mean, post_warmup_mean) {
            (Some(first), Some(post)) if first != 0.0 => {
                Some((post - first) / first.abs() * 100.0)
            }
            _ => None,
        };
        let material = pct_difference.is_some_and(|pct| pct.abs() >= material_pct);
        let improved = material
            && pct_difference.is_some_and(|pct| {
                if metric.higher_is_better() {
                    pct > 0.0
                } else {
                    pct < 0.0
                }
            });

        Self {
            metric,
            opening_mean,
            post_warmup_mean,
            pct_difference,
            material,
            improved,
        }
    }
}

/// Opening versus post-warmup comparison across tracked metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupComparison {
    /// Opening shots compared
    pub opening_shots: usize,
    /// Post-warmup shots compared
    pub post_warmup_shots: usize,
    /// Per-metric shifts
    pub shifts: Vec<MetricShift>,
}

impl WarmupComparison {
    /// Compare two shot populations
    #[must_use]
    pub fn compare(opening: &[&Shot], post_warmup: &[&Shot], material_pct: f64) -> Self {
        Self {
            opening_shots: opening.len(),
            post_warmup_shots: post_warmup.len(),
            shifts: WarmupMetric::ALL
                .iter()
                .map(|&metric| MetricShift::between(metric, opening, post_warmup, material_pct))
                .collect(),
        }
    }

    /// Whether any metric differs materially
    #[must_use]
    pub fn has_material_difference(&self) -> bool {
        self.shifts.iter().any(|shift| shift.material)
    }
}

/// Warmup detection for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupResult {
    /// Session identifier
    pub session_id: String,
    /// Session date
    pub session_date: NaiveDate,
    /// Shots in the session
    pub shot_count: usize,
    /// 1-based shot number where stabilization began, if detected
    pub warmup_length: Option<usize>,
    /// Peak rolling carry
    pub peak_rolling_carry: Option<f64>,
    /// `peak * fraction`
    pub threshold: Option<f64>,
    /// Mean carry from the warmup shot onward
    pub post_warmup_carry: Option<f64>,
    /// Rolling carry, smash, and strike series
    pub rolling: Vec<RollingSeries>,
    /// Opening versus post-warmup, when stabilization was detected
    pub comparison: Option<WarmupComparison>,
}

/// Descriptive statistics of detected warmup lengths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarmupLengthStats {
    /// Mean length
    pub mean: f64,
    /// Median length
    pub median: f64,
    /// Shortest
    pub min: usize,
    /// Longest
    pub max: usize,
}

/// Warmup lengths bucketed into half-open ranges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupDistribution {
    /// Fewer than 5 shots
    #[serde(rename = "<5")]
    pub under_five: usize,
    /// 5 up to 10
    #[serde(rename = "5-10")]
    pub five_to_ten: usize,
    /// 10 up to 15
    #[serde(rename = "10-15")]
    pub ten_to_fifteen: usize,
    /// 15 or more
    #[serde(rename = "15+")]
    pub fifteen_plus: usize,
}

impl WarmupDistribution {
    /// Bucket a set of lengths
    #[must_use]
    pub fn from_lengths(lengths: &[usize]) -> Self {
        lengths.iter().fold(Self::default(), |mut buckets, &length| {
            match length {
                0..5 => buckets.under_five += 1,
                5..10 => buckets.five_to_ten += 1,
                10..15 => buckets.ten_to_fifteen += 1,
                _ => buckets.fifteen_plus += 1,
            }
            buckets
        })
    }
}

/// Warmup behavior across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupSummary {
    /// Per-session results for sessions long enough to analyze
    pub sessions: Vec<WarmupResult>,
    /// Sessions skipped for having too few shots
    pub skipped_sessions: Vec<String>,
    /// Length statistics over stabilized sessions
    pub length_stats: Option<WarmupLengthStats>,
    /// Bucketed lengths
    pub distribution: WarmupDistribution,
    /// `round(median) + safety buffer`
    pub recommended_warmup: Option<usize>,
    /// Opening versus post-warmup pooled over stabilized sessions
    pub comparison: Option<WarmupComparison>,
}

/// Stabilization detector bound to warmup settings
pub struct WarmupDetector<'a> {
    settings: &'a WarmupSettings,
}

impl<'a> WarmupDetector<'a> {
    /// Create a detector
    #[must_use]
    pub const fn new(settings: &'a WarmupSettings) -> Self {
        Self { settings }
    }

    /// Find the warmup length in an aligned rolling series
    ///
    /// Returns the 1-based shot number where the first run of `streak`
    /// positions at or above `peak * fraction` began.
    #[must_use]
    pub fn find_stabilization(
        rolling: &[Option<f64>],
        fraction: f64,
        streak: usize,
    ) -> Option<usize> {
        let peak = rolling.iter().flatten().copied().reduce(f64::max)?;
        let threshold = peak * fraction;
        let required = streak.max(1);

        let mut run = 0_usize;
        for (position, value) in rolling.iter().enumerate() {
            match value {
                Some(value) if *value >= threshold => run += 1,
                _ => run = 0,
            }
            if run == required {
                return Some(position + 1 - required + 1);
            }
        }
        None
    }

    /// Detect warmup in one chronologically ordered session
    #[must_use]
    pub fn detect(
        &self,
        session_id: &str,
        session_date: NaiveDate,
        shots: &[&Shot],
    ) -> AnalysisOutcome<WarmupResult> {
        let settings = self.settings;
        if shots.len() < settings.min_session_shots {
            return AnalysisOutcome::insufficient(
                "warmup_detection",
                settings.min_session_shots,
                shots.len(),
            );
        }

        let rolling: Vec<RollingSeries> = WarmupMetric::ALL
            .iter()
            .map(|&metric| RollingSeries::compute(metric, shots, settings.window_size))
            .collect();
        let carry_series = &rolling[0];
        let peak = carry_series.peak();
        let threshold = peak.map(|peak| peak * settings.stabilization_fraction);
        let warmup_length = Self::find_stabilization(
            &carry_series.values,
            settings.stabilization_fraction,
            settings.required_streak,
        );

        let post_warmup = warmup_length.map(|length| &shots[length - 1..]);
        let post_warmup_carry = post_warmup.and_then(|post| {
            let carries: Vec<f64> = post
                .iter()
                .filter_map(|shot| WarmupMetric::Carry.reading(shot))
                .collect();
            statistics::mean(&carries)
        });
        let comparison = post_warmup.map(|post| {
            let opening = &shots[..settings.opening_shots.min(shots.len())];
            WarmupComparison::compare(opening, post, settings.material_difference_pct)
        });

        debug!(
            session_id,
            shots = shots.len(),
            warmup_length,
            peak_rolling_carry = peak,
            "Warmup detection complete"
        );

        AnalysisOutcome::Ready(WarmupResult {
            session_id: session_id.to_owned(),
            session_date,
            shot_count: shots.len(),
            warmup_length,
            peak_rolling_carry: peak,
            threshold,
            post_warmup_carry,
            rolling,
            comparison,
        })
    }

    /// Detect warmup in a session group
    #[must_use]
    pub fn detect_group(&self, session: &ShotGroup<'_>) -> AnalysisOutcome<WarmupResult> {
        self.detect(&session.key, session.first_date, &session.shots)
    }

    /// Detect warmup per session and summarize lengths
    #[must_use]
    pub fn summarize(&self, sessions: &[ShotGroup<'_>]) -> AnalysisOutcome<WarmupSummary> {
        let mut results = Vec::new();
        let mut skipped_sessions = Vec::new();
        let mut opening_pool: Vec<&Shot> = Vec::new();
        let mut post_pool: Vec<&Shot> = Vec::new();

        for session in sessions {
            match self.detect_group(session) {
                AnalysisOutcome::Ready(result) => {
                    if let Some(length) = result.warmup_length {
                        let opening_end = self.settings.opening_shots.min(session.shots.len());
                        opening_pool.extend_from_slice(&session.shots[..opening_end]);
                        post_pool.extend_from_slice(&session.shots[length - 1..]);
                    }
                    results.push(result);
                }
                AnalysisOutcome::InsufficientData(_) => skipped_sessions.push(session.key.clone()),
            }
        }

        if results.is_empty() {
            let longest = sessions.iter().map(|s| s.shots.len()).max().unwrap_or(0);
            return AnalysisOutcome::insufficient(
                "warmup_summary",
                self.settings.min_session_shots,
                longest,
            );
        }

        let lengths: Vec<usize> = results.iter().filter_map(|r| r.warmup_length).collect();
        let length_stats = Self::length_stats(&lengths);
        let recommended_warmup =
            length_stats.map(|stats| recommended_length(stats.median, self.settings.safety_buffer));
        let comparison = (!post_pool.is_empty()).then(|| {
            WarmupComparison::compare(
                &opening_pool,
                &post_pool,
                self.settings.material_difference_pct,
            )
        });

        debug!(
            analyzed = results.len(),
            skipped = skipped_sessions.len(),
            stabilized = lengths.len(),
            recommended_warmup,
            "Warmup summary complete"
        );

        AnalysisOutcome::Ready(WarmupSummary {
            sessions: results,
            skipped_sessions,
            length_stats,
            distribution: WarmupDistribution::from_lengths(&lengths),
            recommended_warmup,
            comparison,
        })
    }

    fn length_stats(lengths: &[usize]) -> Option<WarmupLengthStats> {
        let values: Vec<f64> = lengths.iter().map(|&length| length as f64).collect();
        Some(WarmupLengthStats {
            mean: statistics::mean(&values)?,
            median: statistics::median(&values)?,
            min: *lengths.iter().min()?,
            max: *lengths.iter().max()?,
        })
    }
}

// Safe: median of 1-based shot numbers
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn recommended_length(median: f64, safety_buffer: usize) -> usize {
    median.round_ties_even().max(0.0) as usize + safety_buffer
}
