// ABOUTME: Practice report orchestration composing every engine component over one snapshot
// ABOUTME: Scores, warmup, trends, comparisons, and correlations behind a single analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Practice reports
//!
//! [`PracticeAnalyzer`] borrows the engine configuration and club catalog
//! built at process start and runs each analysis as a pure read over a shot
//! snapshot. Sparse data surfaces as [`AnalysisOutcome::InsufficientData`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ClubCatalog, EngineConfig};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    club_correlations, AnalysisOutcome, ClubCorrelation, ClubScore, ClubTrendReport,
    MetricExtractor, ProfileKind, QualityScorer, SessionComparator, SessionComparison,
    SessionScore, ShotGroup, TrendClassifier, TrendSummary, WarmupDetector, WarmupSummary,
    WeightProfile,
};
use crate::models::Shot;

/// Period granularity for trends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendPeriod {
    /// One period per session
    Session,
    /// One period per calendar month
    Month,
}

/// Everything a practice report run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeReport {
    /// Shots in the snapshot
    pub total_shots: usize,
    /// Shots passing the exclusion policy
    pub qualifying_shots: usize,
    /// Sessions with qualifying shots
    pub session_count: usize,
    /// First session date
    pub first_session: NaiveDate,
    /// Last session date
    pub last_session: NaiveDate,
    /// Weight profile used for scores
    pub profile: ProfileKind,
    /// Score per session, oldest first
    pub session_scores: Vec<SessionScore>,
    /// Score per club over the whole snapshot
    pub club_scores: Vec<ClubScore>,
    /// Warmup detection summary
    pub warmup: AnalysisOutcome<WarmupSummary>,
    /// Session-over-session trends
    pub session_trends: AnalysisOutcome<TrendSummary>,
    /// Month-over-month trends
    pub monthly_trends: AnalysisOutcome<TrendSummary>,
    /// Clubs bucketed by trend
    pub club_trends: ClubTrendReport,
    /// Latest session against the one before it
    pub latest_comparison: AnalysisOutcome<SessionComparison>,
    /// Strike versus carry per club
    pub correlations: Vec<ClubCorrelation>,
}

/// Runs engine components against a shot snapshot
pub struct PracticeAnalyzer<'a> {
    config: &'a EngineConfig,
    catalog: &'a ClubCatalog,
}

impl<'a> PracticeAnalyzer<'a> {
    /// Create an analyzer over shared configuration
    #[must_use]
    pub const fn new(config: &'a EngineConfig, catalog: &'a ClubCatalog) -> Self {
        Self { config, catalog }
    }

    fn extractor(&self) -> MetricExtractor<'a> {
        MetricExtractor::new(&self.config.exclusion)
    }

    /// Score every session
    #[must_use]
    pub fn score_sessions(
        &self,
        shots: &[Shot],
        profile: ProfileKind,
    ) -> AnalysisOutcome<Vec<SessionScore>> {
        let scorer = QualityScorer::new(WeightProfile::for_kind(profile), self.catalog);
        self.extractor()
            .sessions(shots)
            .map(|sessions| scorer.score_sessions(&sessions))
    }

    /// Score every club across the snapshot
    #[must_use]
    pub fn score_clubs(
        &self,
        shots: &[Shot],
        profile: ProfileKind,
    ) -> AnalysisOutcome<Vec<ClubScore>> {
        let scorer = QualityScorer::new(WeightProfile::for_kind(profile), self.catalog);
        self.extractor()
            .filter(shots)
            .map(|admitted| scorer.score_by_club(&admitted))
    }

    /// Detect warmup per session and summarize
    #[must_use]
    pub fn warmup(&self, shots: &[Shot]) -> AnalysisOutcome<WarmupSummary> {
        let detector = WarmupDetector::new(&self.config.warmup);
        match self.extractor().sessions(shots) {
            AnalysisOutcome::Ready(sessions) => detector.summarize(&sessions),
            AnalysisOutcome::InsufficientData(reason) => AnalysisOutcome::InsufficientData(reason),
        }
    }

    /// Classify trends across sessions or months
    #[must_use]
    pub fn trends(&self, shots: &[Shot], period: TrendPeriod) -> AnalysisOutcome<TrendSummary> {
        let classifier = TrendClassifier::new(&self.config.trend);
        let periods = match self.extractor().filter(shots) {
            AnalysisOutcome::Ready(admitted) => match period {
                TrendPeriod::Session => TrendClassifier::session_series(
                    &MetricExtractor::group_by_session(&admitted),
                    self.catalog,
                ),
                TrendPeriod::Month => TrendClassifier::monthly_series(&admitted, self.catalog),
            },
            AnalysisOutcome::InsufficientData(reason) => {
                return AnalysisOutcome::InsufficientData(reason)
            }
        };
        classifier.summarize(periods)
    }

    /// Bucket clubs by session-over-session trend
    #[must_use]
    pub fn club_trends(&self, shots: &[Shot]) -> ClubTrendReport {
        let classifier = TrendClassifier::new(&self.config.trend);
        let admitted = self.extractor().admissible(shots);
        classifier.club_trends(&admitted, self.catalog)
    }

    /// Compare two sessions by id, defaulting to the two most recent
    ///
    /// # Errors
    ///
    /// Returns a not-found error when a named session has no qualifying shots
    pub fn compare(
        &self,
        shots: &[Shot],
        older: Option<&str>,
        newer: Option<&str>,
        profile: ProfileKind,
    ) -> AppResult<AnalysisOutcome<SessionComparison>> {
        let sessions = match self.extractor().sessions(shots) {
            AnalysisOutcome::Ready(sessions) => sessions,
            AnalysisOutcome::InsufficientData(reason) => {
                return Ok(AnalysisOutcome::InsufficientData(reason))
            }
        };

        let find = |id: &str| {
            sessions
                .iter()
                .find(|session| session.key == id)
                .ok_or_else(|| AppError::not_found(format!("Session {id}")))
        };

        let (first, second) = match (older, newer) {
            (Some(older), Some(newer)) => (find(older)?, find(newer)?),
            (None, None) => {
                let [.., first, second] = sessions.as_slice() else {
                    return Ok(AnalysisOutcome::insufficient(
                        "session_comparison",
                        2,
                        sessions.len(),
                    ));
                };
                (first, second)
            }
            _ => {
                return Err(AppError::invalid_input(
                    "Both --older and --newer are required when naming sessions",
                ))
            }
        };

        let comparator = SessionComparator::new(
            &self.config.comparison,
            self.catalog,
            WeightProfile::for_kind(profile),
        );
        Ok(AnalysisOutcome::Ready(comparator.compare_groups(first, second)))
    }

    /// Strike versus carry correlation per club
    #[must_use]
    pub fn correlations(&self, shots: &[Shot]) -> Vec<ClubCorrelation> {
        let admitted = self.extractor().admissible(shots);
        club_correlations(&admitted, self.catalog)
    }

    /// Run every analysis and assemble one report
    #[must_use]
    pub fn build_report(
        &self,
        shots: &[Shot],
        profile: ProfileKind,
    ) -> AnalysisOutcome<PracticeReport> {
        let extractor = self.extractor();
        let admitted = match extractor.filter(shots) {
            AnalysisOutcome::Ready(admitted) => admitted,
            AnalysisOutcome::InsufficientData(reason) => {
                return AnalysisOutcome::InsufficientData(reason)
            }
        };
        let sessions = MetricExtractor::group_by_session(&admitted);
        let (Some(first), Some(last)) = (sessions.first(), sessions.last()) else {
            return AnalysisOutcome::insufficient("practice_report", 1, 0);
        };
        let (first_session, last_session) = (first.first_date, last.first_date);

        let scorer = QualityScorer::new(WeightProfile::for_kind(profile), self.catalog);
        let classifier = TrendClassifier::new(&self.config.trend);
        let latest_comparison = self.compare_latest(&sessions, profile);

        let report = PracticeReport {
            total_shots: shots.len(),
            qualifying_shots: admitted.len(),
            session_count: sessions.len(),
            first_session,
            last_session,
            profile,
            session_scores: scorer.score_sessions(&sessions),
            club_scores: scorer.score_by_club(&admitted),
            warmup: WarmupDetector::new(&self.config.warmup).summarize(&sessions),
            session_trends: classifier
                .summarize(TrendClassifier::session_series(&sessions, self.catalog)),
            monthly_trends: classifier
                .summarize(TrendClassifier::monthly_series(&admitted, self.catalog)),
            club_trends: classifier.club_trends(&admitted, self.catalog),
            latest_comparison,
            correlations: club_correlations(&admitted, self.catalog),
        };

        info!(
            shots = report.total_shots,
            qualifying = report.qualifying_shots,
            sessions = report.session_count,
            profile = %profile,
            "Practice report built"
        );
        AnalysisOutcome::Ready(report)
    }

    fn compare_latest(
        &self,
        sessions: &[ShotGroup<'_>],
        profile: ProfileKind,
    ) -> AnalysisOutcome<SessionComparison> {
        let [.., older, newer] = sessions else {
            return AnalysisOutcome::insufficient("session_comparison", 2, sessions.len());
        };
        let comparator = SessionComparator::new(
            &self.config.comparison,
            self.catalog,
            WeightProfile::for_kind(profile),
        );
        AnalysisOutcome::Ready(comparator.compare_groups(older, newer))
    }
}
