// ABOUTME: Analysis commands for carrylab
// ABOUTME: Handles report, score, warmup, trends, compare, and correlation runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use carrylab::config::{ClubCatalog, EngineConfig};
use carrylab::intelligence::{AnalysisOutcome, ProfileKind};
use carrylab::models::Shot;
use carrylab::reports::{PracticeAnalyzer, TrendPeriod};

use crate::helpers::display::print_json;

/// Shared state every command reads from
pub struct CommandContext<'a> {
    /// Validated engine configuration
    pub config: &'a EngineConfig,
    /// Club catalog loaded at startup
    pub catalog: &'a ClubCatalog,
    /// Every shot in the snapshot, in file order
    pub shots: &'a [Shot],
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl<'a> CommandContext<'a> {
    fn analyzer(&self) -> PracticeAnalyzer<'a> {
        PracticeAnalyzer::new(self.config, self.catalog)
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        print_json(value, self.pretty)
    }
}

/// Per-club trend buckets printed next to a period trend
#[derive(Serialize)]
struct TrendsOutput<T, C> {
    period: TrendPeriod,
    trends: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    clubs: Option<C>,
}

/// Full practice report
pub fn report(context: &CommandContext<'_>, profile: ProfileKind) -> Result<()> {
    info!(%profile, "Building practice report");
    let report = context.analyzer().build_report(context.shots, profile);
    log_outcome("practice_report", &report);
    context.emit(&report)
}

/// Quality scores per session or per club
pub fn score(context: &CommandContext<'_>, profile: ProfileKind, by_club: bool) -> Result<()> {
    let analyzer = context.analyzer();
    if by_club {
        let scores = analyzer.score_clubs(context.shots, profile);
        log_outcome("club_scores", &scores);
        context.emit(&scores)
    } else {
        let scores = analyzer.score_sessions(context.shots, profile);
        log_outcome("session_scores", &scores);
        context.emit(&scores)
    }
}

/// Warmup stabilization summary
pub fn warmup(context: &CommandContext<'_>) -> Result<()> {
    let summary = context.analyzer().warmup(context.shots);
    log_outcome("warmup", &summary);
    context.emit(&summary)
}

/// Trend classification, optionally with per-club buckets
pub fn trends(context: &CommandContext<'_>, period: TrendPeriod, clubs: bool) -> Result<()> {
    let analyzer = context.analyzer();
    let trends = analyzer.trends(context.shots, period);
    log_outcome("trends", &trends);
    let clubs = clubs.then(|| analyzer.club_trends(context.shots));
    context.emit(&TrendsOutput {
        period,
        trends,
        clubs,
    })
}

/// Compare two sessions
pub fn compare(
    context: &CommandContext<'_>,
    older: Option<&str>,
    newer: Option<&str>,
    profile: ProfileKind,
) -> Result<()> {
    let comparison = context
        .analyzer()
        .compare(context.shots, older, newer, profile)?;
    log_outcome("session_comparison", &comparison);
    context.emit(&comparison)
}

/// Strike versus carry correlation per club
pub fn correlations(context: &CommandContext<'_>) -> Result<()> {
    let correlations = context.analyzer().correlations(context.shots);
    info!(clubs = correlations.len(), "Correlations computed");
    context.emit(&correlations)
}

fn log_outcome<T>(analysis: &str, outcome: &AnalysisOutcome<T>) {
    match outcome {
        AnalysisOutcome::Ready(_) => info!(analysis, "Analysis complete"),
        AnalysisOutcome::InsufficientData(reason) => info!(
            analysis,
            required = reason.required,
            available = reason.available,
            "Insufficient data"
        ),
    }
}
