// ABOUTME: Carrylab CLI - runs practice analytics over a launch-monitor shot snapshot
// ABOUTME: Emits scores, warmup, trends, and session comparisons as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
//!
//! Usage:
//! ```bash
//! # Full practice report
//! carrylab-cli --input shots.json report
//!
//! # Per-club scores with the overall-quality profile
//! carrylab-cli --input shots.json score --by club --profile overall_quality
//!
//! # Warmup stabilization summary
//! carrylab-cli --input shots.json warmup
//!
//! # Month-over-month trends plus per-club categories
//! carrylab-cli --input shots.json trends --period month --clubs
//!
//! # Compare two named sessions
//! carrylab-cli --input shots.json compare --older 2025-03-01-a --newer 2025-03-08-a
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use carrylab::config::{ClubCatalog, EngineConfig};
use carrylab::intelligence::ProfileKind;
use carrylab::logging::LoggingConfig;
use carrylab::reports::TrendPeriod;

use commands::analysis::{self, CommandContext};
use helpers::input::{load_snapshot, resolve_input};

#[derive(Parser)]
#[command(
    name = "carrylab-cli",
    about = "Practice-session quality scoring and trend analytics",
    long_about = "Scores launch-monitor practice sessions, detects warmup stabilization, classifies trends, and compares sessions. Results are printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Shot snapshot (JSON array or object with a `shots` array)
    #[arg(long, short = 'i', global = true, env = "CARRYLAB_INPUT")]
    input: Option<PathBuf>,

    /// Club configuration override (smash targets, aliases, bag order)
    #[arg(long, global = true)]
    club_config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Weight profile argument
#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// Five-metric session grader
    Grading,
    /// Smash and face weighted summary
    #[value(alias = "overall_quality")]
    OverallQuality,
}

impl From<ProfileArg> for ProfileKind {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Grading => Self::Grading,
            ProfileArg::OverallQuality => Self::OverallQuality,
        }
    }
}

/// Score grouping argument
#[derive(Clone, Copy, ValueEnum)]
enum ScoreScope {
    /// One score per session
    Session,
    /// One score per club
    Club,
}

/// Trend period argument
#[derive(Clone, Copy, ValueEnum)]
enum PeriodArg {
    /// Session over session
    Session,
    /// Month over month
    Month,
}

impl From<PeriodArg> for TrendPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Session => Self::Session,
            PeriodArg::Month => Self::Month,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Full practice report
    Report {
        /// Weight profile for scores
        #[arg(long, value_enum, default_value = "grading")]
        profile: ProfileArg,
    },

    /// Quality scores per session or per club
    Score {
        /// Weight profile
        #[arg(long, value_enum, default_value = "grading")]
        profile: ProfileArg,

        /// Grouping
        #[arg(long, value_enum, default_value = "session")]
        by: ScoreScope,
    },

    /// Warmup stabilization summary
    Warmup,

    /// Trend classification
    Trends {
        /// Period granularity
        #[arg(long, value_enum, default_value = "session")]
        period: PeriodArg,

        /// Also bucket clubs into most improved, plateaued, and needs attention
        #[arg(long)]
        clubs: bool,
    },

    /// Compare two sessions (defaults to the two most recent)
    Compare {
        /// Older session id
        #[arg(long, requires = "newer")]
        older: Option<String>,

        /// Newer session id
        #[arg(long, requires = "older")]
        newer: Option<String>,

        /// Weight profile for the overall score delta
        #[arg(long, value_enum, default_value = "grading")]
        profile: ProfileArg,
    },

    /// Strike distance versus carry correlation per club
    Correlations,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = EngineConfig::from_environment()?;
    if let Some(path) = cli.club_config.clone() {
        config.club_config_path = Some(path);
    }
    config.validate()?;
    let catalog = ClubCatalog::load(config.club_config_path.as_deref());

    let input = resolve_input(cli.input.as_deref())?;
    let shots = load_snapshot(&input)?;
    info!(shots = shots.len(), "Carrylab CLI running");

    let context = CommandContext {
        config: &config,
        catalog: &catalog,
        shots: &shots,
        pretty: cli.pretty,
    };

    match cli.command {
        Command::Report { profile } => analysis::report(&context, profile.into()),
        Command::Score { profile, by } => {
            analysis::score(&context, profile.into(), matches!(by, ScoreScope::Club))
        }
        Command::Warmup => analysis::warmup(&context),
        Command::Trends { period, clubs } => analysis::trends(&context, period.into(), clubs),
        Command::Compare {
            older,
            newer,
            profile,
        } => analysis::compare(
            &context,
            older.as_deref(),
            newer.as_deref(),
            profile.into(),
        ),
        Command::Correlations => analysis::correlations(&context),
    }
}
