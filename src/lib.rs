// ABOUTME: Main library entry point for the carrylab practice analytics toolkit
// ABOUTME: Wires the scoring engine to snapshot loading, report orchestration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

#![deny(unsafe_code)]

//! # Carrylab
//!
//! Practice-session quality scoring and trend analytics for launch-monitor
//! shot data. The numeric engine lives in `carrylab-intelligence`; this crate
//! supplies the glue a report run needs around it.
//!
//! ## Architecture
//!
//! - **Snapshot**: read-only shot sources (`ShotStore`, `JsonShotStore`)
//! - **Reports**: `PracticeAnalyzer` composing every engine component
//! - **Logging**: `tracing-subscriber` setup driven by the environment
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use carrylab::config::{ClubCatalog, EngineConfig};
//! use carrylab::errors::AppResult;
//! use carrylab::reports::PracticeAnalyzer;
//! use carrylab::snapshot::{JsonShotStore, ShotStore};
//! use carrylab::intelligence::ProfileKind;
//!
//! fn main() -> AppResult<()> {
//!     let config = EngineConfig::from_environment()?;
//!     let catalog = ClubCatalog::load(config.club_config_path.as_deref());
//!     let shots = JsonShotStore::new("shots.json").load_shots()?;
//!
//!     let analyzer = PracticeAnalyzer::new(&config, &catalog);
//!     let report = analyzer.build_report(&shots, ProfileKind::Grading);
//!     println!("ready: {}", report.is_ready());
//!     Ok(())
//! }
//! ```

/// Environment-driven logging setup
pub mod logging;

/// Practice report orchestration over the engine components
pub mod reports;

/// Read-only shot snapshot sources
pub mod snapshot;

// Re-export the workspace crates under stable paths
pub use carrylab_core::{config, constants, errors, models};
pub use carrylab_intelligence as intelligence;
