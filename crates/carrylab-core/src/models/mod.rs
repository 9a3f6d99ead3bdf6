// ABOUTME: Core data models for launch-monitor shots and the club taxonomy
// ABOUTME: Re-exports Shot and ClubKind so downstream crates import from one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Core data models

/// Tagged club classification
pub mod club;
/// Launch-monitor shot record
pub mod shot;

pub use club::{ClubKind, WedgeKind};
pub use shot::Shot;
