// ABOUTME: Benchmark fixtures for generating realistic launch-monitor snapshots
// ABOUTME: Provides deterministic shot generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Benchmark fixtures for generating launch-monitor snapshots.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use carrylab::models::Shot;
use chrono::{Duration, NaiveDate};

/// Predefined snapshot sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SessionBatchSize {
    /// A month of practice (8 sessions)
    Small,
    /// A season of practice (60 sessions)
    Medium,
    /// Several years of practice (250 sessions)
    Large,
}

impl SessionBatchSize {
    #[must_use]
    pub const fn sessions(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 60,
            Self::Large => 250,
        }
    }
}

/// Clubs rotated through every generated session, with nominal carry
const ROTATION: [(&str, f64); 6] = [
    ("Driver", 235.0),
    ("5 Iron", 180.0),
    ("7 Iron", 155.0),
    ("9 Iron", 135.0),
    ("PW", 120.0),
    ("Putter", 15.0),
];

/// Shots per generated session
pub const SHOTS_PER_SESSION: usize = 40;

/// Generate a snapshot with `size` sessions three days apart
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn generate_snapshot(size: SessionBatchSize) -> Vec<Shot> {
    let Some(base_date) = NaiveDate::from_ymd_opt(2023, 1, 7) else {
        return Vec::new();
    };
    (0..size.sessions())
        .flat_map(|session| {
            let session_date = base_date + Duration::days((session * 3) as i64);
            let session_id = format!("{session_date}-bench");
            (0..SHOTS_PER_SESSION).map(move |index| {
                let (club, nominal) = ROTATION[index % ROTATION.len()];
                let ramp = if index < 8 { (8 - index) as f64 * 1.5 } else { 0.0 };
                let wobble = ((index * 37 + session * 11) % 13) as f64 - 6.0;
                let strike = ((index * 17 + session * 5) % 21) as f64 - 10.0;
                let face = ((index * 7 + session * 3) % 9) as f64 * 0.5 - 2.0;
                Shot::new(session_id.clone(), session_date, club, nominal - ramp + wobble)
                    .with_smash(1.28 + ((index * 3 + session) % 15) as f64 / 100.0)
                    .with_face_to_path(face)
                    .with_club_path(face * 0.6)
                    .with_strike_distance(strike)
            })
        })
        .collect()
}
