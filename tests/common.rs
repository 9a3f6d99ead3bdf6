// ABOUTME: Shared test utilities and shot fixtures for integration tests
// ABOUTME: Provides quiet logging setup and builders for practice-session snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `carrylab`
//!
//! Fixtures build shots the way a launch-monitor export would deliver them:
//! one session per id, shots in hit order.

use std::env;
use std::sync::Once;

use carrylab::models::Shot;
use chrono::NaiveDate;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Shots with only carry populated
pub fn carry_shots(session_id: &str, on: NaiveDate, club: &str, carries: &[f64]) -> Vec<Shot> {
    carries
        .iter()
        .map(|&carry| Shot::new(session_id, on, club, carry))
        .collect()
}

/// Fully measured shot
pub fn measured_shot(
    session_id: &str,
    on: NaiveDate,
    club: &str,
    carry: f64,
    smash: f64,
    face_to_path: f64,
    strike_distance: f64,
) -> Shot {
    Shot::new(session_id, on, club, carry)
        .with_smash(smash)
        .with_face_to_path(face_to_path)
        .with_strike_distance(strike_distance)
        .with_club_path(1.0)
}

/// Session that ramps up over the first shots, then settles
///
/// Carries follow the warmup example used across the test suite: the first
/// three shots are short, then the player settles around 96 yards.
pub fn warmup_session(session_id: &str, on: NaiveDate) -> Vec<Shot> {
    const CARRIES: [f64; 11] = [
        80.0, 82.0, 81.0, 95.0, 96.0, 97.0, 96.0, 95.0, 97.0, 96.0, 97.0,
    ];
    carry_shots(session_id, on, "7 Iron", &CARRIES)
}

/// Two-session snapshot with a better second session and some noise
///
/// Each session has sixteen 7 Iron shots plus a Driver; session one also
/// carries a putt and a duffed chip that the exclusion policy must drop.
pub fn two_session_snapshot() -> Vec<Shot> {
    let first_day = date(2025, 3, 1);
    let second_day = date(2025, 3, 8);
    let mut shots = Vec::new();

    for index in 0..16 {
        let offset = f64::from(index % 4);
        shots.push(measured_shot(
            "2025-03-01-a",
            first_day,
            "7 Iron",
            148.0 + offset,
            1.30,
            3.0 - offset * 0.5,
            9.0 + offset,
        ));
    }
    shots.push(measured_shot(
        "2025-03-01-a",
        first_day,
        "Driver",
        230.0,
        1.44,
        2.5,
        12.0,
    ));
    shots.push(Shot::new("2025-03-01-a", first_day, "Putter", 12.0));
    shots.push(Shot::new("2025-03-01-a", first_day, "7 Iron", 4.0));

    for index in 0..16 {
        let offset = f64::from(index % 4);
        shots.push(measured_shot(
            "2025-03-08-a",
            second_day,
            "7 Iron",
            154.0 + offset,
            1.33,
            1.0 + offset * 0.25,
            4.0 + offset,
        ));
    }
    shots.push(measured_shot(
        "2025-03-08-a",
        second_day,
        "Driver",
        236.0,
        1.47,
        1.5,
        8.0,
    ));

    shots
}
