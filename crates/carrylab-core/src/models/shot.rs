// ABOUTME: Launch-monitor shot record as materialized by the storage layer
// ABOUTME: Immutable value with nullable measurement fields and builder-style constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One measured strike
///
/// Shots are produced by the storage layer and never mutated by the engine.
/// Every measurement except carry is nullable: launch monitors drop readings
/// on mishits and older sessions predate some fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    /// Practice session the shot belongs to
    pub session_id: String,
    /// Calendar date of the session
    pub session_date: NaiveDate,
    /// Club label as recorded by the launch monitor
    pub club: String,
    /// Carry distance (yards)
    pub carry: f64,
    /// Ball speed divided by club speed
    #[serde(default)]
    pub smash: Option<f64>,
    /// Face angle relative to club path at impact (degrees)
    #[serde(default)]
    pub face_to_path: Option<f64>,
    /// Face angle relative to target line (degrees)
    #[serde(default)]
    pub face_angle: Option<f64>,
    /// Club path relative to target line (degrees)
    #[serde(default)]
    pub club_path: Option<f64>,
    /// Impact distance from the face center (mm)
    #[serde(default)]
    pub strike_distance: Option<f64>,
    /// Lateral landing offset (yards)
    #[serde(default)]
    pub side_distance: Option<f64>,
    /// Back spin (rpm)
    #[serde(default)]
    pub back_spin: Option<f64>,
    /// Side spin (rpm)
    #[serde(default)]
    pub side_spin: Option<f64>,
    /// Vertical launch angle (degrees)
    #[serde(default)]
    pub launch_angle: Option<f64>,
    /// Attack angle (degrees)
    #[serde(default)]
    pub attack_angle: Option<f64>,
    /// Descent angle (degrees)
    #[serde(default)]
    pub descent_angle: Option<f64>,
    /// Peak height (yards)
    #[serde(default)]
    pub apex: Option<f64>,
    /// Time of flight (seconds)
    #[serde(default)]
    pub flight_time: Option<f64>,
}

impl Shot {
    /// Create a shot with only the mandatory fields set
    pub fn new(
        session_id: impl Into<String>,
        session_date: NaiveDate,
        club: impl Into<String>,
        carry: f64,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            session_date,
            club: club.into(),
            carry,
            smash: None,
            face_to_path: None,
            face_angle: None,
            club_path: None,
            strike_distance: None,
            side_distance: None,
            back_spin: None,
            side_spin: None,
            launch_angle: None,
            attack_angle: None,
            descent_angle: None,
            apex: None,
            flight_time: None,
        }
    }

    /// Set the smash factor
    #[must_use]
    pub fn with_smash(mut self, smash: f64) -> Self {
        self.smash = Some(smash);
        self
    }

    /// Set face-to-path
    #[must_use]
    pub fn with_face_to_path(mut self, face_to_path: f64) -> Self {
        self.face_to_path = Some(face_to_path);
        self
    }

    /// Set face angle
    #[must_use]
    pub fn with_face_angle(mut self, face_angle: f64) -> Self {
        self.face_angle = Some(face_angle);
        self
    }

    /// Set club path
    #[must_use]
    pub fn with_club_path(mut self, club_path: f64) -> Self {
        self.club_path = Some(club_path);
        self
    }

    /// Set strike distance from center
    #[must_use]
    pub fn with_strike_distance(mut self, strike_distance: f64) -> Self {
        self.strike_distance = Some(strike_distance);
        self
    }

    /// Set lateral landing offset
    #[must_use]
    pub fn with_side_distance(mut self, side_distance: f64) -> Self {
        self.side_distance = Some(side_distance);
        self
    }

    /// Face control reading: face-to-path, or face angle on older sessions
    #[must_use]
    pub fn face_control(&self) -> Option<f64> {
        self.face_to_path.or(self.face_angle)
    }
}
