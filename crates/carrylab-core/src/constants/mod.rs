// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Calibration anchors, weight profiles, exclusion rules, and analysis defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Constants module
//!
//! The numeric anchors below are part of the engine's output contract:
//! independent consumers must reproduce identical scores from identical
//! shots, so none of these values may drift between reports.

/// Shot admission rules applied by every component that touches raw shots
pub mod exclusion {
    /// Non-club labels that never enter an analysis
    pub const EXCLUDED_CLUBS: [&str; 3] = ["Other", "Putter", "Sim Round"];
    /// Minimum admissible carry in yards (inclusive)
    pub const MIN_CARRY_YARDS: f64 = 10.0;
}

/// Physical plausibility limits for raw measurements
pub mod plausibility {
    /// Smash factors at or below this are sensor artifacts
    pub const MIN_SMASH_EXCLUSIVE: f64 = 0.0;
    /// Smash factors at or above this are sensor artifacts
    pub const MAX_SMASH_EXCLUSIVE: f64 = 2.5;
}

/// Normalization anchors shared by every weight profile
pub mod calibration {
    /// Raw smash factor that scores 0.0
    pub const SMASH_FLOOR: f64 = 1.05;
    /// Raw smash factor that scores 1.0
    pub const SMASH_CEILING: f64 = 1.45;
    /// Smash deviation from target that scores 1.0
    pub const SMASH_DEVIATION_BEST: f64 = 0.0;
    /// Smash deviation from target that scores 0.0
    pub const SMASH_DEVIATION_WORST: f64 = 0.10;
    /// Mean absolute face-to-path (degrees) that scores 1.0
    pub const FACE_BEST_DEG: f64 = 0.5;
    /// Mean absolute face-to-path (degrees) that scores 0.0
    pub const FACE_WORST_DEG: f64 = 6.0;
    /// Mean absolute club path (degrees) that scores 1.0
    pub const PATH_BEST_DEG: f64 = 0.8;
    /// Mean absolute club path (degrees) that scores 0.0
    pub const PATH_WORST_DEG: f64 = 6.0;
    /// Strike distance from center (mm) that scores 1.0
    pub const STRIKE_BEST_MM: f64 = 3.0;
    /// Strike distance scoring 0.0 in the grading profile
    pub const STRIKE_WORST_MM_GRADING: f64 = 15.0;
    /// Strike distance scoring 0.0 in the overall-quality profile
    pub const STRIKE_WORST_MM_OVERALL: f64 = 20.0;
    /// Carry CV scoring 1.0 in the grading profile
    pub const CARRY_CV_BEST_GRADING: f64 = 0.03;
    /// Carry CV scoring 0.0 in the grading profile
    pub const CARRY_CV_WORST_GRADING: f64 = 0.20;
    /// Carry CV scoring 1.0 in the overall-quality profile
    pub const CARRY_CV_BEST_OVERALL: f64 = 0.06;
    /// Carry CV scoring 0.0 in the overall-quality profile
    pub const CARRY_CV_WORST_OVERALL: f64 = 0.28;
    /// Score substituted when a value is missing or undefined
    pub const NEUTRAL_SCORE: f64 = 0.5;
}

/// Composite weights per named profile
pub mod weights {
    /// Session grader: carry consistency weight
    pub const GRADING_CARRY: f64 = 0.30;
    /// Session grader: smash fidelity weight
    pub const GRADING_SMASH: f64 = 0.20;
    /// Session grader: face control weight
    pub const GRADING_FACE: f64 = 0.20;
    /// Session grader: strike centering weight
    pub const GRADING_STRIKE: f64 = 0.15;
    /// Session grader: club path weight
    pub const GRADING_PATH: f64 = 0.15;

    /// Overall quality: smash weight
    pub const OVERALL_SMASH: f64 = 0.35;
    /// Overall quality: face control weight
    pub const OVERALL_FACE: f64 = 0.30;
    /// Overall quality: strike centering weight
    pub const OVERALL_STRIKE: f64 = 0.25;
    /// Overall quality: carry CV weight
    pub const OVERALL_CARRY: f64 = 0.10;
    /// Overall quality: club path is not part of this profile
    pub const OVERALL_PATH: f64 = 0.0;

    /// Allowed deviation of a profile's weight sum from 1.0
    pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
}

/// Letter grade lower bounds (inclusive)
pub mod grades {
    /// Lowest score graded A
    pub const A_MIN: f64 = 90.0;
    /// Lowest score graded B
    pub const B_MIN: f64 = 80.0;
    /// Lowest score graded C
    pub const C_MIN: f64 = 70.0;
    /// Lowest score graded D
    pub const D_MIN: f64 = 60.0;
}

/// Smash-factor targets when a club has no configured value
pub mod smash_targets {
    /// Global fallback target
    pub const DEFAULT: f64 = 1.33;
    /// Driver
    pub const DRIVER: f64 = 1.48;
    /// Fairway woods
    pub const WOOD: f64 = 1.45;
    /// Hybrids
    pub const HYBRID: f64 = 1.40;
    /// Irons numbered 4 and below
    pub const LONG_IRON: f64 = 1.38;
    /// Irons 5 through 7
    pub const MID_IRON: f64 = 1.34;
    /// Irons 8 and 9
    pub const SHORT_IRON: f64 = 1.30;
    /// Wedges of any loft
    pub const WEDGE: f64 = 1.25;
}

/// Warmup stabilization defaults
pub mod warmup {
    /// Rolling window size in shots
    pub const WINDOW_SIZE: usize = 5;
    /// Fraction of peak rolling carry considered stabilized
    pub const STABILIZATION_FRACTION: f64 = 0.95;
    /// Consecutive qualifying windows required
    pub const REQUIRED_STREAK: usize = 3;
    /// Sessions shorter than this are skipped
    pub const MIN_SESSION_SHOTS: usize = 15;
    /// Shots compared against the post-warmup population
    pub const OPENING_SHOTS: usize = 5;
    /// Shots added to the median warmup when recommending a length
    pub const SAFETY_BUFFER: usize = 2;
    /// Relative difference (percent) below which warmup makes no material difference
    pub const MATERIAL_DIFFERENCE_PCT: f64 = 0.5;
}

/// Trend classification defaults
pub mod trend {
    /// Relative change beyond which a trend is up or down
    pub const FLAT_THRESHOLD: f64 = 0.02;
    /// Trend score at or above which a club is most improved
    pub const MOST_IMPROVED_SCORE: i32 = 2;
    /// Trend score at or below which a club needs attention
    pub const NEEDS_ATTENTION_SCORE: i32 = -2;
}

/// Minimum meaningful per-club deltas between two sessions
pub mod comparison {
    /// Carry (yards)
    pub const CARRY_MIN_DELTA: f64 = 0.5;
    /// Smash factor
    pub const SMASH_MIN_DELTA: f64 = 0.005;
    /// Face-to-path (degrees)
    pub const FACE_MIN_DELTA: f64 = 0.05;
    /// Strike distance (mm)
    pub const STRIKE_MIN_DELTA: f64 = 0.05;
    /// Slack absorbing float error when a delta sits on its threshold
    pub const THRESHOLD_EPSILON: f64 = 1e-9;
}

/// Statistical gates
pub mod statistics {
    /// Fewest paired points for which a correlation is reported
    pub const MIN_CORRELATION_POINTS: usize = 3;
}
