// ABOUTME: Explicit analysis outcomes distinguishing results from insufficient data
// ABOUTME: Sparse input is a reportable state rather than an error for every analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

use serde::{Deserialize, Serialize};

/// Why an analysis produced no result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsufficientData {
    /// Analysis that was skipped
    pub analysis: String,
    /// Observations the analysis needs
    pub required: usize,
    /// Observations that were available
    pub available: usize,
}

/// Result of an analysis over possibly sparse data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "result")]
pub enum AnalysisOutcome<T> {
    /// Analysis ran on enough data
    Ready(T),
    /// Too few qualifying observations
    InsufficientData(InsufficientData),
}

impl<T> AnalysisOutcome<T> {
    /// Build an insufficient-data outcome
    pub fn insufficient(analysis: impl Into<String>, required: usize, available: usize) -> Self {
        Self::InsufficientData(InsufficientData {
            analysis: analysis.into(),
            required,
            available,
        })
    }

    /// Whether the analysis produced a result
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Borrow the result, if any
    #[must_use]
    pub const fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::InsufficientData(_) => None,
        }
    }

    /// Take the result, if any
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::InsufficientData(_) => None,
        }
    }

    /// Transform the result while preserving an insufficient-data outcome
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AnalysisOutcome<U> {
        match self {
            Self::Ready(value) => AnalysisOutcome::Ready(f(value)),
            Self::InsufficientData(reason) => AnalysisOutcome::InsufficientData(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let ready: AnalysisOutcome<u32> = AnalysisOutcome::Ready(6);
        let json = serde_json::to_value(&ready).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["result"], 6);

        let sparse: AnalysisOutcome<u32> = AnalysisOutcome::insufficient("warmup_detection", 15, 9);
        let json = serde_json::to_value(&sparse).unwrap();
        assert_eq!(json["status"], "insufficient_data");
        assert_eq!(json["result"]["required"], 15);
        assert_eq!(sparse.map(|n| n + 1).ready(), None);
    }
}
