// ABOUTME: Descriptive statistics with explicit fallbacks for degenerate inputs
// ABOUTME: Mean, sample deviation, CV, median, Pearson correlation, and aligned rolling means
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
#![allow(clippy::cast_precision_loss)] // Safe: shot counts are far below f64 precision limits

//! Shared numeric helpers.
//!
//! None of these functions propagate `NaN`: empty input yields `None`, a
//! single sample has standard deviation `0.0`, a zero mean has CV `0.0` and a
//! zero-variance correlation is `0.0`. Summation always runs in input order so
//! repeated calls are bit-identical.

use std::cmp::Ordering;

/// Arithmetic mean
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator); `0.0` for a single sample
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    if values.len() < 2 {
        return Some(0.0);
    }
    let sum_squares = values
        .iter()
        .map(|value| (value - avg).powi(2))
        .sum::<f64>();
    Some((sum_squares / (values.len() - 1) as f64).sqrt())
}

/// Coefficient of variation (sample std-dev / mean); `0.0` when the mean is zero
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let std_dev = sample_std_dev(values)?;
    if avg == 0.0 {
        return Some(0.0);
    }
    Some(std_dev / avg)
}

/// Median value
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let len = sorted.len();
    if len % 2 == 0 {
        Some(f64::midpoint(sorted[len / 2 - 1], sorted[len / 2]))
    } else {
        Some(sorted[len / 2])
    }
}

/// Mean of absolute values
#[must_use]
pub fn mean_abs(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|value| value.abs()).sum::<f64>() / values.len() as f64)
}

/// Pearson correlation coefficient of paired samples
///
/// Returns `None` for mismatched or fewer than two pairs and `0.0` when either
/// side has zero variance.
#[must_use]
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let (covariance, variance_x, variance_y) = xs.iter().zip(ys).fold(
        (0.0_f64, 0.0_f64, 0.0_f64),
        |(cov, var_x, var_y), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (dx.mul_add(dy, cov), dx.mul_add(dx, var_x), dy.mul_add(dy, var_y))
        },
    );

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 {
        return Some(0.0);
    }
    Some((covariance / denominator).clamp(-1.0, 1.0))
}

/// Trailing rolling mean aligned to input positions
///
/// Position `i` holds the mean of the present values in `i + 1 - window ..= i`.
/// Positions before the first full window, and windows with no present
/// values, hold `None`.
#[must_use]
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|position| {
            if position + 1 < window {
                return None;
            }
            let present: Vec<f64> = values[position + 1 - window..=position]
                .iter()
                .filter_map(|value| *value)
                .collect();
            mean(&present)
        })
        .collect()
}
