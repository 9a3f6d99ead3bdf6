// ABOUTME: Common benchmark utilities and shot fixtures for performance testing
// ABOUTME: Provides reusable snapshot generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Common benchmark utilities and test fixtures.
//!
//! Provides reusable data generators for Criterion benchmarks.

pub mod fixtures;
