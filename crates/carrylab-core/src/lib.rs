// ABOUTME: Core types and constants for the carrylab practice analytics toolkit
// ABOUTME: Foundation crate with error handling, shot models, club taxonomy, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

#![deny(unsafe_code)]

//! # Carrylab Core
//!
//! Foundation crate providing shared types and constants for the carrylab
//! practice analytics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Calibration anchors, weight profiles, and engine defaults
//! - **models**: Shot records and the tagged club taxonomy
//! - **config**: Club target catalog and engine configuration

/// Unified error handling system with standard error codes
pub mod errors;

/// Calibration anchors and engine defaults organized by domain
pub mod constants;

/// Core data models (Shot, `ClubKind`)
pub mod models;

/// Club target catalog and engine thresholds
pub mod config;
