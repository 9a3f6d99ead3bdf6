// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
// ABOUTME: Re-exports helper modules for carrylab
// ABOUTME: Provides access to snapshot input and JSON display utilities

pub mod display;
pub mod input;
