// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
// ABOUTME: Re-exports command modules for carrylab
// ABOUTME: Provides access to the analysis commands run against a loaded snapshot

pub mod analysis;
