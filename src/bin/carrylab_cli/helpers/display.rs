// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors
// ABOUTME: Output formatting helpers for carrylab
// ABOUTME: Writes analysis results to stdout as compact or pretty JSON

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize a value to stdout, one document per run
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize analysis output")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write analysis output")?;
    Ok(())
}
