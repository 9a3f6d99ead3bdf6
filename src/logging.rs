// ABOUTME: Logging configuration and structured logging setup for report runs
// ABOUTME: Selects level and output format from the environment and installs the subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

//! Structured logging configuration
//!
//! Logs go to stderr so that JSON results on stdout stay machine-readable.

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use tracing::{debug, Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Workspace crates whose targets follow the configured level
const CRATE_TARGETS: [&str; 3] = ["carrylab", "carrylab_core", "carrylab_intelligence"];

/// Where and how report runs log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level for workspace crates (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Add file and line to each event
    pub include_location: bool,
    /// Add thread ids to each event
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One `JSON` object per event
    Json,
    /// Full human-readable events
    Pretty,
    /// Single-line events without targets
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unrecognized is pretty
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT` and the `LOG_INCLUDE_*` switches
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_env_value(&value)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
        }
    }

    /// Override the level, as the `--verbose` flag does
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the filter: `RUST_LOG` as the base, workspace crates at the configured level
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        CRATE_TARGETS
            .iter()
            .fold(EnvFilter::new(base), |filter, target| {
                filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .unwrap_or_else(|_| Level::INFO.into()),
                )
            })
    }

    fn format_layer<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_span_events(span_events);

        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber, writing to stderr
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(self.format_layer())
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        debug!(
            level = %self.level,
            format = ?self.format,
            version = env!("CARGO_PKG_VERSION"),
            "Logging configured"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_configured_level() {
        let filter = LoggingConfig::default().with_level("warn").env_filter();
        assert!(filter.to_string().contains("carrylab_intelligence=warn"));
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_env_value("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(" Compact "), LogFormat::Compact);
        assert_eq!(LogFormat::from_env_value("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_with_level_overrides_default() {
        let config = LoggingConfig::default().with_level("debug");
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
