//! Logging setup for the CLI.
//!
//! Library crates log through `tracing`; this module installs the
//! subscriber, writing to stderr so generated output on stdout stays clean.
//!
//! # Environment Variables
//!
//! - `EXTRACTOR_DEBUG=true` - Enable debug logging (`1` and `yes` also work)
//! - `EXTRACTOR_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `EXTRACTOR_LOG_FORMAT=json|pretty|compact` - Set the format (default: compact)

use std::env;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Crates whose events are shown.
const TARGETS: &[&str] = &["extractor_cli", "extractor_codegen", "extractor_schema"];

/// Output format of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

/// Logging settings read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub level: &'static str,
    pub format: LogFormat,
}

impl LogSettings {
    /// Read settings from the `EXTRACTOR_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("EXTRACTOR_DEBUG").ok().as_deref(),
            env::var("EXTRACTOR_LOG_LEVEL").ok().as_deref(),
            env::var("EXTRACTOR_LOG_FORMAT").ok().as_deref(),
        )
    }

    /// Build settings from raw variable values.
    ///
    /// The level defaults to `debug` when debugging is enabled and to
    /// `warn` otherwise; an unrecognized level falls back the same way.
    pub fn from_vars(debug: Option<&str>, level: Option<&str>, format: Option<&str>) -> Self {
        let debug = debug
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);
        let fallback = if debug { "debug" } else { "warn" };

        let level = match level.map(str::to_lowercase).as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => fallback,
        };

        let format = match format.map(str::to_lowercase).as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self { level, format }
    }

    /// Build the event filter for these settings.
    pub fn filter(&self) -> EnvFilter {
        let directives = TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Check if debug logging is enabled via `EXTRACTOR_DEBUG`.
pub fn is_debug_enabled() -> bool {
    env::var("EXTRACTOR_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Initialize logging. Subsequent calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let settings = LogSettings::from_env();
        let filter = settings.filter();
        let layer = fmt::layer().with_writer(std::io::stderr);

        // A subscriber may already be installed by an embedding program.
        let _ = match settings.format {
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(layer.pretty())
                .try_init(),
            LogFormat::Compact => tracing_subscriber::registry()
                .with(filter)
                .with(layer.compact())
                .try_init(),
        };

        tracing::debug!(
            level = settings.level,
            format = ?settings.format,
            "logging initialized"
        );
    });
}
