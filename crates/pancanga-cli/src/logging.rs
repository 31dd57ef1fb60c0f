//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so they never interleave with prompts and
//! reports on stdout.
//!
//! # Log Levels
//!
//! - `warn`: default, silent during a normal session
//! - `info`: settings changes
//! - `debug`: state transitions, engine calls (`--debug`)
//! - `trace`: raw engine responses (only through `RUST_LOG`)

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line format.
    Pretty,
    /// Compact single-line format.
    #[default]
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub format: LogFormat,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::default(),
            with_ansi: io::stderr().is_terminal(),
        }
    }
}

impl LogConfig {
    /// `--debug` raises the level to debug
    #[must_use]
    pub fn from_debug(debug: bool) -> Self {
        Self {
            level: if debug { Level::DEBUG } else { Level::WARN },
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), CliError> {
    let filter = build_env_filter(config.level);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr).with_target(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .without_time(),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_ansi(config.with_ansi)
                    .without_time(),
            )
            .try_init(),
    };
    result.map_err(|e| CliError::internal(format!("cannot install logger: {e}")))
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Dependencies stay at warn
        EnvFilter::new(filter_directives(level))
    })
}

fn filter_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,pancanga={level},pancanga_core={level},pancanga_engine={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_sets_level() {
        assert_eq!(LogConfig::from_debug(false).level, Level::WARN);
        assert_eq!(LogConfig::from_debug(true).level, Level::DEBUG);
    }

    #[test]
    fn test_filter_covers_workspace_crates() {
        insta::assert_snapshot!(
            filter_directives(Level::DEBUG),
            @"warn,pancanga=debug,pancanga_core=debug,pancanga_engine=debug"
        );
    }

    #[test]
    fn test_format_defaults_to_compact() {
        let config = LogConfig::default().with_format(LogFormat::Json);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
