//! CLI error types with exit code handling
//!
//! Every failure that ends a session is turned into a [`CliError`], which
//! carries the exit code and, for engine problems, a hint on how to fix the
//! installation.

use miette::Diagnostic;
use pancanga_core::{EngineError, PromptError, ReportError, SessionError};
use thiserror::Error;

use crate::exit_codes;

const UNAVAILABLE_HELP: &str = "Install Node.js and the kollavarsham package \
     (npm install kollavarsham), then point --module-dir at the node_modules \
     directory that holds it";

const FAILED_HELP: &str = "Run with --debug to see the requests sent to the calendar engine";

const MALFORMED_HELP: &str = "The installed kollavarsham version may not match the one pancanga \
     expects; run with --debug to see the raw response";

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum CliError {
    /// Calendar engine missing, crashed or misbehaving
    #[error("{message}")]
    #[diagnostic(code(pancanga::cli::engine))]
    Engine {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Terminal interaction failed (no TTY, interrupted prompt)
    #[error("Terminal error: {message}")]
    #[diagnostic(code(pancanga::cli::terminal))]
    Terminal { message: String },

    /// Output could not be written
    #[error("IO error: {message}")]
    #[diagnostic(code(pancanga::cli::io))]
    Io { message: String },

    /// Internal error (logging setup, inconsistent session)
    #[error("Internal error: {message}")]
    #[diagnostic(code(pancanga::cli::internal))]
    Internal { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine { .. } => exit_codes::ENGINE_ERROR,
            CliError::Terminal { .. } | CliError::Io { .. } => exit_codes::IO_ERROR,
            CliError::Internal { .. } => exit_codes::ERROR,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        let help = match &err {
            EngineError::Unavailable { .. } => UNAVAILABLE_HELP,
            EngineError::Failed { .. } => FAILED_HELP,
            EngineError::Malformed { .. } => MALFORMED_HELP,
        };
        CliError::Engine {
            message: err.to_string(),
            help: Some(help.to_string()),
        }
    }
}

impl From<ReportError> for CliError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Engine(engine) => engine.into(),
            other => CliError::Engine {
                message: other.to_string(),
                help: None,
            },
        }
    }
}

impl From<SessionError> for CliError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Engine(engine) => engine.into(),
            SessionError::Report(report) => report.into(),
            other => CliError::internal(other.to_string()),
        }
    }
}

impl From<PromptError> for CliError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Interaction { message } => CliError::Terminal { message },
            other => CliError::internal(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
