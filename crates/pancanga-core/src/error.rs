//! Core error types

use chrono::NaiveDate;
use thiserror::Error;

use crate::menu::{Answer, State};
use crate::validate::Rejection;

/// Failure reported by a calendar engine implementation.
///
/// The menu layer never recovers from these; they travel up to the process
/// entry point.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Calendar engine unavailable: {message}")]
    Unavailable { message: String },

    #[error("Calendar engine failed: {message}")]
    Failed { message: String },

    #[error("Calendar engine returned malformed output: {message}")]
    Malformed { message: String },
}

impl EngineError {
    /// Create an unavailable error (engine could not be reached)
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a failure error (engine reached, but the call failed)
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Create a malformed-output error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Conversion result for {date} carries no astronomical details")]
    MissingDetails { date: NaiveDate },

    #[error("Date after {date} is out of the supported range")]
    DateOutOfRange { date: NaiveDate },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Answer {answer:?} does not fit state {state:?}")]
    UnexpectedAnswer { state: State, answer: Answer },

    #[error("Rejected answer: {0}")]
    Rejected(#[from] Rejection),
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Terminal interaction failed: {message}")]
    Interaction { message: String },

    #[error("Prompt returned choice {index}, but only {len} choices exist")]
    ChoiceOutOfRange { index: usize, len: usize },

    #[error("Rejected answer: {0}")]
    Rejected(#[from] Rejection),
}

impl PromptError {
    pub fn interaction(message: impl Into<String>) -> Self {
        Self::Interaction {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
