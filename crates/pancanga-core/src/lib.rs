//! Pancanga Core - Menu layer for exploring the Indian luni-solar calendar
//!
//! This crate holds everything between the user's answers and the calendar
//! engine, without ever computing calendar quantities itself:
//! - `validate`: range and integrality checks for every prompt field
//! - `transform`: normalization of "Try" answers into the engine's input
//! - `report`: fixed-column Try / List / Verbose report rendering
//! - `engine`: the `CalendarEngine` contract implemented by collaborators
//! - `menu`: the interaction state machine (`Session`)
//! - `prompt`: the prompting seam used to turn questions into answers

pub mod engine;
pub mod error;
pub mod menu;
pub mod model;
pub mod prompt;
pub mod report;
pub mod transform;
pub mod validate;

pub use engine::CalendarEngine;
pub use error::{EngineError, PromptError, ReportError, SessionError};
pub use menu::{
    Answer, Effect, Question, Report, Session, SettingsChoice, State, TopChoice, TopMenu,
    TOP_MENU_BASE, TOP_MENU_WITH_RETURN,
};
pub use model::{
    AstroSystem, AstronomicalDetails, ConversionResult, Coordinate, IndianDate, Mode, Paksa,
    RawTryAnswers, Samkranti, Settings, TryQuery, YearSystem,
};
pub use prompt::{ask, Prompter};
pub use transform::{normalize_try_answers, VIKRAMA_SAKA_OFFSET};
pub use validate::{Field, Rejection};
