//! Interaction state machine
//!
//! A [`Session`] owns the engine, the working date and the last List/Verbose
//! mode. The driver loop asks it for the current [`Question`], obtains an
//! [`Answer`] from the user, and feeds it back through [`Session::answer`],
//! which moves to the next [`State`] and returns the [`Effect`] to display.
//!
//! The top menu exists in two fixed variants. [`TOP_MENU_WITH_RETURN`] is
//! offered only right after a List/Verbose report; every other path leads to
//! [`TOP_MENU_BASE`].

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::engine::CalendarEngine;
use crate::error::{Result, SessionError};
use crate::model::{AstroSystem, Coordinate, Mode, RawTryAnswers, Settings, YearSystem};
use crate::report::{self, next_day};
use crate::transform::normalize_try_answers;
use crate::validate;

/// Choices of the top menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopChoice {
    /// Step the working date forward and repeat the last List/Verbose run
    Return,
    Try,
    List,
    Verbose,
    Settings,
    Exit,
}

impl TopChoice {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Return => "Return",
            Self::Try => "Try",
            Self::List => "List",
            Self::Verbose => "Verbose",
            Self::Settings => "Settings",
            Self::Exit => "Exit",
        }
    }
}

/// Top menu without the `Return` choice
pub const TOP_MENU_BASE: &[TopChoice] = &[
    TopChoice::Try,
    TopChoice::List,
    TopChoice::Verbose,
    TopChoice::Settings,
    TopChoice::Exit,
];

/// Top menu shown right after a List/Verbose report
pub const TOP_MENU_WITH_RETURN: &[TopChoice] = &[
    TopChoice::Return,
    TopChoice::Try,
    TopChoice::List,
    TopChoice::Verbose,
    TopChoice::Settings,
    TopChoice::Exit,
];

/// Which variant of the top menu is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopMenu {
    Base,
    WithReturn,
}

impl TopMenu {
    pub fn choices(&self) -> &'static [TopChoice] {
        match self {
            Self::Base => TOP_MENU_BASE,
            Self::WithReturn => TOP_MENU_WITH_RETURN,
        }
    }

    pub fn offers(&self, choice: TopChoice) -> bool {
        self.choices().contains(&choice)
    }
}

/// Choices of the settings sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsChoice {
    Latitude,
    Longitude,
    ChangeSystem,
    GoBack,
}

impl SettingsChoice {
    pub const ALL: [SettingsChoice; 4] = [
        SettingsChoice::Latitude,
        SettingsChoice::Longitude,
        SettingsChoice::ChangeSystem,
        SettingsChoice::GoBack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::ChangeSystem => "Change System",
            Self::GoBack => "Go Back",
        }
    }
}

/// Interaction state. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    TopMenu(TopMenu),
    SettingsMenu,
    /// Waiting for a new latitude or longitude
    Coordinate(Coordinate),
    /// First Try step: Saka or Vikrama
    TryEra,
    /// Second Try step: year, masa, paksa and tithi
    TryDetails(YearSystem),
    /// Waiting for the Gregorian date of a List/Verbose run
    ListVerbose(Mode),
    Terminal,
}

/// What the user is currently being asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    TopMenu(TopMenu),
    SettingsMenu,
    Coordinate(Coordinate),
    TryEra,
    TryDetails(YearSystem),
    Date(Mode),
}

/// A validated answer to a [`Question`]
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Top(TopChoice),
    Settings(SettingsChoice),
    Coordinate(f64),
    Era(YearSystem),
    TryDetails(RawTryAnswers),
    Date(NaiveDate),
}

/// A rendered report
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Try { line: String },
    List { start: NaiveDate, rows: Vec<String> },
    Verbose { date: NaiveDate, lines: Vec<String> },
}

/// Output produced by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing to show besides the next question
    None,
    CoordinateChanged { coordinate: Coordinate, value: f64 },
    SystemChanged(AstroSystem),
    /// Settings snapshot shown when leaving the settings menu
    SettingsShown(Settings),
    Report(Report),
    Farewell,
}

pub struct Session<E> {
    engine: E,
    state: State,
    working_date: NaiveDate,
    last_mode: Option<Mode>,
}

impl<E: CalendarEngine> Session<E> {
    /// Start at the plain top menu with `today` as the working date
    pub fn new(engine: E, today: NaiveDate) -> Self {
        Self {
            engine,
            state: State::TopMenu(TopMenu::Base),
            working_date: today,
            last_mode: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn working_date(&self) -> NaiveDate {
        self.working_date
    }

    /// Mode of the most recent List/Verbose choice
    pub fn last_mode(&self) -> Option<Mode> {
        self.last_mode
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn settings(&self) -> Result<Settings> {
        Ok(self.engine.settings()?)
    }

    /// The question for the current state, `None` once terminated
    pub fn question(&self) -> Option<Question> {
        match self.state {
            State::TopMenu(menu) => Some(Question::TopMenu(menu)),
            State::SettingsMenu => Some(Question::SettingsMenu),
            State::Coordinate(coordinate) => Some(Question::Coordinate(coordinate)),
            State::TryEra => Some(Question::TryEra),
            State::TryDetails(system) => Some(Question::TryDetails(system)),
            State::ListVerbose(mode) => Some(Question::Date(mode)),
            State::Terminal => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Terminal
    }

    /// Apply an answer to the current state.
    ///
    /// On error the state is not advanced.
    pub fn answer(&mut self, answer: Answer) -> Result<Effect> {
        let (next, effect) = match (self.state, answer) {
            (State::TopMenu(menu), Answer::Top(choice)) if menu.offers(choice) => {
                self.on_top_menu(choice)?
            }
            (State::SettingsMenu, Answer::Settings(choice)) => self.on_settings_menu(choice)?,
            (State::Coordinate(coordinate), Answer::Coordinate(value)) => {
                self.on_coordinate(coordinate, value)?
            }
            (State::TryEra, Answer::Era(system)) => (State::TryDetails(system), Effect::None),
            (State::TryDetails(system), Answer::TryDetails(raw)) if raw.year_system == system => {
                self.on_try(&raw)?
            }
            (State::ListVerbose(mode), Answer::Date(date)) => {
                self.working_date = date;
                let report = self.run_mode(mode)?;
                (State::TopMenu(TopMenu::WithReturn), Effect::Report(report))
            }
            (state, answer) => return Err(SessionError::UnexpectedAnswer { state, answer }),
        };
        debug!(from = ?self.state, to = ?next, "transition");
        self.state = next;
        Ok(effect)
    }

    fn on_top_menu(&mut self, choice: TopChoice) -> Result<(State, Effect)> {
        Ok(match choice {
            TopChoice::Return => {
                let mode = self.last_mode.ok_or(SessionError::UnexpectedAnswer {
                    state: self.state,
                    answer: Answer::Top(choice),
                })?;
                let previous = self.working_date;
                self.working_date = next_day(previous)?;
                match self.run_mode(mode) {
                    Ok(report) => (State::TopMenu(TopMenu::WithReturn), Effect::Report(report)),
                    Err(err) => {
                        self.working_date = previous;
                        return Err(err);
                    }
                }
            }
            TopChoice::Try => (State::TryEra, Effect::None),
            TopChoice::List => {
                self.last_mode = Some(Mode::List);
                (State::ListVerbose(Mode::List), Effect::None)
            }
            TopChoice::Verbose => {
                self.last_mode = Some(Mode::Verbose);
                (State::ListVerbose(Mode::Verbose), Effect::None)
            }
            TopChoice::Settings => (State::SettingsMenu, Effect::None),
            TopChoice::Exit => (State::Terminal, Effect::Farewell),
        })
    }

    fn on_settings_menu(&mut self, choice: SettingsChoice) -> Result<(State, Effect)> {
        Ok(match choice {
            SettingsChoice::Latitude => (State::Coordinate(Coordinate::Latitude), Effect::None),
            SettingsChoice::Longitude => (State::Coordinate(Coordinate::Longitude), Effect::None),
            SettingsChoice::ChangeSystem => {
                let system = self.engine.settings()?.system.toggled();
                self.engine.set_system(system)?;
                info!(%system, "system changed");
                (State::SettingsMenu, Effect::SystemChanged(system))
            }
            SettingsChoice::GoBack => {
                let settings = self.engine.settings()?;
                (State::TopMenu(TopMenu::Base), Effect::SettingsShown(settings))
            }
        })
    }

    fn on_coordinate(&mut self, coordinate: Coordinate, value: f64) -> Result<(State, Effect)> {
        let raw = value.to_string();
        match coordinate {
            Coordinate::Latitude => {
                validate::latitude(&raw)?;
                self.engine.set_latitude(value)?;
            }
            Coordinate::Longitude => {
                validate::longitude(&raw)?;
                self.engine.set_longitude(value)?;
            }
        }
        info!(%coordinate, value, "coordinate changed");
        Ok((
            State::SettingsMenu,
            Effect::CoordinateChanged { coordinate, value },
        ))
    }

    fn on_try(&mut self, raw: &RawTryAnswers) -> Result<(State, Effect)> {
        validate::check_try_answers(raw.year, raw.masa_num, raw.tithi_day)?;
        let query = normalize_try_answers(raw);
        debug!(?query, "querying Gregorian date");
        let result = self.engine.to_gregorian_date_from_saka(&query)?;
        let line = report::render_try(&result);
        Ok((
            State::TopMenu(TopMenu::Base),
            Effect::Report(Report::Try { line }),
        ))
    }

    fn run_mode(&mut self, mode: Mode) -> Result<Report> {
        let start = self.working_date;
        debug!(%mode, date = %start, "running lookup");
        match mode {
            Mode::List => {
                let mut working = start;
                let rows = report::run_list(&mut self.engine, &mut working)?;
                self.working_date = working;
                Ok(Report::List { start, rows })
            }
            Mode::Verbose => {
                let result = self.engine.from_gregorian_date(start)?;
                let settings = self.engine.settings()?;
                let lines = report::render_verbose(&result, &settings)?;
                Ok(Report::Verbose { date: start, lines })
            }
        }
    }
}
