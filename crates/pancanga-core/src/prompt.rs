//! Prompting seam
//!
//! [`ask`] turns one [`Question`] into a validated [`Answer`] by driving a
//! [`Prompter`], which only knows how to pick from a list and how to read a
//! line of text. Re-asking after a rejected line is the prompter's job: it
//! receives the validator and shows the rejection message before asking the
//! same question again.

use chrono::NaiveDate;

use crate::error::PromptError;
use crate::menu::{Answer, Question, SettingsChoice};
use crate::model::{Coordinate, Paksa, RawTryAnswers, YearSystem};
use crate::validate::{self, Rejection};

pub const TOP_MENU_PROMPT: &str = "What do you want to do?";
pub const SETTINGS_MENU_PROMPT: &str = "What setting do you want to change?";
pub const LATITUDE_PROMPT: &str = "Enter the latitude (valid values are between -90 and +90)";
pub const LONGITUDE_PROMPT: &str = "Enter the longitude (valid values are between -180 and +180)";
pub const ERA_PROMPT: &str = "Saka years or Vikrama years?";
pub const MASA_PROMPT: &str = "Enter masa by the number from above table \
     (If purnimanta and krsna-paksa, enter the number in brackets): ";
pub const PAKSA_PROMPT: &str = "Sukla- or Krsnapaksa ? ";
pub const TITHI_PROMPT: &str = "Enter tithi by the number: ";
pub const YEAR_PROMPT: &str = "Enter the year (valid values are between -3100 and +3000)";
pub const MONTH_PROMPT: &str = "Enter the month (valid values are 1 to 12)";
pub const DAY_PROMPT: &str = "Enter the day (valid values are 1 to 31)";

/// Validator handed to [`Prompter::input`]
pub type Validator<'a> = dyn Fn(&str) -> Result<(), Rejection> + 'a;

/// Minimal terminal interaction surface
pub trait Prompter {
    /// Let the user pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, PromptError>;

    /// Read a line that `validate` accepts, asking again after each rejection
    fn input(&mut self, prompt: &str, validate: &Validator<'_>) -> Result<String, PromptError>;
}

/// Ask `question` and return the validated answer
pub fn ask(question: &Question, prompter: &mut dyn Prompter) -> Result<Answer, PromptError> {
    match *question {
        Question::TopMenu(menu) => {
            let choice = choose(prompter, TOP_MENU_PROMPT, menu.choices(), |c| c.label())?;
            Ok(Answer::Top(choice))
        }
        Question::SettingsMenu => {
            let choice = choose(
                prompter,
                SETTINGS_MENU_PROMPT,
                &SettingsChoice::ALL,
                SettingsChoice::label,
            )?;
            Ok(Answer::Settings(choice))
        }
        Question::Coordinate(Coordinate::Latitude) => {
            read(prompter, LATITUDE_PROMPT, validate::latitude).map(Answer::Coordinate)
        }
        Question::Coordinate(Coordinate::Longitude) => {
            read(prompter, LONGITUDE_PROMPT, validate::longitude).map(Answer::Coordinate)
        }
        Question::TryEra => {
            let system = choose(prompter, ERA_PROMPT, &YearSystem::ALL, YearSystem::as_str)?;
            Ok(Answer::Era(system))
        }
        Question::TryDetails(year_system) => {
            ask_try_details(prompter, year_system).map(Answer::TryDetails)
        }
        Question::Date(_) => ask_date(prompter).map(Answer::Date),
    }
}

fn ask_try_details(
    prompter: &mut dyn Prompter,
    year_system: YearSystem,
) -> Result<RawTryAnswers, PromptError> {
    let year = read(
        prompter,
        &format!("{} years expired", year_system),
        validate::try_year,
    )?;
    let masa_num = read(prompter, MASA_PROMPT, validate::masa_num)?;
    let paksa = choose(prompter, PAKSA_PROMPT, &Paksa::ALL, Paksa::as_str)?;
    let tithi_day = read(prompter, TITHI_PROMPT, validate::tithi_day)?;
    Ok(RawTryAnswers {
        year_system,
        year,
        masa_num,
        paksa,
        tithi_day,
    })
}

fn ask_date(prompter: &mut dyn Prompter) -> Result<NaiveDate, PromptError> {
    let year = read(prompter, YEAR_PROMPT, validate::gregorian_year)?;
    let month = read(prompter, MONTH_PROMPT, validate::month)?;
    let day = read(prompter, DAY_PROMPT, |raw| validate::calendar_day(year, month, raw))?;
    // calendar_day has already proven the date exists
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        PromptError::Rejected(Rejection {
            field: validate::Field::Day,
            message: validate::Field::Day.message().to_string(),
        })
    })
}

fn choose<T: Copy>(
    prompter: &mut dyn Prompter,
    prompt: &str,
    choices: &[T],
    label: impl Fn(&T) -> &'static str,
) -> Result<T, PromptError> {
    let labels: Vec<&str> = choices.iter().map(&label).collect();
    let index = prompter.select(prompt, &labels)?;
    choices
        .get(index)
        .copied()
        .ok_or(PromptError::ChoiceOutOfRange {
            index,
            len: choices.len(),
        })
}

fn read<T>(
    prompter: &mut dyn Prompter,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, Rejection>,
) -> Result<T, PromptError> {
    let raw = prompter.input(prompt, &|raw: &str| parse(raw).map(|_| ()))?;
    Ok(parse(&raw)?)
}
