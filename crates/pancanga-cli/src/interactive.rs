//! The interactive session loop

use std::io::Write;

use pancanga_core::{CalendarEngine, Prompter, Session, ask};
use tracing::{debug, info};

use crate::display;
use crate::error::Result;

/// Greet, show the settings, then ask and answer until the user exits.
///
/// Any error ends the session; only rejected input is retried, and that
/// happens inside the prompter.
pub fn run<E: CalendarEngine>(
    session: &mut Session<E>,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<()> {
    display::welcome(out)?;
    display::settings(out, &session.settings()?)?;

    while let Some(question) = session.question() {
        display::before_question(out, &question)?;
        out.flush()?;

        let answer = ask(&question, prompter)?;
        debug!(?question, ?answer, "answered");
        let effect = session.answer(answer)?;
        display::effect(out, &effect)?;
    }

    out.flush()?;
    info!("session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use pancanga_core::prompt::Validator;
    use pancanga_core::{
        AstroSystem, ConversionResult, EngineError, IndianDate, Paksa, PromptError, Settings,
        TryQuery,
    };
    use std::collections::VecDeque;

    use crate::error::CliError;

    #[derive(Default)]
    struct StubEngine {
        settings: Settings,
        broken: bool,
    }

    impl StubEngine {
        fn result(date: NaiveDate) -> ConversionResult {
            ConversionResult {
                gregorian: date,
                weekday: date.format("%A").to_string(),
                indian: IndianDate {
                    year_saka: date.year() - 78,
                    year_vikrama: date.year() + 57,
                    year_kali: date.year() + 3101,
                    adhimasa: String::new(),
                    masa: "Caitra".to_string(),
                    paksa: Paksa::Suklapaksa,
                    tithi_day: 1,
                    naksatra: "Asvini".to_string(),
                },
                details: None,
            }
        }
    }

    impl CalendarEngine for StubEngine {
        fn from_gregorian_date(
            &mut self,
            date: NaiveDate,
        ) -> std::result::Result<ConversionResult, EngineError> {
            if self.broken {
                return Err(EngineError::unavailable("cannot run 'node'"));
            }
            Ok(Self::result(date))
        }

        fn to_gregorian_date_from_saka(
            &mut self,
            query: &TryQuery,
        ) -> std::result::Result<ConversionResult, EngineError> {
            let date = NaiveDate::from_ymd_opt(query.year_saka + 78, 4, 7)
                .ok_or_else(|| EngineError::malformed("year out of range"))?;
            Ok(Self::result(date))
        }

        fn settings(&self) -> std::result::Result<Settings, EngineError> {
            Ok(self.settings)
        }

        fn set_latitude(&mut self, latitude: f64) -> std::result::Result<(), EngineError> {
            self.settings.latitude = latitude;
            Ok(())
        }

        fn set_longitude(&mut self, longitude: f64) -> std::result::Result<(), EngineError> {
            self.settings.longitude = longitude;
            Ok(())
        }

        fn set_system(&mut self, system: AstroSystem) -> std::result::Result<(), EngineError> {
            self.settings.system = system;
            Ok(())
        }
    }

    struct Script(VecDeque<&'static str>);

    impl Script {
        fn next(&mut self) -> std::result::Result<&'static str, PromptError> {
            self.0
                .pop_front()
                .ok_or_else(|| PromptError::interaction("script exhausted"))
        }
    }

    impl Prompter for Script {
        fn select(
            &mut self,
            _prompt: &str,
            items: &[&str],
        ) -> std::result::Result<usize, PromptError> {
            let answer = self.next()?;
            items
                .iter()
                .position(|item| *item == answer)
                .ok_or_else(|| PromptError::interaction(format!("{answer} not offered")))
        }

        fn input(
            &mut self,
            _prompt: &str,
            validate: &Validator<'_>,
        ) -> std::result::Result<String, PromptError> {
            loop {
                let answer = self.next()?;
                if validate(answer).is_ok() {
                    return Ok(answer.to_string());
                }
            }
        }
    }

    fn play(engine: StubEngine, answers: &[&'static str]) -> (Result<()>, String) {
        let mut session = Session::new(engine, NaiveDate::from_ymd_opt(2008, 4, 7).unwrap());
        let mut script = Script(answers.iter().copied().collect());
        let mut out = Vec::new();
        let result = run(&mut session, &mut script, &mut out);
        let text = console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned();
        (result, text)
    }

    #[test]
    fn test_greets_and_shows_settings_first() {
        let (result, text) = play(StubEngine::default(), &["Exit"]);
        result.unwrap();

        let welcome = text.find("Welcome to pancanga!").unwrap();
        let credits = text.find("Pancanga vers.3.14").unwrap();
        let settings = text.find("Local latitude is set to 23.2").unwrap();
        let farewell = text.find("Good Bye!").unwrap();
        assert!(welcome < credits && credits < settings && settings < farewell);
    }

    #[test]
    fn test_latitude_map_precedes_change() {
        let (result, text) = play(
            StubEngine::default(),
            &["Settings", "Latitude", "100", "8.5", "Go Back", "Exit"],
        );
        result.unwrap();

        let map = text.find("Trivandrum:8.5").unwrap();
        let changed = text.find("Latitude has been changed to 8.5").unwrap();
        let shown = text.rfind("Local latitude is set to 8.5").unwrap();
        assert!(map < changed && changed < shown);
        assert!(!text.contains("Srinagar:74.8"));
    }

    #[test]
    fn test_list_then_return_prints_two_runs() {
        let (result, text) = play(
            StubEngine::default(),
            &["List", "2008", "4", "7", "Return", "Exit"],
        );
        result.unwrap();

        assert!(text.contains("Going to run List for the date: Mon Apr 07 2008"));
        assert!(text.contains("Going to run List for the date: Thu Apr 17 2008"));
        assert_eq!(text.matches("|Saka 1930|").count(), 20);
        assert_eq!(text.matches(display::RETURN_HINT).count(), 2);
    }

    #[test]
    fn test_try_shows_masa_table_and_result() {
        let (result, text) = play(
            StubEngine::default(),
            &["Try", "Vikrama", "2065", "0", "Suklapaksa", "1", "Exit"],
        );
        result.unwrap();

        let table = text.find("11(10).Phalguna").unwrap();
        let line = text.find("Saka 1930 Vikrama 2065 | Caitra Suklapaksa  1").unwrap();
        assert!(table < line);
        assert!(!text.contains(display::RETURN_HINT));
    }

    #[test]
    fn test_engine_failure_ends_session_with_engine_error() {
        let engine = StubEngine {
            broken: true,
            ..StubEngine::default()
        };
        let (result, text) = play(engine, &["Verbose", "2008", "4", "7", "Exit"]);

        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Engine { .. }));
        assert_eq!(err.exit_code(), crate::exit_codes::ENGINE_ERROR);
        assert!(!text.contains("Good Bye!"));
    }

    #[test]
    fn test_closed_terminal_is_terminal_error() {
        let (result, _) = play(StubEngine::default(), &["Settings"]);
        assert!(matches!(result, Err(CliError::Terminal { .. })));
    }
}
