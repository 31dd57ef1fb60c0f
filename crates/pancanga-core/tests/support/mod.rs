//! In-memory calendar engine for driving sessions in tests

#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use pancanga_core::{
    AstroSystem, AstronomicalDetails, CalendarEngine, ConversionResult, EngineError, IndianDate,
    Paksa, Samkranti, Settings, TryQuery,
};

/// Deterministic engine: every date maps to Saka `year - 78`, Caitra
/// Suklapaksa with the day of month as the tithi.
#[derive(Debug, Default)]
pub struct FakeEngine {
    pub settings: Settings,
    pub gregorian_calls: Vec<NaiveDate>,
    pub saka_queries: Vec<TryQuery>,
    pub fail: bool,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn result_for(date: NaiveDate) -> ConversionResult {
    let year_saka = date.year() - 78;
    ConversionResult {
        gregorian: date,
        weekday: date.format("%A").to_string(),
        indian: IndianDate {
            year_saka,
            year_vikrama: year_saka + 135,
            year_kali: year_saka + 3179,
            adhimasa: String::new(),
            masa: "Caitra".to_string(),
            paksa: Paksa::Suklapaksa,
            tithi_day: date.day().min(15),
            naksatra: "Rohini".to_string(),
        },
        details: Some(AstronomicalDetails {
            julian_day: 2454564.0,
            ahargana: 1864678.0,
            sunrise_hour: 6,
            sunrise_minute: 2,
            ayanamsa_degrees: 19,
            ayanamsa_minutes: 48,
            ftithi: 0.25,
            saura_masa: "Mina".to_string(),
            saura_day: 25,
            samkranti: Samkranti {
                year: date.year(),
                month: 3,
                day: 14,
                hour: 4,
                minute: 35,
            },
        }),
    }
}

impl CalendarEngine for FakeEngine {
    fn from_gregorian_date(&mut self, date: NaiveDate) -> Result<ConversionResult, EngineError> {
        if self.fail {
            return Err(EngineError::failed("engine offline"));
        }
        self.gregorian_calls.push(date);
        Ok(result_for(date))
    }

    fn to_gregorian_date_from_saka(
        &mut self,
        query: &TryQuery,
    ) -> Result<ConversionResult, EngineError> {
        if self.fail {
            return Err(EngineError::failed("engine offline"));
        }
        self.saka_queries.push(*query);
        let mut result = result_for(date(query.year_saka + 78, 4, 7));
        result.indian.paksa = query.paksa;
        result.indian.tithi_day = query.tithi_day;
        result.details = None;
        Ok(result)
    }

    fn settings(&self) -> Result<Settings, EngineError> {
        Ok(self.settings)
    }

    fn set_latitude(&mut self, latitude: f64) -> Result<(), EngineError> {
        self.settings.latitude = latitude;
        Ok(())
    }

    fn set_longitude(&mut self, longitude: f64) -> Result<(), EngineError> {
        self.settings.longitude = longitude;
        Ok(())
    }

    fn set_system(&mut self, system: AstroSystem) -> Result<(), EngineError> {
        self.settings.system = system;
        Ok(())
    }
}

/// Prompter replaying canned lines. Rejected lines are recorded and the next
/// line is tried, the way a terminal prompt asks again.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub prompts: Vec<String>,
    pub rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self) -> Result<String, pancanga_core::PromptError> {
        self.answers
            .pop_front()
            .ok_or_else(|| pancanga_core::PromptError::interaction("script exhausted"))
    }
}

impl pancanga_core::Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        prompt: &str,
        items: &[&str],
    ) -> Result<usize, pancanga_core::PromptError> {
        self.prompts.push(prompt.to_string());
        let answer = self.next()?;
        items.iter().position(|item| *item == answer).ok_or_else(|| {
            pancanga_core::PromptError::interaction(format!("{answer} not in {items:?}"))
        })
    }

    fn input(
        &mut self,
        prompt: &str,
        validate: &pancanga_core::prompt::Validator<'_>,
    ) -> Result<String, pancanga_core::PromptError> {
        self.prompts.push(prompt.to_string());
        loop {
            let answer = self.next()?;
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(rejection) => self.rejections.push(rejection.message),
            }
        }
    }
}
