//! Normalization of "Try" answers into the engine's input shape

use crate::model::{RawTryAnswers, TryQuery, YearSystem};

/// Vikrama year = Saka year + 135
pub const VIKRAMA_SAKA_OFFSET: i32 = 135;

/// Convert raw "Try" answers to a Saka-year query.
///
/// A Vikrama year is shifted to the Saka era; a Saka year passes through.
/// The result carries a single year field whichever era was answered.
pub fn normalize_try_answers(raw: &RawTryAnswers) -> TryQuery {
    let year_saka = match raw.year_system {
        YearSystem::Saka => raw.year,
        YearSystem::Vikrama => raw.year - VIKRAMA_SAKA_OFFSET,
    };
    TryQuery {
        year_saka,
        masa_num: raw.masa_num,
        paksa: raw.paksa,
        tithi_day: raw.tithi_day,
    }
}

/// Vikrama year for a Saka year
pub fn vikrama_from_saka(year_saka: i32) -> i32 {
    year_saka + VIKRAMA_SAKA_OFFSET
}
