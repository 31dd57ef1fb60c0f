//! Prompt field validation
//!
//! Every field accepts a raw answer string and either coerces it to a number
//! or rejects it with the message shown to the user when re-prompting. All
//! ranges are inclusive, and integer fields refuse any fractional part even
//! when the value is otherwise in range.

use chrono::NaiveDate;
use thiserror::Error;

/// A field the user is asked to type in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Latitude,
    Longitude,
    /// Saka or Vikrama year of a "Try" lookup
    TryYear,
    MasaNum,
    TithiDay,
    /// Gregorian year of a List/Verbose lookup
    GregorianYear,
    Month,
    Day,
}

/// Why an answer was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Rejection {
    pub field: Field,
    pub message: String,
}

impl Rejection {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Field {
    /// Inclusive numeric bounds
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
            Self::TryYear => (0.0, 3000.0),
            Self::MasaNum => (0.0, 11.0),
            Self::TithiDay => (1.0, 15.0),
            Self::GregorianYear => (-3100.0, 3000.0),
            Self::Month => (1.0, 12.0),
            Self::Day => (1.0, 31.0),
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, Self::Latitude | Self::Longitude)
    }

    /// The fixed message shown when an answer is rejected
    pub fn message(self) -> &'static str {
        match self {
            Self::Latitude => "Please enter a number between -90 and +90",
            Self::Longitude => "Please enter a number between -180 and +180",
            Self::TryYear => "Please enter an integer between 0 and 3000",
            Self::MasaNum => "Please enter an integer between 0 and 11",
            Self::TithiDay => "Please enter an integer between 1 and 15",
            Self::GregorianYear => "Please enter an integer between -3100 and +3000",
            Self::Month => "Please enter an integer between 1 and 12",
            Self::Day => "Please enter an integer between 1 and 31",
        }
    }

    /// Parse and check a raw answer, returning the numeric value unchanged
    pub fn validate(self, raw: &str) -> Result<f64, Rejection> {
        let reject = || Rejection::new(self, self.message());
        let value: f64 = raw.trim().parse().map_err(|_| reject())?;
        let (min, max) = self.bounds();
        if !value.is_finite() || value < min || value > max {
            return Err(reject());
        }
        if self.is_integer() && value.fract() != 0.0 {
            return Err(reject());
        }
        Ok(value)
    }

    fn integer(self, raw: &str) -> Result<i32, Rejection> {
        // Bounds are far inside i32, so the cast is exact
        self.validate(raw).map(|value| value as i32)
    }
}

pub fn latitude(raw: &str) -> Result<f64, Rejection> {
    Field::Latitude.validate(raw)
}

pub fn longitude(raw: &str) -> Result<f64, Rejection> {
    Field::Longitude.validate(raw)
}

pub fn try_year(raw: &str) -> Result<i32, Rejection> {
    Field::TryYear.integer(raw)
}

pub fn masa_num(raw: &str) -> Result<u32, Rejection> {
    Field::MasaNum.integer(raw).map(|value| value as u32)
}

pub fn tithi_day(raw: &str) -> Result<u32, Rejection> {
    Field::TithiDay.integer(raw).map(|value| value as u32)
}

pub fn gregorian_year(raw: &str) -> Result<i32, Rejection> {
    Field::GregorianYear.integer(raw)
}

pub fn month(raw: &str) -> Result<u32, Rejection> {
    Field::Month.integer(raw).map(|value| value as u32)
}

pub fn day(raw: &str) -> Result<u32, Rejection> {
    Field::Day.integer(raw).map(|value| value as u32)
}

/// Day-of-month check against an already answered year and month.
///
/// Applies the plain [`day`] rule first, then refuses days past the end of
/// the month so that no impossible date is ever built.
pub fn calendar_day(year: i32, month: u32, raw: &str) -> Result<u32, Rejection> {
    let value = day(raw)?;
    if NaiveDate::from_ymd_opt(year, month, value).is_some() {
        return Ok(value);
    }
    let last = days_in_month(year, month);
    Err(Rejection::new(
        Field::Day,
        format!("{} {} has only {} days", month_name(month), year, last),
    ))
}

/// Number of days in a Gregorian month, 0 for an invalid month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(0)
}

fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month
        .checked_sub(1)
        .and_then(|index| NAMES.get(index as usize))
        .copied()
        .unwrap_or("Month")
}

/// Re-check pre-parsed "Try" answers against their field rules
pub fn check_try_answers(year: i32, masa_num: u32, tithi_day: u32) -> Result<(), Rejection> {
    try_year(&year.to_string())?;
    self::masa_num(&masa_num.to_string())?;
    self::tithi_day(&tithi_day.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_out_of_range() {
        for raw in ["91", "-95.5", "90.0001", "-180"] {
            let err = latitude(raw).unwrap_err();
            assert_eq!(err.message, "Please enter a number between -90 and +90");
            assert_eq!(err.field, Field::Latitude);
        }
    }

    #[test]
    fn test_latitude_in_range_unchanged() {
        for (raw, expected) in [("90", 90.0), ("-90", -90.0), ("23.2", 23.2), ("0", 0.0)] {
            assert_eq!(latitude(raw).unwrap(), expected);
        }
    }

    #[test]
    fn test_longitude_bounds() {
        assert_eq!(longitude("180").unwrap(), 180.0);
        assert_eq!(longitude("-180").unwrap(), -180.0);
        assert_eq!(longitude("75.8").unwrap(), 75.8);
        assert!(longitude("180.5").is_err());
        assert_eq!(
            longitude("-181").unwrap_err().message,
            "Please enter a number between -180 and +180"
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(latitude("").is_err());
        assert!(latitude("north").is_err());
        assert!(latitude("12abc").is_err());
        assert!(latitude("NaN").is_err());
        assert!(longitude("inf").is_err());
        assert!(month("twelve").is_err());
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(latitude("  12.5 ").unwrap(), 12.5);
        assert_eq!(month(" 7\n").unwrap(), 7);
    }

    #[test]
    fn test_fractional_integers_rejected() {
        assert_eq!(
            month("5.5").unwrap_err().message,
            "Please enter an integer between 1 and 12"
        );
        assert!(day("1.25").is_err());
        assert!(try_year("1930.5").is_err());
        assert!(masa_num("0.1").is_err());
        assert!(tithi_day("14.9").is_err());
        assert!(gregorian_year("-3000.5").is_err());
    }

    #[test]
    fn test_integral_decimal_accepted() {
        assert_eq!(month("5.0").unwrap(), 5);
    }

    #[test]
    fn test_integer_ranges() {
        assert_eq!(try_year("0").unwrap(), 0);
        assert_eq!(try_year("3000").unwrap(), 3000);
        assert!(try_year("-1").is_err());
        assert!(try_year("3001").is_err());

        assert_eq!(masa_num("11").unwrap(), 11);
        assert!(masa_num("12").is_err());

        assert_eq!(tithi_day("1").unwrap(), 1);
        assert_eq!(tithi_day("15").unwrap(), 15);
        assert!(tithi_day("0").is_err());
        assert!(tithi_day("16").is_err());

        assert_eq!(gregorian_year("-3100").unwrap(), -3100);
        assert_eq!(gregorian_year("3000").unwrap(), 3000);
        assert_eq!(
            gregorian_year("-3101").unwrap_err().message,
            "Please enter an integer between -3100 and +3000"
        );

        assert!(month("0").is_err());
        assert!(month("13").is_err());
        assert_eq!(day("31").unwrap(), 31);
        assert!(day("32").is_err());
    }

    #[test]
    fn test_calendar_day_checks_month_length() {
        assert_eq!(calendar_day(2024, 2, "29").unwrap(), 29);
        let err = calendar_day(2023, 2, "29").unwrap_err();
        assert_eq!(err.field, Field::Day);
        assert_eq!(err.message, "February 2023 has only 28 days");
        assert_eq!(
            calendar_day(2023, 4, "31").unwrap_err().message,
            "April 2023 has only 30 days"
        );
        // The generic rule still comes first
        assert_eq!(
            calendar_day(2023, 1, "32").unwrap_err().message,
            "Please enter an integer between 1 and 31"
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(-3100, 12), 31);
        assert_eq!(days_in_month(2000, 13), 0);
    }

    #[test]
    fn test_check_try_answers() {
        assert!(check_try_answers(1930, 0, 1).is_ok());
        assert_eq!(check_try_answers(1930, 12, 1).unwrap_err().field, Field::MasaNum);
        assert_eq!(check_try_answers(1930, 0, 16).unwrap_err().field, Field::TithiDay);
    }
}
