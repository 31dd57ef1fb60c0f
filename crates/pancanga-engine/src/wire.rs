//! JSON messages exchanged with the bridge script

use chrono::{Datelike, NaiveDate};
use pancanga_core::{
    AstronomicalDetails, ConversionResult, EngineError, IndianDate, Settings, TryQuery,
};
use serde::{Deserialize, Serialize};

/// Calendar date as plain numbers, month counted from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for WireDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl WireDate {
    pub fn to_naive(self) -> Result<NaiveDate, EngineError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            EngineError::malformed(format!(
                "no such date {}-{:02}-{:02}",
                self.year, self.month, self.day
            ))
        })
    }
}

/// One call into the engine
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request<'a> {
    FromGregorianDate {
        settings: &'a Settings,
        date: WireDate,
    },
    ToGregorianDateFromSaka {
        settings: &'a Settings,
        query: &'a TryQuery,
    },
}

impl Request<'_> {
    /// Operation name as it appears on the wire
    pub fn op(&self) -> &'static str {
        match self {
            Self::FromGregorianDate { .. } => "fromGregorianDate",
            Self::ToGregorianDateFromSaka { .. } => "toGregorianDateFromSaka",
        }
    }
}

/// Envelope written by the bridge script
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<WireResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Response {
    /// Unwrap the envelope, turning `ok: false` into [`EngineError::Failed`]
    pub fn into_result(self) -> Result<WireResult, EngineError> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(EngineError::malformed("response has no result")),
            (false, _) => Err(EngineError::failed(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }
}

/// Conversion result as the bridge script reports it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireResult {
    pub gregorian_date: WireDate,
    pub weekday_name: String,
    pub indian: IndianDate,
    #[serde(default)]
    pub details: Option<AstronomicalDetails>,
}

impl WireResult {
    pub fn into_conversion(self) -> Result<ConversionResult, EngineError> {
        Ok(ConversionResult {
            gregorian: self.gregorian_date.to_naive()?,
            weekday: self.weekday_name,
            indian: self.indian,
            details: self.details,
        })
    }
}
