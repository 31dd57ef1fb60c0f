//! Calendar engine contract
//!
//! The menu layer never computes calendar quantities. It hands validated
//! input to an implementation of [`CalendarEngine`] and formats whatever
//! comes back.

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::model::{AstroSystem, ConversionResult, Settings, TryQuery};

/// Conversion and settings surface of a luni-solar calendar engine.
///
/// Calls are synchronous. Only the setters have side effects. An error from
/// any call is fatal to the interaction.
pub trait CalendarEngine {
    /// Indian date (amanta month) for a Gregorian date
    fn from_gregorian_date(&mut self, date: NaiveDate) -> Result<ConversionResult, EngineError>;

    /// Gregorian date for an Indian date given in Saka years.
    ///
    /// The inverse direction is approximate: the result can be off by a month
    /// around an adhimasa, so callers must not expect a round trip.
    fn to_gregorian_date_from_saka(
        &mut self,
        query: &TryQuery,
    ) -> Result<ConversionResult, EngineError>;

    /// Snapshot of the current settings
    fn settings(&self) -> Result<Settings, EngineError>;

    fn set_latitude(&mut self, latitude: f64) -> Result<(), EngineError>;

    fn set_longitude(&mut self, longitude: f64) -> Result<(), EngineError>;

    fn set_system(&mut self, system: AstroSystem) -> Result<(), EngineError>;
}

impl<E: CalendarEngine + ?Sized> CalendarEngine for Box<E> {
    fn from_gregorian_date(&mut self, date: NaiveDate) -> Result<ConversionResult, EngineError> {
        (**self).from_gregorian_date(date)
    }

    fn to_gregorian_date_from_saka(
        &mut self,
        query: &TryQuery,
    ) -> Result<ConversionResult, EngineError> {
        (**self).to_gregorian_date_from_saka(query)
    }

    fn settings(&self) -> Result<Settings, EngineError> {
        (**self).settings()
    }

    fn set_latitude(&mut self, latitude: f64) -> Result<(), EngineError> {
        (**self).set_latitude(latitude)
    }

    fn set_longitude(&mut self, longitude: f64) -> Result<(), EngineError> {
        (**self).set_longitude(longitude)
    }

    fn set_system(&mut self, system: AstroSystem) -> Result<(), EngineError> {
        (**self).set_system(system)
    }
}
