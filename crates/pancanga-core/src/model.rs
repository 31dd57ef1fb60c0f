//! Calendar data model shared by the menu layer and engine implementations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Observer location and astronomical system used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Local latitude in degrees, `-90..=90`
    pub latitude: f64,

    /// Local longitude in degrees, `-180..=180`
    pub longitude: f64,

    /// Astronomical system in use
    pub system: AstroSystem,
}

impl Default for Settings {
    /// Ujjain, on the Suryasiddhanta
    fn default() -> Self {
        Self {
            latitude: 23.2,
            longitude: 75.8,
            system: AstroSystem::SuryaSiddhanta,
        }
    }
}

/// The two sets of astronomical constants the engine knows about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AstroSystem {
    #[default]
    SuryaSiddhanta,
    InPancasiddhantika,
}

impl AstroSystem {
    /// The other system
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SuryaSiddhanta => Self::InPancasiddhantika,
            Self::InPancasiddhantika => Self::SuryaSiddhanta,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuryaSiddhanta => "SuryaSiddhanta",
            Self::InPancasiddhantika => "InPancasiddhantika",
        }
    }

    /// Description used in the heading of a Verbose report
    pub fn description(&self) -> &'static str {
        match self {
            Self::SuryaSiddhanta => "Suryasiddhanta (AD 1000 ca)",
            Self::InPancasiddhantika => "older constants in Pancasiddhantika (AD 505)",
        }
    }
}

impl std::fmt::Display for AstroSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Lunar fortnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksa {
    Suklapaksa,
    Krsnapaksa,
}

impl Paksa {
    pub const ALL: [Paksa; 2] = [Paksa::Suklapaksa, Paksa::Krsnapaksa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suklapaksa => "Suklapaksa",
            Self::Krsnapaksa => "Krsnapaksa",
        }
    }
}

impl std::fmt::Display for Paksa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Era in which a "Try" year is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearSystem {
    Saka,
    Vikrama,
}

impl YearSystem {
    pub const ALL: [YearSystem; 2] = [YearSystem::Saka, YearSystem::Vikrama];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saka => "Saka",
            Self::Vikrama => "Vikrama",
        }
    }
}

impl std::fmt::Display for YearSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Report flavour of a Gregorian-to-Indian lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    List,
    Verbose,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::List => "List",
            Self::Verbose => "Verbose",
        })
    }
}

/// Settings field that takes a numeric coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        })
    }
}

/// Answers of the "Try" question set, before normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTryAnswers {
    pub year_system: YearSystem,
    /// Expired years in `year_system`
    pub year: i32,
    pub masa_num: u32,
    pub paksa: Paksa,
    pub tithi_day: u32,
}

/// Indian date expressed in Saka years, as the engine expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryQuery {
    pub year_saka: i32,
    pub masa_num: u32,
    pub paksa: Paksa,
    pub tithi_day: u32,
}

/// Indian calendar fields of a conversion result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndianDate {
    pub year_saka: i32,
    pub year_vikrama: i32,
    pub year_kali: i32,
    /// Prefix marking an intercalary month, empty otherwise
    #[serde(default)]
    pub adhimasa: String,
    pub masa: String,
    pub paksa: Paksa,
    pub tithi_day: u32,
    #[serde(default)]
    pub naksatra: String,
}

/// Moment of the Sun's entry into the current sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Samkranti {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Extended fields only needed by the Verbose report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronomicalDetails {
    /// Julian day at noon
    pub julian_day: f64,
    /// Days elapsed since the Kali epoch
    pub ahargana: f64,
    pub sunrise_hour: u32,
    pub sunrise_minute: u32,
    pub ayanamsa_degrees: i32,
    pub ayanamsa_minutes: i32,
    /// Fractional part of the tithi at sunrise
    pub ftithi: f64,
    pub saura_masa: String,
    pub saura_day: u32,
    pub samkranti: Samkranti,
}

/// What the engine returns for one conversion. Read-only to the menu layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub gregorian: NaiveDate,
    pub weekday: String,
    pub indian: IndianDate,
    pub details: Option<AstronomicalDetails>,
}

impl ConversionResult {
    /// First three characters of the weekday name
    pub fn weekday_abbrev(&self) -> String {
        self.weekday.chars().take(3).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_toggle_round_trips() {
        let system = AstroSystem::SuryaSiddhanta;
        assert_eq!(system.toggled(), AstroSystem::InPancasiddhantika);
        assert_eq!(system.toggled().toggled(), system);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.latitude, 23.2);
        assert_eq!(settings.longitude, 75.8);
        assert_eq!(settings.system, AstroSystem::SuryaSiddhanta);
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:>12}", Paksa::Krsnapaksa), "  Krsnapaksa");
        assert_eq!(format!("{:>5}", Paksa::Suklapaksa), "Suklapaksa");
    }

    #[test]
    fn test_weekday_abbrev() {
        let result = ConversionResult {
            gregorian: NaiveDate::from_ymd_opt(2008, 4, 7).unwrap(),
            weekday: "Monday".to_string(),
            indian: IndianDate {
                year_saka: 1930,
                year_vikrama: 2065,
                year_kali: 5109,
                adhimasa: String::new(),
                masa: "Caitra".to_string(),
                paksa: Paksa::Suklapaksa,
                tithi_day: 1,
                naksatra: "Asvini".to_string(),
            },
            details: None,
        };
        assert_eq!(result.weekday_abbrev(), "Mon");
    }
}
