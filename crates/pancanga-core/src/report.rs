//! Fixed-column report rendering
//!
//! Three report formats exist:
//! - Try: one line for an Indian-to-Gregorian lookup
//! - List: one line per Gregorian date, ten consecutive dates per run
//! - Verbose: a multi-line block with the astronomical details of one date
//!
//! Renderers return plain text; colouring is left to the terminal layer.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::engine::CalendarEngine;
use crate::error::ReportError;
use crate::model::{ConversionResult, Settings};
use crate::transform::vikrama_from_saka;

/// Width of report rules
pub const REPORT_WIDTH: usize = 79;

/// Number of consecutive dates covered by one List run
pub const LIST_DAYS: usize = 10;

/// Shown for fields the engine does not provide (Jovian year, karana, yoga)
pub const NOT_AVAILABLE: &str = "** not available **";

/// A horizontal rule of [`REPORT_WIDTH`] characters
pub fn rule(fill: char) -> String {
    fill.to_string().repeat(REPORT_WIDTH)
}

/// Render the result of a Try lookup.
///
/// The Vikrama year is derived from the Saka year of the result.
pub fn render_try(result: &ConversionResult) -> String {
    let indian = &result.indian;
    let date = result.gregorian;
    format!(
        "Saka {:>4} Vikrama {:>4} | {} {}{:>3}  | AD{:>5} {:>2} {:>2} {}",
        indian.year_saka,
        vikrama_from_saka(indian.year_saka),
        indian.masa,
        indian.paksa,
        indian.tithi_day,
        date.year(),
        date.month(),
        date.day(),
        result.weekday
    )
}

/// Render one List row
pub fn render_list_row(result: &ConversionResult) -> String {
    let indian = &result.indian;
    let date = result.gregorian;
    let month_name = format!("{}{}", indian.adhimasa, indian.masa);
    format!(
        "{:>4} {:>2} {:>2} {}|Saka {:>4}|V.S. {:>4} {:>17} {:>5} {:>2} {}",
        date.year(),
        date.month(),
        date.day(),
        result.weekday_abbrev(),
        indian.year_saka,
        indian.year_vikrama,
        month_name,
        indian.paksa,
        indian.tithi_day,
        indian.naksatra
    )
}

/// Run the List operation starting at `working_date`.
///
/// Unlike the other renderers this one has a side effect: it queries the
/// engine once per row and moves `working_date` forward one day between
/// rows, so after [`LIST_DAYS`] rows it points at the start date + 9 days.
pub fn run_list<E: CalendarEngine + ?Sized>(
    engine: &mut E,
    working_date: &mut NaiveDate,
) -> Result<Vec<String>, ReportError> {
    let mut rows = Vec::with_capacity(LIST_DAYS);
    for index in 0..LIST_DAYS {
        if index > 0 {
            *working_date = next_day(*working_date)?;
        }
        debug!(date = %working_date, "listing date");
        let result = engine.from_gregorian_date(*working_date)?;
        rows.push(render_list_row(&result));
    }
    Ok(rows)
}

/// The day after `date`
pub fn next_day(date: NaiveDate) -> Result<NaiveDate, ReportError> {
    date.succ_opt().ok_or(ReportError::DateOutOfRange { date })
}

/// Render the Verbose block for one date
pub fn render_verbose(
    result: &ConversionResult,
    settings: &Settings,
) -> Result<Vec<String>, ReportError> {
    let details = result.details.as_ref().ok_or(ReportError::MissingDetails {
        date: result.gregorian,
    })?;
    let indian = &result.indian;
    let date = result.gregorian;
    let samkranti = &details.samkranti;

    Ok(vec![
        format!(
            "  AD{:>5} {:>2} {:>3} {:>4}  | JD (at noon)={:>8} | Kali-ahargana={:>8} ",
            date.year(),
            date.month(),
            date.day(),
            result.weekday,
            details.julian_day,
            details.ahargana
        ),
        rule('='),
        format!("  Pancanga based on {}", settings.system.description()),
        format!(
            "  at latitude={:>3}, longitude={:>3}",
            settings.latitude, settings.longitude
        ),
        rule('-'),
        format!(
            " Indian date (luni-solar year and amanta month)  (*) local sunrise...{:>2}h {:>2}m",
            details.sunrise_hour, details.sunrise_minute
        ),
        String::new(),
        format!(
            " year(atita):Saka {:>4} |Vikrama {:>4} |Kali {:>4} | ayanamsa: {:>2}d {:>2}m",
            indian.year_saka,
            indian.year_vikrama,
            indian.year_kali,
            details.ayanamsa_degrees,
            details.ayanamsa_minutes
        ),
        format!(
            "             Jovian(North):{} |Jovian(South):{}",
            NOT_AVAILABLE, NOT_AVAILABLE
        ),
        " lunar month, paksa, and tithi(at sunrise): ".to_string(),
        format!("       {}{}", indian.adhimasa, indian.masa),
        format!(
            " {} {:>2} (fraction = 0.{})",
            indian.paksa,
            indian.tithi_day,
            tithi_fraction(details.ftithi)
        ),
        format!(
            " solar month and day: {} {} (samkranti: on {:>4} {:>2} {:>2} at {:>2}h {:>2}m)",
            details.saura_masa,
            details.saura_day,
            samkranti.year,
            samkranti.month,
            samkranti.day,
            samkranti.hour,
            samkranti.minute
        ),
        format!(
            " naksatra.... {}  /  karana...{}  /  yoga...{}",
            indian.naksatra, NOT_AVAILABLE, NOT_AVAILABLE
        ),
    ])
}

/// First three decimal digits of the fractional tithi, truncated
pub fn tithi_fraction(ftithi: f64) -> String {
    // Nudge so that values like 0.29 (stored as 0.28999...) keep their digits
    let thousandths = (ftithi.fract().abs() * 1000.0 + 1e-6).floor() as u32 % 1000;
    format!("{:03}", thousandths)
}
