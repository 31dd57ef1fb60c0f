//! Display formatting for CLI output
//!
//! Renders session effects, the settings block and the banners shown
//! before some questions. Everything is written to the given writer so the
//! session loop can be tested against a buffer.

use std::io::{self, Write};

use chrono::NaiveDate;
use console::style;
use pancanga_core::report::rule;
use pancanga_core::{Coordinate, Effect, Mode, Question, Report, Settings};

use crate::banner;

pub const RETURN_HINT: &str = "Select (or hit) 'Return' to go to next date...";

pub fn welcome(out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "\n{}{}",
        style("Welcome to pancanga!").green().bold(),
        style("(rust version)").dim()
    )?;
    writeln!(
        out,
        "{}",
        style("                 [Based on the Perl Version by M. Yano and M.Fushimi]").blue()
    )?;
    writeln!(out, "\n{}", style(banner::CREDITS).dim())
}

pub fn settings(out: &mut dyn Write, settings: &Settings) -> io::Result<()> {
    writeln!(out, "\n{}", style("Settings:").blue().bold())?;
    writeln!(out, "\nLocal latitude is set to {}", style(settings.latitude).red())?;
    writeln!(out, "Local longitude is set to {}", style(settings.longitude).red())?;
    writeln!(out, "System in use: {}\n", style(settings.system).red())
}

/// Banner that belongs in front of `question`, if any
pub fn before_question(out: &mut dyn Write, question: &Question) -> io::Result<()> {
    let banner = match question {
        Question::Coordinate(Coordinate::Latitude) => banner::LATITUDES,
        Question::Coordinate(Coordinate::Longitude) => banner::LONGITUDES,
        Question::TryEra => banner::MASA_TABLE,
        _ => return Ok(()),
    };
    writeln!(out, "{}", style(banner).green())
}

pub fn effect(out: &mut dyn Write, effect: &Effect) -> io::Result<()> {
    match effect {
        Effect::None => Ok(()),
        Effect::CoordinateChanged { coordinate, value } => writeln!(
            out,
            "\n\t{coordinate} has been changed to {}\n",
            style(value).red().bold()
        ),
        Effect::SystemChanged(system) => writeln!(
            out,
            "\n\tSystem has been changed to '{}'\n",
            style(system).red().bold()
        ),
        Effect::SettingsShown(current) => settings(out, current),
        Effect::Report(report) => self::report(out, report),
        Effect::Farewell => writeln!(out, "{}", style("\nGood Bye!\n").green()),
    }
}

fn report(out: &mut dyn Write, report: &Report) -> io::Result<()> {
    match report {
        Report::Try { line } => {
            writeln!(out, "{}", rule('='))?;
            writeln!(out, "{line}")?;
            writeln!(out, "{}", rule('='))
        }
        Report::List { start, rows } => {
            header(out, Mode::List, *start)?;
            for row in rows {
                writeln!(out, "{row}")?;
                writeln!(out, "{}", rule('='))?;
            }
            hint(out)
        }
        Report::Verbose { date, lines } => {
            header(out, Mode::Verbose, *date)?;
            for line in lines {
                writeln!(out, "{line}")?;
            }
            hint(out)
        }
    }
}

fn header(out: &mut dyn Write, mode: Mode, date: NaiveDate) -> io::Result<()> {
    writeln!(
        out,
        "{}{}{}{}\n",
        style("Going to run ").green(),
        style(mode).red(),
        style(" for the date: ").green(),
        style(date.format("%a %b %d %Y")).red()
    )
}

fn hint(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n{}", style(RETURN_HINT).dim())
}
