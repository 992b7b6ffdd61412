// src/bin/plr.rs

//! Driver program _plr_ drives the [_plrlib_].
//!
//! Processes user-passed command-line arguments, compiles the passed
//! format pattern once, then renders log entries against it:
//! message arguments are stamped with the current local time (captured
//! here; the library never reads the clock) and printed colored by
//! severity level. Without messages, a fixed set of demonstration entries
//! is printed instead.
//!
//! With `--datetime` the pattern is compiled under the date/time grammar:
//! `--validate` candidates are checked structurally against it, otherwise
//! the current local time is rendered once.
//!
//! `plr.rs` is the only file in this crate that prints to STDOUT.
//!
//! [_plrlib_]: plrlib

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::anyhow::Context;
use ::chrono::Local;
use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
use ::plrlib::common::Pattern_str;
use ::plrlib::data::entry::{Level, LogEntry};
use ::plrlib::data::pattern::ENTRY_PATTERN_DEFAULT;
use ::plrlib::data::timestamp::{ymdhmsn, Timestamp};
use ::plrlib::printer::entry::EntryFormatter;
use ::plrlib::printer::printers::{ColorChoice, PrinterLogEntry};
use ::plrlib::printer::timestamp::{Locale, PreciseTimestampFormatter};

/// CLI enum for the `--color` option.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum CLI_Color {
    Always,
    Auto,
    Never,
}

impl From<CLI_Color> for ColorChoice {
    fn from(color: CLI_Color) -> ColorChoice {
        match color {
            CLI_Color::Always => ColorChoice::Always,
            CLI_Color::Auto => ColorChoice::Auto,
            CLI_Color::Never => ColorChoice::Never,
        }
    }
}

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "plr",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(precise log render)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"), "\n",
    ),
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Message(s) to render as log entries stamped with the current local
    /// time. When omitted (and no --datetime), a fixed set of
    /// demonstration entries is rendered instead.
    messages: Vec<String>,

    /// Log-entry format pattern. Placeholders: {date}, {date:PATTERN},
    /// {thread}, {class}, {level}, {message}. "{{" and "}}" are literal
    /// braces.
    #[clap(
        short = 'f',
        long = "format",
        verbatim_doc_comment,
        default_value = ENTRY_PATTERN_DEFAULT,
    )]
    format: String,

    /// Date/time format pattern, e.g. "HH:mm:ss.SSSSSSSSS".
    /// Field letters: y M d E H m s S n N; single quotes escape literal
    /// text. With --validate, candidates are checked against this
    /// pattern; otherwise the current local time is rendered once.
    #[clap(
        short = 'd',
        long = "datetime",
        verbatim_doc_comment,
    )]
    datetime: Option<String>,

    /// Candidate timestamp string(s) to check structurally against the
    /// --datetime pattern. Prints one verdict per candidate; exits
    /// non-zero if any candidate is invalid.
    #[clap(
        short = 'V',
        long,
        requires = "datetime",
        verbatim_doc_comment,
    )]
    validate: Vec<String>,

    /// Locale identifier tag selecting month and weekday names for
    /// textual fields, e.g. "en-US", "de_AT", "C".
    /// Unknown tags fall back to English.
    #[clap(
        short = 'l',
        long,
        verbatim_doc_comment,
        default_value = "en",
    )]
    locale: String,

    /// Terminal color choice.
    #[clap(
        long,
        value_enum,
        default_value_t = CLI_Color::Auto,
    )]
    color: CLI_Color,
}

/// Demonstration entries rendered when no messages are passed.
fn demo_entries() -> Vec<LogEntry> {
    let timestamp: Timestamp = ymdhmsn(2016, 2, 1, 12, 30, 55, 999_999_999);
    vec![
        LogEntry::new(timestamp, Level::Trace, "main", "plr.demo", "entering demo"),
        LogEntry::new(timestamp, Level::Debug, "main", "plr.demo", "pattern compiled"),
        LogEntry::new(timestamp, Level::Info, "worker-1", "plr.demo", "42 entries rendered"),
        LogEntry::new(timestamp, Level::Warning, "worker-1", "plr.demo", "clock skew detected"),
        LogEntry::new(timestamp, Level::Error, "main", "plr.demo", "demo complete"),
    ]
}

/// Check `--validate` candidates against the `--datetime` pattern, or
/// render the current local time once when no candidates were passed.
fn process_datetime(
    pattern: &Pattern_str,
    candidates: &[String],
    locale: Locale,
) -> anyhow::Result<bool> {
    let formatter = PreciseTimestampFormatter::new(pattern, locale)
        .with_context(|| format!("failed to compile date/time pattern {:?}", pattern))?;
    if candidates.is_empty() {
        let now = Timestamp::from_datetime(&Local::now());
        println!("{}", formatter.format(&now));
        return Ok(true);
    }
    let mut all_valid = true;
    for candidate in candidates.iter() {
        let valid: bool = formatter.is_valid(candidate);
        all_valid &= valid;
        match valid {
            true => println!("valid   {:?}", candidate),
            false => println!("invalid {:?}", candidate),
        }
    }

    Ok(all_valid)
}

/// Render entries against the `--format` pattern and print them colored
/// by severity level.
fn process_entries(
    pattern: &Pattern_str,
    messages: &[String],
    locale: Locale,
    color_choice: ColorChoice,
) -> anyhow::Result<()> {
    let formatter = EntryFormatter::new(pattern, locale)
        .with_context(|| format!("failed to compile log-entry pattern {:?}", pattern))?;
    let mut printer = PrinterLogEntry::new(formatter, color_choice);
    let entries: Vec<LogEntry> = match messages.is_empty() {
        true => demo_entries(),
        false => {
            let now = Timestamp::from_datetime(&Local::now());
            messages
                .iter()
                .map(|message| LogEntry::new(now, Level::Info, "main", "plr", message))
                .collect()
        }
    };
    for entry in entries.iter() {
        printer
            .print_entry(entry)
            .context("failed to print log entry")?;
    }

    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let args = CLI_Args::parse();
    let locale = Locale::for_tag(&args.locale);
    if let Some(datetime_pattern) = &args.datetime {
        let all_valid = process_datetime(datetime_pattern, &args.validate, locale)?;
        return Ok(match all_valid {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        });
    }
    process_entries(&args.format, &args.messages, locale, args.color.into())?;

    Ok(ExitCode::SUCCESS)
}
