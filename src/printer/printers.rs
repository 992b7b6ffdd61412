// src/printer/printers.rs

//! Specialized printer struct [`PrinterLogEntry`] for writing rendered
//! [`LogEntry`]s to a terminal, one color per severity level.
//!
//! The only I/O in the crate; the formatters it drives are pure.
//!
//! [`LogEntry`]: crate::data::entry::LogEntry

use crate::data::entry::{Level, LogEntry};
use crate::printer::entry::EntryFormatter;

use std::io::{Result, Write};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for printing [`Level::Trace`] entries.
///
/// Chosen for a dark background console.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_TRACE: Color = Color::Cyan;
/// [`Color`] for printing [`Level::Debug`] entries.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_DEBUG: Color = Color::White;
/// [`Color`] for printing [`Level::Info`] entries.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_INFO: Color = Color::Green;
/// [`Color`] for printing [`Level::Warning`] entries.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_WARNING: Color = Color::Yellow;
/// [`Color`] for printing [`Level::Error`] entries.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// The [`Color`] a [`Level`] prints under.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const fn color_for_level(level: Level) -> Color {
    match level {
        Level::Trace => COLOR_TRACE,
        Level::Debug => COLOR_DEBUG,
        Level::Info => COLOR_INFO,
        Level::Warning => COLOR_WARNING,
        Level::Error => COLOR_ERROR,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PrinterLogEntry
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Renders [`LogEntry`]s with an [`EntryFormatter`] and writes them to
/// `stdout`, colored by severity level.
pub struct PrinterLogEntry {
    stream: StandardStream,
    formatter: EntryFormatter,
    color_choice: ColorChoice,
}

impl PrinterLogEntry {
    pub fn new(
        formatter: EntryFormatter,
        color_choice: ColorChoice,
    ) -> PrinterLogEntry {
        PrinterLogEntry {
            stream: StandardStream::stdout(color_choice),
            formatter,
            color_choice,
        }
    }

    /// Render `entry` and write it with a trailing newline, colored per
    /// [`color_for_level`] unless colors are disabled.
    pub fn print_entry(
        &mut self,
        entry: &LogEntry,
    ) -> Result<()> {
        let rendered: String = self.formatter.format(entry);
        if matches!(self.color_choice, ColorChoice::Never) {
            writeln!(self.stream, "{}", rendered)?;
            return self.stream.flush();
        }
        self.stream
            .set_color(ColorSpec::new().set_fg(Some(color_for_level(entry.level))))?;
        write!(self.stream, "{}", rendered)?;
        self.stream.reset()?;
        writeln!(self.stream)?;

        self.stream.flush()
    }
}
