// src/printer/entry.rs

//! Render whole [`LogEntry`]s against a compiled log-entry pattern.
//!
//! An [`EntryFormatter`] replays one flat token sequence per entry:
//! temporal tokens (spliced inline from a `{date:…}` placeholder) render
//! from the entry's [`Timestamp`] exactly as the
//! [`PreciseTimestampFormatter`] would, and the non-temporal tokens
//! substitute the entry's thread, class, level, and message fields.
//!
//! [`Timestamp`]: crate::data::timestamp::Timestamp
//! [`PreciseTimestampFormatter`]: crate::printer::timestamp::PreciseTimestampFormatter

use crate::common::Pattern_str;
use crate::data::entry::LogEntry;
use crate::data::pattern::{
    CompiledPattern,
    PatternError,
    Token,
};
use crate::printer::timestamp::{
    render_temporal_token,
    Locale,
};

/// Renders [`LogEntry`]s against one log-entry pattern compiled at
/// construction. Immutable afterward; safely shared by concurrent
/// callers.
#[derive(Clone, Debug)]
pub struct EntryFormatter {
    pattern: CompiledPattern,
    locale: Locale,
}

impl EntryFormatter {
    /// Compile `pattern` under the log-entry placeholder grammar. The
    /// only fallible step; `format` never fails afterward.
    pub fn new(
        pattern: &Pattern_str,
        locale: Locale,
    ) -> Result<EntryFormatter, PatternError> {
        let compiled = CompiledPattern::compile_entry(pattern)?;

        Ok(EntryFormatter {
            pattern: compiled,
            locale,
        })
    }

    /// The compiled token sequence.
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Render one log entry. Total and deterministic; an empty pattern
    /// renders an empty string.
    pub fn format(
        &self,
        entry: &LogEntry,
    ) -> String {
        let mut out = String::with_capacity(entry.message.len() + 64);
        for token in self.pattern.tokens() {
            match token {
                Token::Thread => out.push_str(&entry.thread),
                Token::Class => out.push_str(&entry.class),
                Token::Level => out.push_str(entry.level.as_str()),
                Token::Message => out.push_str(&entry.message),
                _ => render_temporal_token(&mut out, token, &entry.timestamp, &self.locale),
            }
        }

        out
    }
}
