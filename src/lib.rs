// src/lib.rs

//! Library _plrlib_ renders structured log entries from user-supplied
//! format patterns.
//!
//! A format pattern is compiled once into a [`CompiledPattern`], an ordered
//! sequence of [`Token`]s, then replayed for many log entries. Timestamps
//! are rendered by a [`PreciseTimestampFormatter`] at up to nanosecond
//! precision; fractional seconds truncate, they never round.
//!
//! [`CompiledPattern`]: crate::data::pattern::CompiledPattern
//! [`Token`]: crate::data::pattern::Token
//! [`PreciseTimestampFormatter`]: crate::printer::timestamp::PreciseTimestampFormatter

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
#[cfg(test)]
pub mod tests;
