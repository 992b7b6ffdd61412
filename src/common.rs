// src/common.rs
//
// common type aliases and numeric constants (avoids circular imports)

#![allow(non_camel_case_types)]

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// calendar and clock fields of a decomposed timestamp
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A _Year_ in a date
pub type Year = i32;
/// A _Month_ of a year, 1 to 12
pub type Month = u32;
/// A _Day_ of a month, 1 to 31
pub type Day = u32;
/// An _Hour_ of a day, 0 to 23
pub type Hour = u32;
/// A _Minute_ of an hour, 0 to 59
pub type Minute = u32;
/// A _Second_ of a minute, 0 to 59
pub type Second = u32;
/// A _Nanosecond_ of a second, 0 to 999999999
pub type NanosecondOfSecond = u32;
/// Nanoseconds elapsed since local midnight.
///
/// Wide enough for a full day of nanoseconds (86,400 × 10⁹ exceeds `u32`).
pub type NanosecondOfDay = u64;

/// Nanoseconds per second, 10⁹
pub const NANOSECONDS_PER_SECOND: NanosecondOfSecond = 1_000_000_000;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// format patterns
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A format pattern string, passed to
/// [`CompiledPattern::compile_datetime`] or
/// [`CompiledPattern::compile_entry`].
///
/// [`CompiledPattern::compile_datetime`]: crate::data::pattern::CompiledPattern#method.compile_datetime
/// [`CompiledPattern::compile_entry`]: crate::data::pattern::CompiledPattern#method.compile_entry
pub type Pattern_str = str;

/// Count of ASCII digits a numeric field renders, derived from the
/// field-letter run length in the format pattern.
pub type Width = usize;

/// Largest supported fractional-second width; the digits of one
/// nanosecond-of-second.
pub const FRACTIONAL_WIDTH_MAX: Width = 9;

/// Largest supported year field width.
pub const YEAR_WIDTH_MAX: Width = 9;

/// Digits of a conventionally rendered year, e.g. `"2016"`.
pub const YEAR_WIDTH_NATURAL: Width = 4;

/// Digits of a conventionally rendered month, day, hour, minute, or second,
/// e.g. `"02"`.
pub const CLOCK_WIDTH_NATURAL: Width = 2;
