// src/data/mod.rs

//! The `data` module is the value objects rendered by the `printer` module:
//! [`Token`]s, [`CompiledPattern`]s, [`Timestamp`]s, and [`LogEntry`]s.
//!
//! ## Definitions of data
//!
//! ### Token
//!
//! A `Token` is one compiled unit of a format pattern: either verbatim
//! literal text or one typed field placeholder (an hour, a fractional
//! second, a log message, …).
//!
//! ### Compiled Pattern
//!
//! A `CompiledPattern` is an ordered sequence of `Token`s produced once
//! from a format pattern string. It is immutable after compilation and is
//! replayed against many timestamps or log entries without re-parsing.
//!
//! ### Timestamp
//!
//! A `Timestamp` is an instant-in-time decomposed into plain integer
//! calendar and clock fields, down to the nanosecond-of-second. It is
//! already captured and already decomposed; nothing in this crate reads
//! the system clock.
//!
//! ### LogEntry
//!
//! A `LogEntry` is one log message awaiting rendering: a `Timestamp`, a
//! severity [`Level`], a thread name, a class name, and the message text.
//!
//! [`Token`]: crate::data::pattern::Token
//! [`CompiledPattern`]: crate::data::pattern::CompiledPattern
//! [`Timestamp`]: crate::data::timestamp::Timestamp
//! [`LogEntry`]: crate::data::entry::LogEntry
//! [`Level`]: crate::data::entry::Level

pub mod entry;
pub mod pattern;
pub mod timestamp;
