// src/tests/common.rs

//! Common testing helpers for _plrlib_ tests.

#![allow(non_upper_case_globals)]

use crate::data::timestamp::{ymdhmsn, Timestamp};
use crate::printer::timestamp::{Locale, PreciseTimestampFormatter};

/// the reference instant used across tests, 2016-02-01 (a Monday)
/// 12:30:55 exactly
pub const TS_20160201_123055_0: Timestamp = ymdhmsn(2016, 2, 1, 12, 30, 55, 0);
/// the reference instant at the last nanosecond of its second
pub const TS_20160201_123055_N9: Timestamp = ymdhmsn(2016, 2, 1, 12, 30, 55, 999_999_999);
/// one second after the reference instant
pub const TS_20160201_123056_0: Timestamp = ymdhmsn(2016, 2, 1, 12, 30, 56, 0);
/// the reference instant at one nanosecond past its second
pub const TS_20160201_123055_N1: Timestamp = ymdhmsn(2016, 2, 1, 12, 30, 55, 1);

/// build a `PreciseTimestampFormatter` with English names;
/// the passed pattern must be valid
pub fn formatter_en(pattern: &str) -> PreciseTimestampFormatter {
    PreciseTimestampFormatter::new(pattern, Locale::for_tag("en-US")).unwrap()
}

/// build a `PreciseTimestampFormatter` with German names;
/// the passed pattern must be valid
pub fn formatter_de(pattern: &str) -> PreciseTimestampFormatter {
    PreciseTimestampFormatter::new(pattern, Locale::for_tag("de-DE")).unwrap()
}
