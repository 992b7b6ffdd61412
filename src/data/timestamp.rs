// src/data/timestamp.rs

//! The decomposed [`Timestamp`] value object consumed by the
//! [`PreciseTimestampFormatter`].
//!
//! A `Timestamp` is an already-captured instant decomposed into plain
//! integer calendar and clock fields. The decomposed form keeps fractional
//! rendering in exact integer arithmetic; there is no floating-point and
//! no opaque instant anywhere in the rendering path. Nothing here reads
//! the system clock; callers that want "now" capture it themselves (e.g.
//! chrono [`Local::now`]) and convert with [`Timestamp::from_datetime`].
//!
//! [`PreciseTimestampFormatter`]: crate::printer::timestamp::PreciseTimestampFormatter
//! [`Local::now`]: https://docs.rs/chrono/0.4.40/chrono/struct.Local.html#method.now

use crate::common::{
    Day,
    Hour,
    Minute,
    Month,
    NanosecondOfDay,
    NanosecondOfSecond,
    Second,
    Year,
    NANOSECONDS_PER_SECOND,
};

use ::chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};
use ::more_asserts::debug_assert_lt;

/// An instant-in-time decomposed into plain integer calendar and clock
/// fields, down to the nanosecond-of-second.
///
/// Invariant: `nanosecond` is within `[0, 10⁹)`. The invariant is a caller
/// contract; rendering assumes it and asserts it only in debug builds.
/// No timezone is carried; whatever offset the caller decomposed under is
/// the offset the rendered text reflects.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Timestamp {
    pub year: Year,
    pub month: Month,
    pub day: Day,
    pub hour: Hour,
    pub minute: Minute,
    pub second: Second,
    pub nanosecond: NanosecondOfSecond,
}

/// Shorthand [`Timestamp`] constructor in field order
/// year, month, day, hour, minute, second, nanosecond.
pub const fn ymdhmsn(
    year: Year,
    month: Month,
    day: Day,
    hour: Hour,
    minute: Minute,
    second: Second,
    nanosecond: NanosecondOfSecond,
) -> Timestamp {
    Timestamp {
        year,
        month,
        day,
        hour,
        minute,
        second,
        nanosecond,
    }
}

impl Timestamp {
    /// Nanoseconds elapsed since local midnight,
    /// `((hour × 60 + minute) × 60 + second) × 10⁹ + nanosecond`.
    ///
    /// Exact `u64` arithmetic; the maximum value `86399999999999` for
    /// `23:59:59.999999999` is far below `u64::MAX`.
    pub fn nanosecond_of_day(&self) -> NanosecondOfDay {
        debug_assert_lt!(self.nanosecond, NANOSECONDS_PER_SECOND);
        let second_of_day: NanosecondOfDay =
            ((self.hour as NanosecondOfDay * 60) + self.minute as NanosecondOfDay) * 60
                + self.second as NanosecondOfDay;

        second_of_day * NANOSECONDS_PER_SECOND as NanosecondOfDay
            + self.nanosecond as NanosecondOfDay
    }

    /// Index of this date's weekday into the locale name tables;
    /// 0 is Sunday, 6 is Saturday.
    ///
    /// The only calendar arithmetic in this crate, delegated to chrono.
    /// A calendar-impossible date (a caller contract violation) falls back
    /// to 0 rather than failing; rendering is total.
    pub fn weekday_index(&self) -> usize {
        match NaiveDate::from_ymd_opt(self.year, self.month, self.day) {
            Some(date) => date.weekday().num_days_from_sunday() as usize,
            None => 0,
        }
    }

    /// Decompose a chrono [`DateTime`] captured by the caller.
    ///
    /// chrono represents a leap second as `nanosecond() ≥ 10⁹`; that is
    /// clamped to `999999999` to hold the nanosecond invariant.
    ///
    /// [`DateTime`]: https://docs.rs/chrono/0.4.40/chrono/struct.DateTime.html
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Timestamp {
        Timestamp {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
            nanosecond: datetime
                .nanosecond()
                .min(NANOSECONDS_PER_SECOND - 1),
        }
    }
}
