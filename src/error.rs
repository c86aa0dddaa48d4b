//! Error type shared by every fallible operation in this crate.

use crate::chinese::Month;

/// Errors returned by almanac queries, conversions and formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The lunar year is not covered by the almanac table (1900..=2099).
    ///
    /// Conversions report `1899` for dates before 1900-01-31 and `2100` for
    /// dates after the last day of lunar year 2099.
    #[error("lunar year {year} is outside the supported range 1900..=2099")]
    OutOfRangeYear {
        /// The unsupported lunar year.
        year: i32,
    },

    /// A lunar day outside `1..=30` reached the day formatter.
    #[error("invalid lunar day: {day} (must be 1..=30)")]
    InvalidDay {
        /// The rejected day number.
        day: u32,
    },

    /// A lunar month number outside `1..=12`.
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// The lunar date does not exist in the almanac.
    #[error("lunar date {year}-{month:?}-{day} does not exist")]
    InvalidLunarDate {
        /// Lunar year of the rejected date.
        year: i32,
        /// Month of the rejected date, leap or common.
        month: Month,
        /// Day of the rejected date.
        day: u32,
    },
}
