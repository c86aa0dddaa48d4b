//! Calendar-independant date.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A calendar-independant date, used as the solar side of every conversion.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Date {
    jdn: u32,
}

/// Julian day number of 0000-12-31 (proleptic Gregorian), i.e. the day before
/// chrono's day 1 of the common era.
#[cfg(feature = "chrono")]
const JDN_CE_OFFSET: i64 = 1_721_425;

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if the month or day does not exist in that year (e.g.
    /// February 30), or if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_none());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=days_in_month(year, month)).contains(&day) {
            return None;
        }
        let (y, m, d) = (year as i64, month as i64, day as i64);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }

    /// Creates a `Date` from a [`chrono::NaiveDate`].
    ///
    /// Returns `None` for dates before the start of the Julian period.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nongli::Date;
    ///
    /// let naive = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, Date::from_naive(naive).unwrap().jdn());
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_naive(date: chrono::NaiveDate) -> Option<Self> {
        use chrono::Datelike;
        u32::try_from(date.num_days_from_ce() as i64 + JDN_CE_OFFSET)
            .map(Self::from_jdn)
            .ok()
    }
    /// Converts the date into a [`chrono::NaiveDate`].
    ///
    /// Returns `None` if the date is beyond what chrono can represent.
    #[cfg(feature = "chrono")]
    pub fn to_naive(&self) -> Option<chrono::NaiveDate> {
        let days = i32::try_from(self.jdn as i64 - JDN_CE_OFFSET).ok()?;
        chrono::NaiveDate::from_num_days_from_ce_opt(days)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        let jdn = self.jdn.checked_add_signed(rhs);
        Date::from_jdn(jdn.expect("jdn out of u32 range"))
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        i32::try_from(self.jdn as i64 - rhs.jdn as i64)
            .expect("difference >= 2**31 days not supported")
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in a Gregorian month, `0` for months outside `1..=12`.
fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
        let date = Date::from_gregorian(1900, 1, 31).unwrap();
        assert_eq!(2415051, date.jdn());
    }

    #[test]
    fn rejects_nonexistent_dates() {
        for (y, m, d) in [
            (2023, 2, 29),
            (1900, 2, 29),
            (2024, 4, 31),
            (2024, 0, 1),
            (2024, 13, 1),
            (2024, 1, 0),
        ] {
            assert_eq!(None, Date::from_gregorian(y, m, d), "{y:04}-{m:02}-{d:02}");
        }
        assert!(Date::from_gregorian(2024, 2, 29).is_some());
        assert!(Date::from_gregorian(2000, 2, 29).is_some());
    }

    #[test]
    fn extreme_years_are_none() {
        assert_eq!(None, Date::from_gregorian(2_000_000, 1, 1));
        assert_eq!(None, Date::from_gregorian(i32::MAX, 12, 31));
        assert_eq!(None, Date::from_gregorian(i32::MIN, 1, 1));
        assert_eq!(None, Date::from_gregorian(-4714, 11, 23));
        assert_eq!(Some(0), Date::from_gregorian(-4713, 11, 24).map(|d| d.jdn()));
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2024, 2, 28).unwrap();
        assert_eq!("2024-02-29", (date + 1).iso_gregorian());
        assert_eq!("2024-03-01", (date + 2).iso_gregorian());
        assert_eq!("2023-12-31", (date + -59).iso_gregorian());
        let next_year = Date::from_gregorian(2025, 1, 1).unwrap();
        assert_eq!(366, next_year - Date::from_gregorian(2024, 1, 1).unwrap());
        assert_eq!(-366, Date::from_gregorian(2024, 1, 1).unwrap() - next_year);
    }

    #[test]
    fn difference_of_distant_dates() {
        let far = Date::from_jdn(i32::MAX as u32 + 10);
        assert_eq!(10, far - Date::from_jdn(i32::MAX as u32));
        assert_eq!(-5, Date::from_jdn(0) - Date::from_jdn(5));
    }

    #[test]
    #[should_panic]
    fn difference_beyond_i32_panics() {
        let _ = Date::from_jdn(u32::MAX) - Date::from_jdn(0);
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_interop() {
        use chrono::NaiveDate;
        for (y, m, d) in [(1900, 1, 31), (2000, 1, 1), (2024, 2, 29), (2099, 12, 31)] {
            let naive = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let date = Date::from_naive(naive).unwrap();
            assert_eq!(
                Date::from_gregorian(y, m as i32, d as i32),
                Some(date),
                "{naive}"
            );
            assert_eq!(Some(naive), date.to_naive());
        }
    }
}

#[cfg(test)]
mod tests_priv {
    use super::*;

    #[test]
    fn priv_days_in_month() {
        assert_eq!(31, days_in_month(2023, 1));
        assert_eq!(28, days_in_month(2023, 2));
        assert_eq!(29, days_in_month(2024, 2));
        assert_eq!(28, days_in_month(2100, 2));
        assert_eq!(30, days_in_month(2023, 11));
        assert_eq!(0, days_in_month(2023, 13));
    }
}
