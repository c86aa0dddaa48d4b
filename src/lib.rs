//! Utilities for converting Gregorian dates into the Chinese lunar calendar.
//!
//! Conversion is driven by a packed almanac table covering lunar years 1900
//! through 2099 (see [`chinese::almanac`]). Each converted date can be
//! rendered as a full lunar date string, or as a single day label picked from
//! lunar festivals, solar terms, solar festivals and the plain lunar day name,
//! in that order of priority.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese lunar calendar:
//!
//! ```
//! use nongli::Date;
//! use nongli::chinese::{LunarDate, Month::*};
//!
//! let date = Date::from_gregorian(2024, 2, 9).unwrap();
//! let lunar = LunarDate::from_date(date).unwrap();
//!
//! assert_eq!((2023, Common(12), 30), (lunar.year(), lunar.lunar_month(), lunar.day()));
//! assert_eq!("农历 2023年 腊月三十", lunar.full_label().unwrap());
//! assert_eq!("除夕", lunar.day_label().unwrap());
//! ```
//!
//! Solar terms are computed with an approximate formula that is only valid
//! from 2000 onwards and may be off by a day.

pub mod chinese;
pub mod date;
mod error;

pub use date::{Date, YearType};
pub use error::Error;
