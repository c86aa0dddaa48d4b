//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序依預製的農曆曆表推算日期，見 [`almanac`]；節日、節氣標籤見 [`label`]。

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::Error;
use crate::date::Date;

pub mod almanac;
pub mod fmt;
pub mod label;

pub use label::{Label, LabelConfig};

/// 農曆 1900 年正月初一（公元 1900-01-31）的儒略日數，曆表自此日起算。
const EPOCH_JDN: u32 = 2415051;

/// 農曆日期，僅支持曆表覆蓋的 1900 至 2099 年。
///
/// 除年月日外亦保存所對應的公曆日期，以便依公曆查找節氣與節日。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::{LunarDate, Month::*};
///
/// let date = Date::from_gregorian(2023, 6, 22).unwrap();
/// let lunar = LunarDate::from_date(date).unwrap();
///
/// assert_eq!((2023, Common(5), 5), (lunar.year(), lunar.lunar_month(), lunar.day()));
/// assert_eq!("端午", lunar.day_label().unwrap());
/// assert_eq!("农历 2023年 五月初五", lunar.full_label().unwrap());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct LunarDate {
    year: i32,
    month: Month,
    day: u32,
    date: Date,
}

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，閏月冠以「闰」，十一、十二月稱「冬月」「腊月」。
    ///
    /// 月序號不在 `1..=12` 間則回報 [`Error::InvalidMonth`]。
    pub fn name(&self) -> Result<String, Error> {
        fmt::month(*self)
    }
}

impl LunarDate {
    /// 將公曆日期轉為農曆。
    ///
    /// 自 1900 年起逐年扣除全年日數以定年，再於該年各月（閏月排在同序號平月之後）逐月扣除以定月，餘數即日。
    ///
    /// 早於 1900-01-31 回報 `OutOfRangeYear { year: 1899 }`，晚於 2099 年末日回報
    /// `OutOfRangeYear { year: 2100 }`。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::{Date, Error};
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// let date = Date::from_gregorian(2023, 3, 22).unwrap();
    /// let lunar = LunarDate::from_date(date).unwrap();
    /// assert_eq!(Leap(2), lunar.lunar_month());
    ///
    /// let date = Date::from_gregorian(1899, 12, 31).unwrap();
    /// assert_eq!(Err(Error::OutOfRangeYear { year: 1899 }), LunarDate::from_date(date));
    /// ```
    pub fn from_date(date: Date) -> Result<Self, Error> {
        let mut offset = date
            .jdn()
            .checked_sub(EPOCH_JDN)
            .ok_or(Error::OutOfRangeYear {
                year: almanac::FIRST_YEAR - 1,
            })?;

        let mut year = almanac::FIRST_YEAR;
        let entry = loop {
            let entry = almanac::Year::get(year)?;
            let length = entry.length();
            if offset < length {
                break entry;
            }
            offset -= length;
            year += 1;
        };
        trace!(year, offset, "resolved lunar year");

        for (month, length) in entry.months() {
            if offset < length {
                let day = offset + 1;
                trace!(?month, day, "resolved lunar month");
                return Ok(Self {
                    year,
                    month,
                    day,
                    date,
                });
            }
            offset -= length;
        }
        unreachable!("months of lunar year {year} do not sum to its length");
    }

    /// 以農曆年月日構造日期，並推算其公曆日期。
    ///
    /// 若該年不在曆表範圍內，回報 [`Error::OutOfRangeYear`]；若該年無此月（如無此閏月）或該月無此日，回報
    /// [`Error::InvalidLunarDate`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{LunarDate, Month::*};
    ///
    /// let lunar = LunarDate::new(2024, Common(1), 1).unwrap();
    /// assert_eq!("2024-02-10", lunar.date().iso_gregorian());
    ///
    /// assert!(LunarDate::new(2024, Leap(2), 1).is_err());
    /// ```
    pub fn new(year: i32, month: Month, day: u32) -> Result<Self, Error> {
        let entry = almanac::Year::get(year)?;
        let invalid = || Error::InvalidLunarDate { year, month, day };
        let length = entry.length_of(month).ok_or_else(invalid)?;
        if !(1..=length).contains(&day) {
            return Err(invalid());
        }

        let mut offset = 0;
        for y in almanac::FIRST_YEAR..year {
            offset += almanac::year_length(y)?;
        }
        offset += entry
            .months()
            .take_while(|&(m, _)| m != month)
            .map(|(_, length)| length)
            .sum::<u32>();
        offset += day - 1;
        trace!(year, ?month, day, offset, "resolved solar date");

        Ok(Self {
            year,
            month,
            day,
            date: Date::from_jdn(EPOCH_JDN + offset),
        })
    }

    /// 農曆年
    pub fn year(&self) -> i32 {
        self.year
    }
    /// 月序號（`1..=12`），無論平閏
    pub fn month(&self) -> u32 {
        self.month.num()
    }
    /// 月名，含平閏信息
    pub fn lunar_month(&self) -> Month {
        self.month
    }
    /// 日（`1..=30`）
    pub fn day(&self) -> u32 {
        self.day
    }
    /// 是否在閏月
    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }
    /// 對應的公曆日期
    pub fn date(&self) -> Date {
        self.date
    }

    /// 本月日數，閏月取閏月日數。
    pub fn month_length(&self) -> u32 {
        almanac::Year::get(self.year)
            .ok()
            .and_then(|entry| entry.length_of(self.month))
            .unwrap_or_else(|| unreachable!("{:?} was built from the almanac", self))
    }

    /// 完整農曆日期文本，格式為「农历 年 月日」，不標出閏月。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::Date;
    /// use nongli::chinese::LunarDate;
    ///
    /// let date = Date::from_gregorian(2023, 3, 22).unwrap();
    /// let lunar = LunarDate::from_date(date).unwrap();
    /// assert_eq!("农历 2023年 二月初一", lunar.full_label().unwrap());
    /// ```
    pub fn full_label(&self) -> Result<String, Error> {
        Ok(format!(
            "农历 {}年 {}{}",
            self.year,
            fmt::month(Month::Common(self.month.num()))?,
            fmt::day(self.day)?
        ))
    }

    /// 依預設設置取得當日標籤文本，見 [`LunarDate::label_with`]。
    pub fn day_label(&self) -> Result<String, Error> {
        self.label_with(&LabelConfig::default())
            .map(|label| label.to_string())
    }

    /// 取得當日標籤，依序為農曆節日（含除夕）、節氣、公曆節日，皆無則為農曆日名。
    ///
    /// 被 `config` 關閉的類別略過不查。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::Date;
    /// use nongli::chinese::{Label, LabelConfig, LunarDate};
    ///
    /// let date = Date::from_gregorian(2020, 10, 1).unwrap();
    /// let lunar = LunarDate::from_date(date).unwrap();
    /// assert_eq!(Ok(Label::LunarFestival("中秋")), lunar.label_with(&LabelConfig::default()));
    ///
    /// let config = LabelConfig {
    ///     lunar_festivals: false,
    ///     ..LabelConfig::default()
    /// };
    /// assert_eq!(Ok(Label::SolarFestival("国庆节")), lunar.label_with(&config));
    /// ```
    pub fn label_with(&self, config: &LabelConfig) -> Result<Label, Error> {
        label::resolve(self, config)
    }
}

/// 取得所給農曆年的干支序號，`1..=60` 對應甲子至癸亥。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{fmt, sexagenary_for_year};
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// assert_eq!("癸卯", fmt::sexagenary(sexagenary_for_year(2023)));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}
