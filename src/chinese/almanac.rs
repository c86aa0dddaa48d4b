//! 農曆曆表數據
//!
//! 每年一項，以一個整數壓縮保存，覆蓋農曆 1900 至 2099 年：
//!
//! - 第 0..=3 位：閏月序號，0 表示該年無閏月
//! - 第 4..=15 位：正月至十二月的大小，正月在第 15 位，十二月在第 4 位，置位為大月（30 日），否則為小月（29 日）
//! - 第 16 位：閏月大小，置位為大月
//!
//! # 用例
//!
//! ```
//! use nongli::chinese::almanac;
//!
//! assert_eq!(Ok(2), almanac::leap_month(2023));
//! assert_eq!(Ok(384), almanac::year_length(2023));
//! ```

use super::Month;
use crate::Error;

/// 曆表首年
pub const FIRST_YEAR: i32 = 1900;
/// 曆表末年
pub const LAST_YEAR: i32 = 2099;

#[rustfmt::skip]
const TABLE: [u32; 200] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
];

/// 解碼後的一年曆表數據
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Year {
    /// 農曆年
    pub year: i32,
    /// 閏月序號，0 為無閏月
    pub leap_month: u32,
    /// 閏月是否為大月，無閏月時無意義
    pub leap_month_long: bool,
    /// 正月至十二月是否為大月
    pub month_long: [bool; 12],
}

impl Year {
    /// 取得農曆 `year` 年的曆表。
    ///
    /// 不在 1900..=2099 內則回報 [`Error::OutOfRangeYear`]。
    pub fn get(year: i32) -> Result<Self, Error> {
        year.checked_sub(FIRST_YEAR)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| TABLE.get(i))
            .map(|&bits| Self::decode(year, bits))
            .ok_or(Error::OutOfRangeYear { year })
    }

    fn decode(year: i32, bits: u32) -> Self {
        let mut month_long = [false; 12];
        for (m, long) in (1..=12).zip(&mut month_long) {
            *long = bits & (0x10000 >> m) != 0;
        }
        Self {
            year,
            leap_month: bits & 0xf,
            leap_month_long: bits & 0x10000 != 0,
            month_long,
        }
    }

    /// 全年日數，含閏月。
    pub fn length(&self) -> u32 {
        348 + self.month_long.iter().filter(|&&long| long).count() as u32
            + self.leap_month_length()
    }

    /// 閏月日數，無閏月為 0。
    pub fn leap_month_length(&self) -> u32 {
        match (self.leap_month, self.leap_month_long) {
            (0, _) => 0,
            (_, true) => 30,
            (_, false) => 29,
        }
    }

    /// 平月 `month` 的日數。
    pub fn month_length(&self, month: u32) -> Result<u32, Error> {
        match month {
            1..=12 => Ok(self.common_month_length(month)),
            _ => Err(Error::InvalidMonth { month }),
        }
    }

    /// 月份 `month` 的日數，平閏皆可；該年無此閏月則返回 `None`。
    pub fn length_of(&self, month: Month) -> Option<u32> {
        match month {
            Month::Common(m @ 1..=12) => Some(self.common_month_length(m)),
            Month::Leap(m) if m != 0 && m == self.leap_month => Some(self.leap_month_length()),
            _ => None,
        }
    }

    fn common_month_length(&self, month: u32) -> u32 {
        if self.month_long[month as usize - 1] {
            30
        } else {
            29
        }
    }

    /// 依序列出全年各月及其日數，閏月緊接在同序號的平月之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::chinese::{almanac::Year, Month::*};
    ///
    /// let months: Vec<_> = Year::get(2023).unwrap().months().take(4).collect();
    /// assert_eq!(vec![(Common(1), 29), (Common(2), 30), (Leap(2), 29), (Common(3), 29)], months);
    /// ```
    pub fn months(self) -> impl Iterator<Item = (Month, u32)> {
        (1..=12).flat_map(move |m| {
            let leap = (m == self.leap_month).then(|| (Month::Leap(m), self.leap_month_length()));
            std::iter::once((Month::Common(m), self.common_month_length(m))).chain(leap)
        })
    }
}

/// 農曆 `year` 年全年日數。
pub fn year_length(year: i32) -> Result<u32, Error> {
    Year::get(year).map(|y| y.length())
}

/// 農曆 `year` 年閏月序號，0 為無閏月。
pub fn leap_month(year: i32) -> Result<u32, Error> {
    Year::get(year).map(|y| y.leap_month)
}

/// 農曆 `year` 年閏月日數，無閏月為 0。
pub fn leap_month_length(year: i32) -> Result<u32, Error> {
    Year::get(year).map(|y| y.leap_month_length())
}

/// 農曆 `year` 年平月 `month` 的日數。
pub fn month_length(year: i32, month: u32) -> Result<u32, Error> {
    Year::get(year)?.month_length(month)
}

/// 農曆 `year` 年各月及其日數，見 [`Year::months`]。
pub fn months(year: i32) -> Result<impl Iterator<Item = (Month, u32)>, Error> {
    Year::get(year).map(Year::months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Month::*;

    #[test]
    fn decode() {
        let year = Year::get(2023).unwrap();
        assert_eq!(2, year.leap_month);
        assert!(!year.leap_month_long);
        let lengths: [u32; 12] = std::array::from_fn(|i| year.month_length(i as u32 + 1).unwrap());
        assert_eq!([29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30], lengths);
    }

    #[test]
    fn lengths() {
        for (year, length, leap, leap_length) in [
            (1900, 384, 8, 29),
            (2023, 384, 2, 29),
            (2024, 354, 0, 0),
            (2033, 384, 11, 29),
            (2099, 384, 2, 29),
        ] {
            assert_eq!(Ok(length), year_length(year), "{year}");
            assert_eq!(Ok(leap), leap_month(year), "{year}");
            assert_eq!(Ok(leap_length), leap_month_length(year), "{year}");
        }
    }

    #[test]
    fn month_lengths() {
        assert_eq!(Ok(29), month_length(2023, 1));
        assert_eq!(Ok(30), month_length(2023, 12));
        assert_eq!(Ok(30), month_length(2099, 1));
        assert_eq!(Err(Error::InvalidMonth { month: 0 }), month_length(2023, 0));
        assert_eq!(Err(Error::InvalidMonth { month: 13 }), month_length(2023, 13));
    }

    #[test]
    fn out_of_range() {
        for year in [1899, 2100, i32::MIN, i32::MAX] {
            assert_eq!(Err(Error::OutOfRangeYear { year }), Year::get(year));
            assert_eq!(Err(Error::OutOfRangeYear { year }), year_length(year));
        }
        assert!(months(1899).is_err());
    }

    #[test]
    fn every_year_is_consistent() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let entry = Year::get(year).unwrap();
            assert!(entry.leap_month <= 12, "{year}");
            let months: Vec<_> = entry.months().collect();
            let expected = if entry.leap_month == 0 { 12 } else { 13 };
            assert_eq!(expected, months.len(), "{year}");
            let sum: u32 = months.iter().map(|(_, days)| days).sum();
            assert_eq!(entry.length(), sum, "{year}");
            assert!((353..=385).contains(&sum), "{year}: {sum}");
        }
    }

    #[test]
    fn leap_month_follows_its_common_month() {
        let names: Vec<_> = months(2033).unwrap().map(|(m, _)| m).collect();
        assert_eq!(&[Common(10), Common(11), Leap(11), Common(12)], &names[9..]);
        assert!(months(2024).unwrap().all(|(m, _)| !m.is_leap()));
    }

    #[test]
    fn length_of() {
        let year = Year::get(2023).unwrap();
        assert_eq!(Some(29), year.length_of(Leap(2)));
        assert_eq!(None, year.length_of(Leap(3)));
        assert_eq!(None, year.length_of(Common(13)));
        let year = Year::get(2024).unwrap();
        assert_eq!(None, year.length_of(Leap(0)));
    }
}
