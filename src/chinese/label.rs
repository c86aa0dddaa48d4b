//! 節日、節氣標籤
//!
//! 每日僅取一個標籤，優先次序為：農曆節日（含除夕）、節氣、公曆節日、農曆日名。
//!
//! 節氣以近似公式推算，僅支持 2000 年及以後，誤差約一日。

use std::fmt::{self as stdfmt, Display};

use serde::{Deserialize, Serialize};

use super::{LunarDate, almanac, fmt};
use crate::Error;
use crate::date::Date;

/// 農曆節日，格式為 `(月, 日, 名稱)`，閏月不取。
pub const LUNAR_FESTIVALS: &[(u32, u32, &str)] = &[
    (1, 1, "春节"),
    (1, 15, "元宵"),
    (5, 5, "端午"),
    (7, 7, "七夕"),
    (7, 15, "中元"),
    (8, 15, "中秋"),
    (9, 9, "重阳"),
    (12, 8, "腊八"),
    (12, 23, "小年"),
];

/// 公曆節日，格式為 `(月, 日, 名稱)`。
pub const SOLAR_FESTIVALS: &[(i32, i32, &str)] = &[
    (1, 1, "元旦"),
    (2, 14, "情人节"),
    (3, 8, "妇女节"),
    (3, 12, "植树节"),
    (4, 1, "愚人节"),
    (5, 1, "劳动节"),
    (5, 4, "青年节"),
    (6, 1, "儿童节"),
    (7, 1, "建党节"),
    (8, 1, "建军节"),
    (9, 10, "教师节"),
    (10, 1, "国庆节"),
    (12, 25, "圣诞节"),
];

/// 除夕，即農曆年最末一日。
pub const NEW_YEARS_EVE: &str = "除夕";

/// 二十一世紀節氣公式的 C 值，序號同 [`fmt::SOLAR_TERMS`]。
const TERM_CONSTANTS: [f64; 24] = [
    5.4055, 20.12, 3.87, 18.73, 5.63, 20.646, 4.81, 20.1, 5.52, 21.04, 5.678, 21.37, 7.108, 22.83,
    7.5, 23.13, 7.646, 23.042, 8.318, 23.438, 7.438, 22.36, 7.18, 21.94,
];

/// 一日的標籤
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Label {
    /// 農曆節日
    LunarFestival(&'static str),
    /// 除夕
    NewYearsEve,
    /// 節氣
    SolarTerm(&'static str),
    /// 公曆節日
    SolarFestival(&'static str),
    /// 農曆日名，如「初一」「廿五」
    Day(String),
}

impl Display for Label {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        match self {
            Label::LunarFestival(name) | Label::SolarTerm(name) | Label::SolarFestival(name) => {
                f.write_str(name)
            }
            Label::NewYearsEve => f.write_str(NEW_YEARS_EVE),
            Label::Day(name) => f.write_str(name),
        }
    }
}

/// 標籤設置，可逐類關閉；缺省全部開啟。
///
/// 可嵌入宿主程序的 TOML 設置中：
///
/// ```
/// use nongli::chinese::LabelConfig;
///
/// let config: LabelConfig = toml::from_str("solar_festivals = false").unwrap();
/// assert!(config.lunar_festivals);
/// assert!(!config.solar_festivals);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    /// 農曆節日
    pub lunar_festivals: bool,
    /// 除夕
    pub new_years_eve: bool,
    /// 節氣
    pub solar_terms: bool,
    /// 公曆節日
    pub solar_festivals: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            lunar_festivals: true,
            new_years_eve: true,
            solar_terms: true,
            solar_festivals: true,
        }
    }
}

/// 查找農曆節日，閏月內的日期一律不算。
pub fn lunar_festival(date: &LunarDate) -> Option<&'static str> {
    if date.is_leap_month() {
        return None;
    }
    LUNAR_FESTIVALS
        .iter()
        .find(|&&(m, d, _)| (m, d) == (date.month(), date.day()))
        .map(|&(_, _, name)| name)
}

/// 是否為除夕，即該農曆年最後一個月（含閏月）的最末一日。
pub fn is_new_years_eve(date: &LunarDate) -> bool {
    almanac::Year::get(date.year())
        .ok()
        .and_then(|entry| entry.months().last())
        .is_some_and(|(month, length)| (month, length) == (date.lunar_month(), date.day()))
}

/// 以近似公式計算 `year` 年第 `index` 個節氣（`0..=23`，小寒至冬至）落在當月第幾日。
///
/// 公式為 `[Y × 0.2422 + C] − [(Y − 1) / 4]`，`Y` 為年份末兩位，方括號為向下取整；2082 年大寒另加一日。
/// 2000 年以前或序號越界返回 `None`。
///
/// # 用例
///
/// ```
/// use nongli::chinese::label::solar_term_day;
///
/// assert_eq!(Some(6), solar_term_day(2024, 0)); // 小寒
/// assert_eq!(None, solar_term_day(1999, 0));
/// ```
pub fn solar_term_day(year: i32, index: u32) -> Option<u32> {
    if year < 2000 {
        return None;
    }
    let c = *TERM_CONSTANTS.get(index as usize)?;
    let yy = year.rem_euclid(100);
    // 向下取整：yy 為 0 時減去 −1，2000 年小寒得 6 日。
    let mut day = (yy as f64 * 0.2422 + c).floor() as i32 - (yy - 1).div_euclid(4);
    if year == 2082 && index == 1 {
        day += 1;
    }
    u32::try_from(day).ok()
}

/// 查找公曆日期當日的節氣。
pub fn solar_term_on(date: Date) -> Option<&'static str> {
    let (y, m, d) = date.gregorian();
    let first = u32::try_from(m - 1).ok()? * 2;
    [first, first + 1]
        .into_iter()
        .find(|&index| solar_term_day(y, index) == u32::try_from(d).ok())
        .map(fmt::solar_term)
}

/// 查找公曆節日。
pub fn solar_festival(date: Date) -> Option<&'static str> {
    let (_, m, d) = date.gregorian();
    SOLAR_FESTIVALS
        .iter()
        .find(|&&(fm, fd, _)| (fm, fd) == (m, d))
        .map(|&(_, _, name)| name)
}

pub(super) fn resolve(date: &LunarDate, config: &LabelConfig) -> Result<Label, Error> {
    if config.lunar_festivals
        && let Some(name) = lunar_festival(date)
    {
        return Ok(Label::LunarFestival(name));
    }
    if config.new_years_eve && is_new_years_eve(date) {
        return Ok(Label::NewYearsEve);
    }
    if config.solar_terms
        && let Some(name) = solar_term_on(date.date())
    {
        return Ok(Label::SolarTerm(name));
    }
    if config.solar_festivals
        && let Some(name) = solar_festival(date.date())
    {
        return Ok(Label::SolarFestival(name));
    }
    fmt::day(date.day()).map(Label::Day)
}
