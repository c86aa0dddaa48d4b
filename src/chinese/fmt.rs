//! 格式化日期相關功能

use super::Month;
use crate::Error;

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("乙巳", chinese::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static NAME1: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
    static NAME2: &[&str] = &[
        "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
    ];
    NAME1[num.rem_euclid(10) as usize].to_owned() + NAME2[num.rem_euclid(12) as usize]
}

/// 取得月名（含「月」字）。閏月冠以「闰」，十一、十二月稱「冬月」「腊月」。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)).unwrap());
/// assert_eq!("闰正月", chinese::fmt::month(Leap(1)).unwrap());
/// ```
///
/// # Errors
///
/// 若月序號不在 `1..=12` 間則回報 [`Error::InvalidMonth`]。
pub fn month(m: Month) -> Result<String, Error> {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "闰";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "腊",
        _ => return Err(Error::InvalidMonth { month: num }),
    };
    rt += "月";
    Ok(rt)
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10).unwrap());
/// assert_eq!("廿五", chinese::fmt::day(25).unwrap());
/// assert_eq!("三十", chinese::fmt::day(30).unwrap());
/// ```
///
/// # Errors
///
/// 若日序號不在 `1..=30` 間則回報 [`Error::InvalidDay`]。
pub fn day(d: u32) -> Result<String, Error> {
    let prefix = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return Err(Error::InvalidDay { day: d }),
    };
    Ok(prefix.to_owned() + NUM_CHINESE[(d % 10) as usize])
}

/// 節氣名稱，第 0 項為小寒，依公曆月份每月兩節，至冬至止。
pub const SOLAR_TERMS: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// 節氣序號轉為名稱。`0..=23` 分別為小寒到冬至，超出範圍則循環。
///
/// # 用例
///
/// ```
/// use nongli::chinese;
///
/// assert_eq!("谷雨", chinese::fmt::solar_term(7));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    SOLAR_TERMS[term.rem_euclid(24) as usize]
}
