//! Solar Hijri dates with Afghan month names and Eastern Arabic-Indic numerals.

use chrono::{Datelike, NaiveDate};

pub const MONTHS: [&str; 12] = [
    "حمل", "ثور", "جوزا", "سرطان", "اسد", "سنبله",
    "میزان", "عقرب", "قوس", "جدی", "دلو", "حوت",
];

/// Years at which the 33-year leap cycle shifts.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181,
    1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394, 2456, 3178,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    pub fn from_gregorian(date: NaiveDate) -> Self {
        let mut year = date.year() - 621;
        let cycle = leap_cycle(year);

        let first_day = NaiveDate::from_ymd_opt(date.year(), 3, cycle.march_day)
            .unwrap_or(date);
        let mut offset = (date - first_day).num_days() as i32;

        if offset >= 0 {
            if offset <= 185 {
                return Self::new(year, 1 + offset / 31, offset % 31 + 1);
            }
            offset -= 186;
        } else {
            year -= 1;
            offset += 179;
            if cycle.years_since_leap == 1 {
                offset += 1;
            }
        }

        Self::new(year, 7 + offset / 30, offset % 30 + 1)
    }

    fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month: month as u32,
            day: day as u32,
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS[(self.month as usize - 1) % MONTHS.len()]
    }

    /// `day month-name year` with localized digits.
    pub fn localized(&self) -> String {
        format!(
            "{} {} {}",
            localize_digits(&self.day.to_string()),
            self.month_name(),
            localize_digits(&self.year.to_string()),
        )
    }
}

struct LeapCycle {
    /// Years since the last leap year, 0 means this year is leap.
    years_since_leap: i32,
    /// Day of March on which the solar year starts.
    march_day: u32,
}

fn leap_cycle(year: i32) -> LeapCycle {
    let gregorian_year = year + 621;
    let mut solar_leaps = -14;
    let mut prev_break = BREAKS[0];
    let mut jump = 0;

    for &brk in &BREAKS[1..] {
        jump = brk - prev_break;
        if year < brk {
            break;
        }
        solar_leaps += jump / 33 * 8 + jump % 33 / 4;
        prev_break = brk;
    }

    let mut n = year - prev_break;
    solar_leaps += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        solar_leaps += 1;
    }

    let gregorian_leaps = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + solar_leaps - gregorian_leaps;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut years_since_leap = ((n + 1) % 33 - 1) % 4;
    if years_since_leap == -1 {
        years_since_leap = 4;
    }

    LeapCycle {
        years_since_leap,
        march_day: march_day as u32,
    }
}

/// Maps ASCII digits, `,` and `.` to their Persian glyphs.
pub fn localize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '0'..='9' => char::from_u32('۰' as u32 + (c as u32 - '0' as u32)).unwrap_or(c),
            ',' => '٬',
            '.' => '٫',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn solar(y: i32, m: u32, d: u32) -> SolarDate {
        SolarDate::from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn converts_new_year() {
        assert_eq!(solar(2024, 3, 20), SolarDate { year: 1403, month: 1, day: 1 });
        assert_eq!(solar(2025, 3, 21), SolarDate { year: 1404, month: 1, day: 1 });
        assert_eq!(solar(2026, 3, 21), SolarDate { year: 1405, month: 1, day: 1 });
    }

    #[test]
    fn converts_year_end_of_leap_and_common_years() {
        assert_eq!(solar(2025, 3, 20), SolarDate { year: 1403, month: 12, day: 30 });
        assert_eq!(solar(2026, 3, 20), SolarDate { year: 1404, month: 12, day: 29 });
    }

    #[test]
    fn converts_second_half_of_year() {
        assert_eq!(solar(2023, 9, 22), SolarDate { year: 1402, month: 6, day: 31 });
        assert_eq!(solar(2023, 9, 23), SolarDate { year: 1402, month: 7, day: 1 });
        assert_eq!(solar(2026, 10, 19), SolarDate { year: 1405, month: 7, day: 27 });
        assert_eq!(solar(2000, 1, 1), SolarDate { year: 1378, month: 10, day: 11 });
    }

    #[test]
    fn localized_uses_afghan_month_names() {
        assert_eq!(solar(2026, 10, 19).localized(), "۲۷ میزان ۱۴۰۵");
        assert_eq!(solar(2024, 3, 20).month_name(), "حمل");
    }

    #[test]
    fn localize_digits_maps_separators() {
        assert_eq!(localize_digits("1,234.50"), "۱٬۲۳۴٫۵۰");
        assert_eq!(localize_digits("09:30"), "۰۹:۳۰");
        assert_eq!(localize_digits("USD"), "USD");
    }
}
