//! Persian (Jalali) calendar and number formatting for Persian-language résumés.

use chrono::{Datelike, NaiveDate};

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

pub const DEFAULT_DATE_FORMAT: &str = "Y/m/d";

/// Replaces ASCII digits with their Persian counterparts.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// 1 Farvardin 979 (1600-03-20) as days from the common era.
const JALALI_979_DAYS_FROM_CE: i64 = 584_102;

/// Converts a Gregorian date to a Jalali `(year, month, day)`.
///
/// Uses the arithmetic 33-year cycle counted from 1 Farvardin 979. Floor division
/// keeps the month in `1..=12` for dates before the epoch as well.
pub fn gregorian_to_jalali(date: NaiveDate) -> (i32, u32, u32) {
    let mut days = i64::from(date.num_days_from_ce()) - JALALI_979_DAYS_FROM_CE;

    let mut jy = 979 + 33 * days.div_euclid(12053);
    days = days.rem_euclid(12053);
    jy += 4 * (days / 1461);
    days %= 1461;

    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy as i32, jm as u32, jd as u32)
}

/// Formats `date` as a Jalali date with Persian digits.
///
/// Supported formats: `Y/m/d`, `Y/m`, `Y-m-d`, `d/m/Y` and `d F Y` (month name).
/// Unknown formats fall back to `Y/m/d`.
pub fn persian_date(date: NaiveDate, format: &str) -> String {
    let (y, m, d) = gregorian_to_jalali(date);

    let formatted = match format {
        "Y/m" => format!("{y}/{m:02}"),
        "Y-m-d" => format!("{y}-{m:02}-{d:02}"),
        "d/m/Y" => format!("{d:02}/{m:02}/{y}"),
        "d F Y" => format!("{d} {} {y}", MONTH_NAMES[(m - 1) as usize]),
        _ => format!("{y}/{m:02}/{d:02}"),
    };

    to_persian_digits(&formatted)
}

/// Formats a toman amount in words-with-digits, e.g. `۴۵ میلیون تومان`.
/// Zero formats as an empty string.
pub fn format_salary(amount: i64) -> String {
    if amount == 0 {
        return String::new();
    }

    let value = amount as f64;
    let text = if value >= 1_000_000_000.0 {
        format!("{} میلیارد تومان", trim_decimal(value / 1_000_000_000.0))
    } else if value >= 1_000_000.0 {
        format!("{} میلیون تومان", trim_decimal(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{} هزار تومان", trim_decimal(value / 1_000.0))
    } else {
        format!("{amount} تومان")
    };

    to_persian_digits(&text)
}

fn trim_decimal(value: f64) -> String {
    let formatted = format!("{value:.1}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Relative age of `date` as seen from `today`, in Persian.
pub fn days_ago(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();

    let text = match days {
        i64::MIN..=0 => return "امروز".to_string(),
        1 => return "دیروز".to_string(),
        2..=6 => format!("{days} روز پیش"),
        7..=29 => format!("{} هفته پیش", days / 7),
        30..=364 => format!("{} ماه پیش", days / 30),
        _ => format!("{} سال پیش", days / 365),
    };

    to_persian_digits(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn converts_nowruz() {
        assert_eq!(gregorian_to_jalali(date(2024, 3, 20)), (1403, 1, 1));
        assert_eq!(gregorian_to_jalali(date(2023, 3, 21)), (1402, 1, 1));
    }

    #[test]
    fn converts_second_half_of_year() {
        // 1 Mehr 1402
        assert_eq!(gregorian_to_jalali(date(2023, 9, 23)), (1402, 7, 1));
        // last day of Esfand 1402 (leap)
        assert_eq!(gregorian_to_jalali(date(2024, 3, 19)), (1402, 12, 29));
    }

    #[test]
    fn dates_before_the_jalali_epoch_stay_in_range() {
        let mut day = date(1, 1, 1);
        while day < date(700, 1, 1) {
            let (_, m, d) = gregorian_to_jalali(day);
            assert!((1..=12).contains(&m), "{day} gave month {m}");
            assert!((1..=31).contains(&d), "{day} gave day {d}");
            day += chrono::Duration::days(1);
        }

        assert_eq!(gregorian_to_jalali(date(500, 6, 1)), (-121, 3, 11));
        assert!(persian_date(date(1, 1, 1), "d F Y").contains("دی"));
    }

    #[test]
    fn formats_dates_with_persian_digits() {
        let d = date(2024, 3, 20);
        assert_eq!(persian_date(d, DEFAULT_DATE_FORMAT), "۱۴۰۳/۰۱/۰۱");
        assert_eq!(persian_date(d, "Y/m"), "۱۴۰۳/۰۱");
        assert_eq!(persian_date(d, "Y-m-d"), "۱۴۰۳-۰۱-۰۱");
        assert_eq!(persian_date(d, "d/m/Y"), "۰۱/۰۱/۱۴۰۳");
        assert_eq!(persian_date(d, "d F Y"), "۱ فروردین ۱۴۰۳");
    }

    #[test]
    fn salary_units() {
        assert_eq!(format_salary(0), "");
        assert_eq!(format_salary(500), "۵۰۰ تومان");
        assert_eq!(format_salary(25_000), "۲۵ هزار تومان");
        assert_eq!(format_salary(45_000_000), "۴۵ میلیون تومان");
        assert_eq!(format_salary(12_500_000), "۱۲.۵ میلیون تومان");
        assert_eq!(format_salary(2_000_000_000), "۲ میلیارد تومان");
    }

    #[test]
    fn relative_days() {
        let today = date(2025, 6, 30);
        assert_eq!(days_ago(today, today), "امروز");
        assert_eq!(days_ago(date(2025, 6, 29), today), "دیروز");
        assert_eq!(days_ago(date(2025, 6, 27), today), "۳ روز پیش");
        assert_eq!(days_ago(date(2025, 6, 16), today), "۲ هفته پیش");
        assert_eq!(days_ago(date(2025, 4, 1), today), "۳ ماه پیش");
        assert_eq!(days_ago(date(2023, 6, 1), today), "۲ سال پیش");
    }
}
