// 📅 Calendar helpers for the birthday lookahead
//
// Three small rules:
// 1. Anniversary: the birthday's month/day placed in a given year
// 2. Leap day: 29 February is observed on 28 February in non-leap years
// 3. Weekend shift: Saturday and Sunday congratulations move to Monday

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Length of the lookahead window in days (half-open: `[today, today + 7)`)
pub const LOOKAHEAD_DAYS: i64 = 7;

/// The birthday's month/day in `year`
pub fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birthday)
}

/// Next anniversary on or after `today`
pub fn next_anniversary(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(birthday, today.year());
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// True when `date` is inside `[today, today + LOOKAHEAD_DAYS)`
pub fn within_lookahead(date: NaiveDate, today: NaiveDate) -> bool {
    let end = today + Duration::days(LOOKAHEAD_DAYS);
    today <= date && date < end
}

/// Move weekend dates forward to the following Monday
pub fn congratulation_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// English weekday name of `date`, e.g. "Monday"
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anniversary_keeps_month_and_day() {
        assert_eq!(anniversary_in(date(1990, 7, 14), 2024), date(2024, 7, 14));
    }

    #[test]
    fn test_leap_day_in_non_leap_year() {
        let leapling = date(2000, 2, 29);
        assert_eq!(anniversary_in(leapling, 2023), date(2023, 2, 28));
        assert_eq!(anniversary_in(leapling, 2024), date(2024, 2, 29));
    }

    #[test]
    fn test_next_anniversary_rolls_over() {
        let today = date(2024, 12, 30);
        assert_eq!(next_anniversary(date(1985, 1, 2), today), date(2025, 1, 2));
        assert_eq!(next_anniversary(date(1985, 12, 30), today), date(2024, 12, 30));
    }

    #[test]
    fn test_lookahead_window_is_half_open() {
        let today = date(2024, 3, 4);
        assert!(within_lookahead(today, today));
        assert!(within_lookahead(date(2024, 3, 10), today));
        assert!(!within_lookahead(date(2024, 3, 11), today));
        assert!(!within_lookahead(date(2024, 3, 3), today));
    }

    #[test]
    fn test_weekend_shift() {
        // 2024-03-09 is a Saturday, 2024-03-10 a Sunday
        assert_eq!(congratulation_day(date(2024, 3, 9)), date(2024, 3, 11));
        assert_eq!(congratulation_day(date(2024, 3, 10)), date(2024, 3, 11));
        assert_eq!(congratulation_day(date(2024, 3, 8)), date(2024, 3, 8));
    }

    #[test]
    fn test_weekday_names() {
        // 2024-03-04 is a Monday
        let names: Vec<String> = (0..7)
            .map(|offset| weekday_name(date(2024, 3, 4) + Duration::days(offset)))
            .collect();
        assert_eq!(
            names,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }
}
