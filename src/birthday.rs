//! Days-until-birthday computation
//!
//! Everything here is pure: the reference instant is always supplied by the
//! caller so results are reproducible.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Build the greeting for `username` born on `birth_date`, as seen at `now`.
pub fn birthday_message(username: &str, birth_date: NaiveDate, now: DateTime<Utc>) -> String {
    let today = now.date_naive();

    if occurrence_in(birth_date, today.year()) == Some(today) {
        return format!("Hello, {}! Happy birthday!", username);
    }

    let days = days_until_next(birth_date, now);
    format!("Hello, {}! Your birthday is in {} day(s)", username, days)
}

/// Whole days (rounded up) from `now` until midnight UTC of the next birthday.
pub fn days_until_next(birth_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let year = now.year();

    let mut next = midnight(occurrence_in(birth_date, year));
    if next.map_or(true, |next| next < now) {
        next = midnight(occurrence_in(birth_date, year + 1));
    }

    let Some(next) = next else {
        // only reachable at the very end of chrono's supported range
        return 0;
    };

    let delta = next - now;
    let secs = delta.num_seconds();
    let partial = secs % SECONDS_PER_DAY != 0 || delta.subsec_nanos() != 0;
    secs / SECONDS_PER_DAY + i64::from(partial)
}

/// The calendar day the birthday falls on in `year`.
///
/// Feb 29 birthdays are celebrated on Mar 1 in non-leap years.
pub fn occurrence_in(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day()).or_else(|| {
        if birth_date.month() == 2 && birth_date.day() == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

fn midnight(date: Option<NaiveDate>) -> Option<DateTime<Utc>> {
    date.map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at_midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_happy_birthday() {
        let message = birthday_message("test", date(2010, 5, 26), at_midnight(2016, 5, 26));
        assert_eq!(message, "Hello, test! Happy birthday!");
    }

    #[test]
    fn test_happy_birthday_later_in_the_day() {
        let now = Utc.with_ymd_and_hms(2016, 5, 26, 23, 59, 59).unwrap();
        let message = birthday_message("test", date(2010, 5, 26), now);
        assert_eq!(message, "Hello, test! Happy birthday!");
    }

    #[test]
    fn test_birthday_tomorrow() {
        let message = birthday_message("test", date(2010, 5, 27), at_midnight(2016, 5, 26));
        assert_eq!(message, "Hello, test! Your birthday is in 1 day(s)");
    }

    #[test]
    fn test_birthday_next_month() {
        let message = birthday_message("test", date(2010, 6, 26), at_midnight(2016, 5, 26));
        assert_eq!(message, "Hello, test! Your birthday is in 31 day(s)");
    }

    #[test]
    fn test_birthday_passed_in_leap_year() {
        let message = birthday_message("test", date(2010, 2, 1), at_midnight(2016, 2, 2));
        assert_eq!(message, "Hello, test! Your birthday is in 365 day(s)");
    }

    #[test]
    fn test_birthday_passed_in_normal_year() {
        let message = birthday_message("test", date(2010, 2, 1), at_midnight(2017, 2, 2));
        assert_eq!(message, "Hello, test! Your birthday is in 364 day(s)");
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let now = Utc.with_ymd_and_hms(2016, 5, 26, 23, 0, 0).unwrap();
        assert_eq!(days_until_next(date(2010, 5, 27), now), 1);

        let now = Utc.with_ymd_and_hms(2016, 5, 25, 23, 0, 0).unwrap();
        assert_eq!(days_until_next(date(2010, 5, 27), now), 2);
    }

    #[test]
    fn test_leap_day_birthday_in_leap_year() {
        assert_eq!(
            birthday_message("test", date(2012, 2, 29), at_midnight(2016, 2, 29)),
            "Hello, test! Happy birthday!"
        );
        assert_eq!(days_until_next(date(2012, 2, 29), at_midnight(2016, 2, 28)), 1);
    }

    #[test]
    fn test_leap_day_birthday_rolls_to_march_first() {
        assert_eq!(occurrence_in(date(2012, 2, 29), 2017), Some(date(2017, 3, 1)));
        assert_eq!(
            birthday_message("test", date(2012, 2, 29), at_midnight(2017, 3, 1)),
            "Hello, test! Happy birthday!"
        );
        assert_eq!(days_until_next(date(2012, 2, 29), at_midnight(2017, 2, 28)), 1);
    }

    #[test]
    fn test_leap_day_birthday_next_year_is_leap() {
        // next occurrence is 2020-02-29
        assert_eq!(days_until_next(date(2012, 2, 29), at_midnight(2019, 3, 2)), 364);
    }
}
