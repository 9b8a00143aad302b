//! Upcoming birthday scheduling.
//!
//! Works out which birthdays fall inside a window of days starting today,
//! and on which business day each contact should be congratulated.

use crate::domain::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// Default look-ahead window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the date to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,

    /// Congratulation date, already moved off weekends.
    #[serde(rename = "birthday", serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

impl UpcomingBirthday {
    /// Congratulation date as `DD.MM.YYYY`.
    pub fn date_display(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date_display())
    }
}

/// The birthday's month and day in `year`.
///
/// 29 February falls back to 28 February in non-leap years.
pub fn occurrence_in_year(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
    birth_date.with_year(year).or_else(|| {
        // Only 29 February can be missing from a year.
        NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day() - 1)
    })
}

/// The first occurrence of the birthday on or after `today`.
pub fn next_occurrence(birth_date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birth_date, today.year())?;
    if this_year < today {
        occurrence_in_year(birth_date, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

/// Birthdays in `records` falling within `window_days` of `today`.
///
/// A birthday on `today` itself counts. The window check uses the real
/// occurrence date; the weekend shift only changes the reported date.
/// Records without a birthday are skipped. Results follow the order of
/// `records`.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birth_date = record.birthday().date()?;
            let occurrence = next_occurrence(birth_date, today)?;
            let delta = (occurrence - today).num_days();
            (0..=i64::from(window_days))
                .contains(&delta)
                .then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date: adjust_for_weekend(occurrence),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, DATE_FORMAT).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        Record::with_fields(name, Vec::<String>::new(), birthday).unwrap()
    }

    #[test]
    fn test_adjust_for_weekend() {
        // 16.03.2024 is a Saturday, 17.03.2024 a Sunday.
        assert_eq!(adjust_for_weekend(date("16.03.2024")), date("18.03.2024"));
        assert_eq!(adjust_for_weekend(date("17.03.2024")), date("18.03.2024"));
        assert_eq!(adjust_for_weekend(date("15.03.2024")), date("15.03.2024"));
        assert_eq!(adjust_for_weekend(date("18.03.2024")), date("18.03.2024"));
    }

    #[test]
    fn test_next_occurrence_this_year() {
        assert_eq!(
            next_occurrence(date("16.03.1990"), date("10.03.2024")),
            Some(date("16.03.2024"))
        );
    }

    #[test]
    fn test_next_occurrence_today_is_this_year() {
        assert_eq!(
            next_occurrence(date("10.03.1990"), date("10.03.2024")),
            Some(date("10.03.2024"))
        );
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        assert_eq!(
            next_occurrence(date("01.01.1990"), date("10.03.2024")),
            Some(date("01.01.2025"))
        );
    }

    #[test]
    fn test_leap_day_in_common_year() {
        assert_eq!(
            occurrence_in_year(date("29.02.2000"), 2023),
            Some(date("28.02.2023"))
        );
        assert_eq!(
            occurrence_in_year(date("29.02.2000"), 2024),
            Some(date("29.02.2024"))
        );
    }

    #[test]
    fn test_weekday_birthday_is_not_shifted() {
        let records = [record("Alice", Some("15.03.2024"))];
        let upcoming = upcoming_birthdays(&records, date("10.03.2024"), 7);
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "Alice".to_string(),
                date: date("15.03.2024"),
            }]
        );
    }

    #[test]
    fn test_saturday_birthday_moves_to_monday() {
        let records = [record("Bob", Some("16.03.1990"))];
        let upcoming = upcoming_birthdays(&records, date("10.03.2024"), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date_display(), "18.03.2024");
    }

    #[test]
    fn test_shifted_date_may_fall_outside_window() {
        // Sunday 17.03 is inside a 7-day window from 10.03; Monday 18.03 is reported.
        let records = [record("Dan", Some("17.03.1985"))];
        let upcoming = upcoming_birthdays(&records, date("10.03.2024"), 7);
        assert_eq!(upcoming[0].date_display(), "18.03.2024");
    }

    #[test]
    fn test_passed_birthday_excluded() {
        let records = [record("Carol", Some("01.01.1990"))];
        assert!(upcoming_birthdays(&records, date("10.03.2024"), 7).is_empty());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let records = [
            record("Today", Some("11.03.2000")),
            record("Edge", Some("18.03.2000")),
            record("Beyond", Some("19.03.2000")),
        ];
        let upcoming = upcoming_birthdays(&records, date("11.03.2024"), 7);
        let names: Vec<_> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Today", "Edge"]);
    }

    #[test]
    fn test_zero_day_window_only_today() {
        let records = [
            record("Today", Some("11.03.2000")),
            record("Tomorrow", Some("12.03.2000")),
        ];
        let upcoming = upcoming_birthdays(&records, date("11.03.2024"), 0);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Today");
    }

    #[test]
    fn test_window_across_year_end() {
        let records = [record("Newyear", Some("02.01.1995"))];
        let upcoming = upcoming_birthdays(&records, date("28.12.2024"), 7);
        // 02.01.2025 is a Thursday.
        assert_eq!(upcoming[0].date_display(), "02.01.2025");
    }

    #[test]
    fn test_absent_birthday_skipped() {
        let records = [record("Nobody", None)];
        assert!(upcoming_birthdays(&records, date("10.03.2024"), 366).is_empty());
    }

    #[test]
    fn test_upcoming_birthday_serialization() {
        let upcoming = UpcomingBirthday {
            name: "Alice".to_string(),
            date: date("15.03.2024"),
        };
        assert_eq!(
            serde_json::to_string(&upcoming).unwrap(),
            r#"{"name":"Alice","birthday":"15.03.2024"}"#
        );
        assert_eq!(upcoming.to_string(), "Alice: 15.03.2024");
    }
}
