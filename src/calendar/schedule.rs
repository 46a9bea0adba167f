use super::{CalendarError, Month};
use crate::events::model::EventDate;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::str::FromStr;
use tracing::debug;

const DEFAULT_START_HOUR: u32 = 14;
const DEFAULT_DURATION_HOURS: i64 = 2;

lazy_static! {
    static ref START_TIME: Regex =
        Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)").expect("Failed to create start time regex");
    static ref END_TIME: Regex = Regex::new(r"(?i)-\s*(\d{1,2}):(\d{2})\s*(AM|PM)")
        .expect("Failed to create end time regex");
}

/// Start of the event in local time, 2 PM when the time text has no clock time
pub fn derive_start(date: &EventDate, time: &str) -> Result<NaiveDateTime, CalendarError> {
    let day = parse_date(date)?;
    let start = START_TIME
        .captures(time)
        .and_then(|caps| to_clock(&caps))
        .unwrap_or_else(|| {
            debug!("No start time in '{}', using the default", time);
            NaiveTime::from_hms_opt(DEFAULT_START_HOUR, 0, 0).unwrap_or_default()
        });

    Ok(day.and_time(start))
}

/// End of the event on the start's day, two hours after the start when the text has no range
pub fn derive_end(start: NaiveDateTime, time: &str) -> NaiveDateTime {
    match END_TIME.captures(time).and_then(|caps| to_clock(&caps)) {
        Some(end) => {
            let end = start.date().and_time(end);

            // "10:00 PM - 1:00 AM" ends the following day
            if end <= start {
                end + Duration::days(1)
            } else {
                end
            }
        }
        None => start + Duration::hours(DEFAULT_DURATION_HOURS),
    }
}

/// Compact UTC basic format used by calendar services, e.g. `20240315T140000Z`
pub fn compact_utc(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y%m%dT%H%M%SZ").to_string()
}

fn parse_date(date: &EventDate) -> Result<NaiveDate, CalendarError> {
    let unparseable = || CalendarError::UnparseableDate {
        month: date.month.clone(),
        day: date.day.clone(),
        year: date.year.clone(),
    };

    let month = Month::from_str(date.month.trim()).map_err(|_| unparseable())?;
    let day: u32 = date.day.trim().parse().map_err(|_| unparseable())?;
    let year: i32 = date.year.trim().parse().map_err(|_| unparseable())?;

    NaiveDate::from_ymd_opt(year, month.number(), day).ok_or_else(unparseable)
}

fn to_clock(caps: &Captures) -> Option<NaiveTime> {
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let is_pm = caps[3].eq_ignore_ascii_case("PM");

    let hour = match (is_pm, hour) {
        (true, 12) => 12,
        (true, hour) => hour + 12,
        (false, 12) => 0,
        (false, hour) => hour,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn march_15() -> EventDate {
        EventDate::new("Mar", "15", "2024")
    }

    #[test_log::test]
    fn should_derive_start_and_end_from_range() {
        let start = derive_start(&march_15(), "2:00 PM - 6:00 PM").unwrap();

        assert_eq!(start, at(2024, 3, 15, 14, 0));
        assert_eq!(derive_end(start, "2:00 PM - 6:00 PM"), at(2024, 3, 15, 18, 0));
    }

    #[test_log::test]
    fn missing_start_time_should_default_to_two_pm() {
        let start = derive_start(&march_15(), "All day").unwrap();

        assert_eq!(start, at(2024, 3, 15, 14, 0));
    }

    #[test_log::test]
    fn missing_end_time_should_last_two_hours() {
        let start = derive_start(&march_15(), "9:30 AM").unwrap();

        assert_eq!(start, at(2024, 3, 15, 9, 30));
        assert_eq!(derive_end(start, "9:30 AM"), start + Duration::hours(2));
    }

    #[test_log::test]
    fn twelve_o_clock_should_normalize() {
        let noon = derive_start(&march_15(), "12:00 PM - 1:30 PM").unwrap();
        let midnight = derive_start(&march_15(), "12:15 am").unwrap();

        assert_eq!(noon, at(2024, 3, 15, 12, 0));
        assert_eq!(derive_end(noon, "12:00 PM - 1:30 PM"), at(2024, 3, 15, 13, 30));
        assert_eq!(midnight, at(2024, 3, 15, 0, 15));
    }

    #[test_log::test]
    fn end_before_start_should_roll_to_next_day() {
        let start = derive_start(&march_15(), "10:00 PM - 1:00 AM").unwrap();

        assert_eq!(derive_end(start, "10:00 PM - 1:00 AM"), at(2024, 3, 16, 1, 0));
    }

    #[test_log::test]
    fn out_of_range_clock_should_fall_back_to_default() {
        let start = derive_start(&march_15(), "14:00 PM").unwrap();

        assert_eq!(start, at(2024, 3, 15, 14, 0));
    }

    #[test_log::test]
    fn unknown_month_should_be_rejected() {
        let result = derive_start(&EventDate::new("Mrz", "15", "2024"), "2:00 PM");

        assert_eq!(
            result,
            Err(CalendarError::UnparseableDate {
                month: "Mrz".to_string(),
                day: "15".to_string(),
                year: "2024".to_string(),
            })
        );
    }

    #[test_log::test]
    fn impossible_day_should_be_rejected() {
        assert!(derive_start(&EventDate::new("Feb", "30", "2024"), "2:00 PM").is_err());
        assert!(derive_start(&EventDate::new("Feb", "TBD", "2024"), "2:00 PM").is_err());
    }

    #[test_log::test]
    fn compact_format_should_be_basic_utc() {
        let timestamp = at(2024, 3, 15, 14, 0).and_utc();

        assert_eq!(compact_utc(&timestamp), "20240315T140000Z");
    }
}
