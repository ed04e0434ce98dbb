use std::collections::BTreeSet;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use slotbook_core::coverage::{validate_coverage, validate_event_schedule};
use slotbook_core::errors::CoverageError;
use slotbook_core::models::event::{DaySchedule, Event, WeekSchedule, Weekday};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn open_day() -> DaySchedule {
    DaySchedule {
        start_time: "09:00".parse().expect("valid"),
        end_time: "17:00".parse().expect("valid"),
        break_start: None,
        break_end: None,
    }
}

fn week(days: &[Weekday]) -> WeekSchedule {
    days.iter().map(|d| (*d, open_day())).collect()
}

fn full_week() -> WeekSchedule {
    week(&Weekday::ALL)
}

#[test]
fn test_invalid_range_beats_everything() {
    // end before start fails regardless of the schedule contents
    let result = validate_coverage(date(2024, 1, 31), date(2024, 1, 1), &full_week());
    assert_eq!(result, Err(CoverageError::InvalidRange));

    let result = validate_coverage(date(2024, 1, 31), date(2024, 1, 1), &WeekSchedule::new());
    assert_eq!(result, Err(CoverageError::InvalidRange));
}

#[test]
fn test_full_week_covers_any_range() {
    let months = validate_coverage(date(2024, 1, 1), date(2024, 1, 31), &full_week())
        .expect("covered");
    assert_eq!(months, BTreeSet::from(["2024-01".to_string()]));
}

#[test]
fn test_months_accumulate_across_boundaries() {
    let months = validate_coverage(date(2023, 12, 15), date(2024, 2, 10), &full_week())
        .expect("covered");
    assert_eq!(
        months,
        BTreeSet::from([
            "2023-12".to_string(),
            "2024-01".to_string(),
            "2024-02".to_string(),
        ])
    );
}

#[test]
fn test_weekday_range_with_weekday_schedule() {
    // 2024-01-01 is a Monday; Mon..Fri covers the working week
    let working_week = week(&[
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ]);
    let months = validate_coverage(date(2024, 1, 1), date(2024, 1, 5), &working_week)
        .expect("covered");
    assert_eq!(months, BTreeSet::from(["2024-01".to_string()]));
}

#[test]
fn test_missing_weekday_is_reported() {
    let mut schedule = full_week();
    schedule.remove(&Weekday::Thu);

    let result = validate_coverage(date(2024, 1, 1), date(2024, 1, 31), &schedule);
    assert_eq!(result, Err(CoverageError::MissingWeekday(Weekday::Thu)));
}

#[test]
fn test_uncovered_weekday_rejects_even_a_long_range() {
    // a range spanning a weekday with no entry is rejected even though that
    // weekday might never be booked
    let weekend_only = week(&[Weekday::Sat, Weekday::Sun]);
    let result = validate_coverage(date(2024, 1, 1), date(2024, 12, 31), &weekend_only);
    assert_eq!(result, Err(CoverageError::MissingWeekday(Weekday::Mon)));
}

#[test]
fn test_single_day_range() {
    let monday_only = week(&[Weekday::Mon]);
    let months = validate_coverage(date(2024, 1, 1), date(2024, 1, 1), &monday_only)
        .expect("covered");
    assert_eq!(months, BTreeSet::from(["2024-01".to_string()]));

    let tuesday_only = week(&[Weekday::Tue]);
    let result = validate_coverage(date(2024, 1, 1), date(2024, 1, 1), &tuesday_only);
    assert_eq!(result, Err(CoverageError::MissingWeekday(Weekday::Mon)));
}

#[test]
fn test_validate_event_schedule_uses_event_fields() {
    let event = Event {
        id: Uuid::new_v4(),
        owner_id: Uuid::new_v4(),
        event_name: "Consultation".to_string(),
        start_date: date(2024, 3, 1),
        end_date: date(2024, 4, 30),
        slot_duration: "01:00".parse().expect("valid"),
        select_week: full_week(),
        covered_months: Vec::new(),
        created_at: chrono::Utc::now(),
    };

    let months = validate_event_schedule(&event).expect("covered");
    assert_eq!(
        months,
        BTreeSet::from(["2024-03".to_string(), "2024-04".to_string()])
    );
}
