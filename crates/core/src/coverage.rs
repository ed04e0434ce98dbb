use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::errors::CoverageError;
use crate::models::event::{Event, WeekSchedule, Weekday};

/// Verifies that every weekday occurring in `[start_date, end_date]` has a
/// schedule entry, and collects the distinct `YYYY-MM` months the range
/// touches.
///
/// The month set is derived state persisted alongside the event. It is
/// recomputed from scratch on every create and update, never patched
/// incrementally.
pub fn validate_coverage(
    start_date: NaiveDate,
    end_date: NaiveDate,
    select_week: &WeekSchedule,
) -> Result<BTreeSet<String>, CoverageError> {
    if end_date < start_date {
        return Err(CoverageError::InvalidRange);
    }

    let mut months = BTreeSet::new();
    for day in start_date.iter_days().take_while(|d| *d <= end_date) {
        let weekday = Weekday::from_date(day);
        if !select_week.contains_key(&weekday) {
            return Err(CoverageError::MissingWeekday(weekday));
        }
        months.insert(day.format("%Y-%m").to_string());
    }

    Ok(months)
}

/// Coverage validation for an event already assembled from a request.
pub fn validate_event_schedule(event: &Event) -> Result<BTreeSet<String>, CoverageError> {
    validate_coverage(event.start_date, event.end_date, &event.select_week)
}
