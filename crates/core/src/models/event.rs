use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::ClockTime;

/// Weekday keys used by weekly schedules, in calendar order starting
/// Sunday. Serializes as the lowercase three-letter abbreviation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// The weekday key of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Sun => Weekday::Sun,
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Weekday::Sun => "sun",
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One weekday's open hours plus an optional mid-day break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_start: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub break_end: Option<ClockTime>,
}

impl DaySchedule {
    /// The break interval, present only when both bounds are set.
    pub fn break_window(&self) -> Option<(ClockTime, ClockTime)> {
        self.break_start.zip(self.break_end)
    }
}

/// Per-weekday availability, keyed by [`Weekday`].
pub type WeekSchedule = BTreeMap<Weekday, DaySchedule>;

/// An owner's recurring weekly availability template over a bounded,
/// inclusive date range.
///
/// The weekly schedule is embedded in the event and exclusively owned by
/// it; `covered_months` is derived state, recomputed from the date range on
/// every create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Length of every bookable slot, read as a duration since midnight.
    pub slot_duration: ClockTime,
    pub select_week: WeekSchedule,
    #[serde(default)]
    pub covered_months: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn day_schedule(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.select_week.get(&weekday)
    }

    /// Whether `date` falls inside the inclusive active range.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub owner_id: Uuid,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub slot_duration: ClockTime,
    pub select_week: WeekSchedule,
}

/// Full replacement of an event's schedule fields; coverage is re-validated
/// before the write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub owner_id: Uuid,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub slot_duration: ClockTime,
    pub select_week: WeekSchedule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteEventRequest {
    pub id: Uuid,
    pub owner_id: Uuid,
}
