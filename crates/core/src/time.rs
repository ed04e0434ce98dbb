use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{SlotParseError, TimeParseError};

/// A minute-resolution time-of-day value.
///
/// Schedules express opening hours, breaks and slot durations as `HH:MM`
/// strings. Parsing tolerates un-padded components (`"9:5"` reads as
/// `09:05`); display always zero-pads, so the string form is canonical and
/// safe to compare and to use as a set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(NaiveTime::MIN);

    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// The value measured as a duration from midnight.
    ///
    /// A slot-duration field is a clock value read this way: `"01:00"` is
    /// one hour, not one o'clock.
    pub fn since_midnight(self) -> Duration {
        self.0.signed_duration_since(NaiveTime::MIN)
    }

    pub(crate) fn total_minutes(self) -> i64 {
        self.since_midnight().num_minutes()
    }

    pub(crate) fn from_total_minutes(minutes: i64) -> Option<Self> {
        if !(0..24 * 60).contains(&minutes) {
            return None;
        }
        let minutes = minutes as u32;
        Self::new(minutes / 60, minutes % 60)
    }

    pub fn time(self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // sub-minute precision is not representable in HH:MM data
        Self::new(time.hour(), time.minute()).unwrap_or(Self::MIDNIGHT)
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(time: ClockTime) -> Self {
        time.0
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeParseError(s.to_string()))?;
        let hour: u32 = hour.parse().map_err(|_| TimeParseError(s.to_string()))?;
        let minute: u32 = minute.parse().map_err(|_| TimeParseError(s.to_string()))?;
        Self::new(hour, minute).ok_or_else(|| TimeParseError(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// A `[start, end]` interval of clock times, displayed as `HH:MM-HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end.since_midnight() - self.start.since_midnight()
    }
}

impl FromStr for TimeSlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| SlotParseError(s.to_string()))?;
        let start = start.parse().map_err(|_| SlotParseError(s.to_string()))?;
        let end = end.parse().map_err(|_| SlotParseError(s.to_string()))?;
        Ok(Self { start, end })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = SlotParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Interval overlap test used for break exclusion and schedule containment.
///
/// `b` overlaps `a` when `b` starts strictly inside `a`, ends strictly
/// inside `a`, or coincides with `a` exactly. Intervals that only touch at
/// one endpoint do not overlap.
pub fn overlaps(a_start: ClockTime, a_end: ClockTime, b_start: ClockTime, b_end: ClockTime) -> bool {
    (a_start < b_start && b_start < a_end)
        || (a_start < b_end && b_end < a_end)
        || (a_start == b_start && b_end == a_end)
}

/// Whether two intervals span the same amount of time.
pub fn duration_equals(
    a_start: ClockTime,
    a_end: ClockTime,
    b_start: ClockTime,
    b_end: ClockTime,
) -> bool {
    a_end.since_midnight() - a_start.since_midnight()
        == b_end.since_midnight() - b_start.since_midnight()
}
