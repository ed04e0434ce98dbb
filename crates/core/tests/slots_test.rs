use pretty_assertions::assert_eq;
use slotbook_core::models::event::DaySchedule;
use slotbook_core::slots::generate_slots;
use slotbook_core::time::{ClockTime, TimeSlot};

fn ct(s: &str) -> ClockTime {
    s.parse().expect("valid clock time")
}

fn day(start: &str, end: &str) -> DaySchedule {
    DaySchedule {
        start_time: ct(start),
        end_time: ct(end),
        break_start: None,
        break_end: None,
    }
}

fn day_with_break(start: &str, end: &str, break_start: &str, break_end: &str) -> DaySchedule {
    DaySchedule {
        start_time: ct(start),
        end_time: ct(end),
        break_start: Some(ct(break_start)),
        break_end: Some(ct(break_end)),
    }
}

fn slot_strings(day: &DaySchedule, duration: &str) -> Vec<String> {
    generate_slots(day, ct(duration))
        .map(|slot| slot.to_string())
        .collect()
}

#[test]
fn test_three_hour_window_yields_three_slots() {
    let day = day("09:00", "12:00");
    assert_eq!(
        slot_strings(&day, "01:00"),
        vec!["09:00-10:00", "10:00-11:00", "11:00-12:00"]
    );
}

#[test]
fn test_break_aligned_to_slot_excludes_exactly_that_slot() {
    let day = day_with_break("09:00", "12:00", "10:00", "11:00");
    assert_eq!(
        slot_strings(&day, "01:00"),
        vec!["09:00-10:00", "11:00-12:00"]
    );
}

#[test]
fn test_unaligned_break_excludes_every_overlapping_slot() {
    let day = day_with_break("09:00", "12:00", "10:30", "11:00");
    // 10:00-11:00 straddles the break; 11:00-12:00 only touches its end
    assert_eq!(
        slot_strings(&day, "01:00"),
        vec!["09:00-10:00", "11:00-12:00"]
    );
}

#[test]
fn test_trailing_remainder_is_discarded() {
    // 12:00-12:30 cannot fit a whole slot; generation halts there rather
    // than searching for a later fit
    let day = day("09:00", "12:30");
    assert_eq!(
        slot_strings(&day, "01:00"),
        vec!["09:00-10:00", "10:00-11:00", "11:00-12:00"]
    );
}

#[test]
fn test_window_smaller_than_slot_yields_nothing() {
    let day = day("09:00", "09:45");
    assert_eq!(slot_strings(&day, "01:00"), Vec::<String>::new());
}

#[test]
fn test_zero_duration_yields_nothing() {
    let day = day("09:00", "12:00");
    assert_eq!(slot_strings(&day, "00:00"), Vec::<String>::new());
}

#[test]
fn test_slot_count_matches_window_over_duration() {
    // floor((17:30 - 09:00) / 1h) = 8 whole slots
    let day = day("09:00", "17:30");
    let slots: Vec<TimeSlot> = generate_slots(&day, ct("01:00")).collect();
    assert_eq!(slots.len(), 8);

    // contiguous and non-overlapping
    for pair in slots.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    assert_eq!(slots[0].start, ct("09:00"));
    assert_eq!(slots[7].end, ct("17:00"));
}

#[test]
fn test_half_hour_duration() {
    let day = day("09:00", "10:30");
    assert_eq!(
        slot_strings(&day, "00:30"),
        vec!["09:00-09:30", "09:30-10:00", "10:00-10:30"]
    );
}

#[test]
fn test_generation_is_restartable() {
    let day = day_with_break("08:00", "16:00", "12:00", "13:00");
    let first: Vec<TimeSlot> = generate_slots(&day, ct("01:00")).collect();
    let second: Vec<TimeSlot> = generate_slots(&day, ct("01:00")).collect();
    assert_eq!(first, second);
}
