use crate::models::event::DaySchedule;
use crate::time::{overlaps, ClockTime, TimeSlot};

/// Enumerates the bookable slots of one day's schedule, lazily and in
/// order.
///
/// The cursor starts at `start_time` and advances by `slot_duration`;
/// generation halts as soon as the next candidate would run past
/// `end_time` — a shorter trailing remainder is never offered. A candidate
/// overlapping the break window is skipped; one exactly coinciding with the
/// break is excluded, one merely adjacent to it is kept (see
/// [`overlaps`]). The sequence is recomputed from scratch on every call.
pub fn generate_slots(
    day: &DaySchedule,
    slot_duration: ClockTime,
) -> impl Iterator<Item = TimeSlot> + '_ {
    let step = slot_duration.total_minutes();
    let end = day.end_time.total_minutes();
    let mut cursor = day.start_time.total_minutes();

    std::iter::from_fn(move || {
        while step > 0 && cursor + step <= end {
            let start = ClockTime::from_total_minutes(cursor)?;
            let finish = ClockTime::from_total_minutes(cursor + step)?;
            cursor += step;

            let slot = TimeSlot::new(start, finish);
            if let Some((break_start, break_end)) = day.break_window() {
                if overlaps(slot.start, slot.end, break_start, break_end) {
                    continue;
                }
            }
            return Some(slot);
        }
        None
    })
}
