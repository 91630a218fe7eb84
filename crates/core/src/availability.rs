//! # Availability Computation
//!
//! Derives the week grid an instructor's calendar is rendered from: for each
//! of 7 consecutive days, 32 slots at 30-minute increments starting 09:00.
//! A slot is available iff no reservation in the fetched set overlaps it.
//!
//! Overlap is one consistent half-open rule, `[start, end)`, on both the
//! read and write paths. Two reservations may touch end-to-start: a slot
//! beginning exactly when another reservation ends is free.
//!
//! The computation is pure. Callers fetch the reservation set for the range
//! and hand it in; nothing here touches the store or the clock.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::models::reservation::Reservation;
use crate::models::time_slot::{
    DAY_START_HOUR, DayAvailability, GRID_DAYS, SLOT_MINUTES, SLOTS_PER_DAY, TimeSlot,
};

/// Half-open interval intersection: `[a_start, a_end)` meets `[b_start, b_end)`.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether any reservation in the set occupies the slot starting at `slot_time`.
pub fn slot_taken(slot_time: DateTime<Utc>, reservations: &[Reservation]) -> bool {
    let slot_end = slot_time + Duration::minutes(SLOT_MINUTES);
    reservations
        .iter()
        .any(|r| overlaps(r.start_time, r.end_time, slot_time, slot_end))
}

/// Derives the full week grid starting at `start`'s calendar date.
///
/// Returns [`GRID_DAYS`] days of [`SLOTS_PER_DAY`] slots each. The grid is
/// recomputed from scratch on every call; slots carry no identity across
/// fetches.
pub fn week_slots(start: DateTime<Utc>, reservations: &[Reservation]) -> Vec<DayAvailability> {
    (0..GRID_DAYS as i64)
        .map(|day| {
            let date = (start + Duration::days(day)).date_naive();
            let first_slot =
                date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(DAY_START_HOUR);

            let slots = (0..SLOTS_PER_DAY as i64)
                .map(|i| {
                    let time = first_slot + Duration::minutes(i * SLOT_MINUTES);
                    TimeSlot {
                        time,
                        is_available: !slot_taken(time, reservations),
                    }
                })
                .collect();

            DayAvailability { date, slots }
        })
        .collect()
}
