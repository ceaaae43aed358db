//! Property-based tests for the conflict checker.

use super::has_conflict;
use crate::reservation::{NewReservation, Reservation, ReservationId};
use crate::table::TableId;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn new_at(offset_seconds: i64, minutes: u32) -> NewReservation {
    NewReservation::builder(TableId::new(1), "guest", base() + Duration::seconds(offset_seconds))
        .duration_minutes(minutes)
        .build()
        .unwrap()
}

fn booked_at(id: i64, offset_seconds: i64, minutes: u32) -> Reservation {
    Reservation::new(ReservationId::new(id), new_at(offset_seconds, minutes))
}

// Offsets within one week, in whole minutes and whole seconds
fn minute_offset() -> impl Strategy<Value = i64> {
    (0i64..10_080).prop_map(|m| m * 60)
}

fn second_offset() -> impl Strategy<Value = i64> {
    0i64..604_800
}

fn duration() -> impl Strategy<Value = u32> {
    1u32..=480
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // A booking that starts exactly when another ends never conflicts, on either side
    #[test]
    fn exact_touch_never_conflicts(
        start in second_offset(),
        existing_minutes in duration(),
        candidate_minutes in duration(),
    ) {
        let existing = vec![booked_at(1, start, existing_minutes)];

        let after = new_at(start + i64::from(existing_minutes) * 60, candidate_minutes);
        prop_assert!(!has_conflict(&after, &existing).unwrap());

        let before = new_at(start - i64::from(candidate_minutes) * 60, candidate_minutes);
        prop_assert!(!has_conflict(&before, &existing).unwrap());
    }

    // Swapping candidate and existing gives the same answer
    #[test]
    fn swap_is_symmetric_for_minute_aligned_starts(
        a in minute_offset(),
        a_minutes in duration(),
        b in minute_offset(),
        b_minutes in duration(),
    ) {
        let forward = has_conflict(&new_at(a, a_minutes), &[booked_at(1, b, b_minutes)]).unwrap();
        let backward = has_conflict(&new_at(b, b_minutes), &[booked_at(1, a, a_minutes)]).unwrap();
        prop_assert_eq!(forward, backward);
    }

    // Same, with arbitrary whole-second starts
    #[test]
    fn swap_is_symmetric_for_second_aligned_starts(
        a in second_offset(),
        a_minutes in duration(),
        b in second_offset(),
        b_minutes in duration(),
    ) {
        let forward = has_conflict(&new_at(a, a_minutes), &[booked_at(1, b, b_minutes)]).unwrap();
        let backward = has_conflict(&new_at(b, b_minutes), &[booked_at(1, a, a_minutes)]).unwrap();
        prop_assert_eq!(forward, backward);
    }

    // At whole-second precision the predicate is the half-open overlap test
    #[test]
    fn matches_half_open_overlap(
        a in second_offset(),
        a_minutes in duration(),
        b in second_offset(),
        b_minutes in duration(),
    ) {
        let a_end = a + i64::from(a_minutes) * 60;
        let b_end = b + i64::from(b_minutes) * 60;
        let expected = a < b_end && b < a_end;

        let actual = has_conflict(&new_at(a, a_minutes), &[booked_at(1, b, b_minutes)]).unwrap();
        prop_assert_eq!(actual, expected);
    }

    // Repeated calls and duplicated rows do not change the answer
    #[test]
    fn check_is_idempotent(
        candidate_start in second_offset(),
        candidate_minutes in duration(),
        bookings in prop::collection::vec((second_offset(), duration()), 0..8),
    ) {
        let candidate = new_at(candidate_start, candidate_minutes);
        let existing: Vec<Reservation> = bookings
            .iter()
            .enumerate()
            .map(|(i, &(start, minutes))| booked_at(i as i64 + 1, start, minutes))
            .collect();

        let first = has_conflict(&candidate, &existing).unwrap();
        let second = has_conflict(&candidate, &existing).unwrap();
        prop_assert_eq!(first, second);

        let mut doubled = existing.clone();
        doubled.extend(existing.iter().cloned());
        prop_assert_eq!(has_conflict(&candidate, &doubled).unwrap(), first);
    }

    // The answer is true iff some single existing row conflicts
    #[test]
    fn conflict_is_any_over_rows(
        candidate_start in second_offset(),
        candidate_minutes in duration(),
        bookings in prop::collection::vec((second_offset(), duration()), 0..8),
    ) {
        let candidate = new_at(candidate_start, candidate_minutes);
        let existing: Vec<Reservation> = bookings
            .iter()
            .enumerate()
            .map(|(i, &(start, minutes))| booked_at(i as i64 + 1, start, minutes))
            .collect();

        let any_single = existing
            .iter()
            .any(|row| has_conflict(&candidate, std::slice::from_ref(row)).unwrap());
        prop_assert_eq!(has_conflict(&candidate, &existing).unwrap(), any_single);
    }
}
