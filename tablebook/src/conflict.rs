//! Reservation conflict detection.
//!
//! A candidate reservation conflicts with an existing one on the same table
//! when their time windows intersect. The candidate's window is shrunk by one
//! second at the start and two seconds at the end relative to its naive
//! `[start, start + duration]` span, while existing reservations keep their
//! naive span. Intersection is closed on both ends.
//!
//! The effect is that bookings which merely touch (one ends at 15:00, the next
//! starts at 15:00) are accepted, while any overlap of a second or more is
//! rejected.
//!
//! The checker is pure. Callers pass only the reservations that belong to the
//! candidate's table; nothing here filters by table.

use chrono::{Duration, NaiveDateTime};

use crate::error::{Error, Result};
use crate::reservation::{end_of, NewReservation, Reservation};

/// A closed time window `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Window {
    /// The comparison window of a candidate booking.
    fn candidate(start: NaiveDateTime, duration_minutes: u32) -> Self {
        let start = start
            .checked_add_signed(Duration::seconds(1))
            .unwrap_or(NaiveDateTime::MAX);
        let end = end_of(start, duration_minutes - 1)
            .checked_add_signed(Duration::seconds(58))
            .unwrap_or(NaiveDateTime::MAX);
        Self { start, end }
    }

    /// The naive window of a stored booking.
    fn existing(start: NaiveDateTime, duration_minutes: u32) -> Self {
        Self {
            start,
            end: end_of(start, duration_minutes),
        }
    }

    fn intersects(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

fn check_duration(duration_minutes: u32) -> Result<()> {
    if duration_minutes < 1 {
        return Err(Error::Validation {
            field: "duration_minutes".into(),
            message: "duration must be at least 1 minute".into(),
        });
    }
    Ok(())
}

/// Returns the first existing reservation the candidate conflicts with.
///
/// # Errors
///
/// Returns [`Error::Validation`] for `duration_minutes` if the candidate or
/// any existing reservation has a duration below one minute.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::conflict::find_conflict;
/// use tablebook::{NewReservation, Reservation, ReservationId, TableId};
///
/// let day = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
/// let booked = NewReservation::builder(TableId::new(1), "anna", day.and_hms_opt(15, 0, 0).unwrap())
///     .duration_minutes(60)
///     .build()
///     .unwrap();
/// let existing = vec![Reservation::new(ReservationId::new(1), booked)];
///
/// // Starts when the existing booking ends: fine.
/// let next = NewReservation::builder(TableId::new(1), "boris", day.and_hms_opt(16, 0, 0).unwrap())
///     .duration_minutes(60)
///     .build()
///     .unwrap();
/// assert!(find_conflict(&next, &existing).unwrap().is_none());
///
/// // Starts one second before it ends: conflict.
/// let late = NewReservation::builder(TableId::new(1), "boris", day.and_hms_opt(15, 59, 59).unwrap())
///     .duration_minutes(60)
///     .build()
///     .unwrap();
/// assert_eq!(find_conflict(&late, &existing).unwrap().map(Reservation::id), Some(ReservationId::new(1)));
/// ```
pub fn find_conflict<'a>(
    candidate: &NewReservation,
    existing: &'a [Reservation],
) -> Result<Option<&'a Reservation>> {
    check_duration(candidate.duration_minutes())?;
    let window = Window::candidate(candidate.reservation_time(), candidate.duration_minutes());

    for reservation in existing {
        check_duration(reservation.duration_minutes())?;
        let other = Window::existing(reservation.reservation_time(), reservation.duration_minutes());
        if window.intersects(other) {
            log::debug!(
                "candidate at {} conflicts with reservation {}",
                candidate.reservation_time(),
                reservation.id()
            );
            return Ok(Some(reservation));
        }
    }

    Ok(None)
}

/// Returns whether the candidate conflicts with any existing reservation.
///
/// # Errors
///
/// Same as [`find_conflict`].
pub fn has_conflict(candidate: &NewReservation, existing: &[Reservation]) -> Result<bool> {
    find_conflict(candidate, existing).map(|hit| hit.is_some())
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::ReservationId;
    use crate::table::TableId;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 13)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn candidate(start: NaiveDateTime, minutes: u32) -> NewReservation {
        NewReservation::builder(TableId::new(1), "candidate", start)
            .duration_minutes(minutes)
            .build()
            .unwrap()
    }

    fn booked(id: i64, start: NaiveDateTime, minutes: u32) -> Reservation {
        Reservation::new(ReservationId::new(id), candidate(start, minutes))
    }

    #[test]
    fn test_no_existing_reservations() {
        assert!(!has_conflict(&candidate(at(12, 0, 0), 60), &[]).unwrap());
    }

    #[test]
    fn test_disjoint_bookings_do_not_conflict() {
        let existing = vec![booked(1, at(13, 0, 0), 60)];
        assert!(!has_conflict(&candidate(at(15, 0, 0), 60), &existing).unwrap());
    }

    #[test]
    fn test_back_to_back_bookings_do_not_conflict() {
        let existing = vec![booked(1, at(15, 0, 0), 60)];
        assert!(!has_conflict(&candidate(at(16, 0, 0), 60), &existing).unwrap());
        assert!(!has_conflict(&candidate(at(14, 0, 0), 60), &existing).unwrap());
    }

    #[test]
    fn test_one_second_overlap_conflicts() {
        let existing = vec![booked(1, at(15, 0, 0), 60)];
        assert!(has_conflict(&candidate(at(15, 59, 59), 60), &existing).unwrap());
        assert!(has_conflict(&candidate(at(14, 0, 1), 60), &existing).unwrap());
    }

    #[test]
    fn test_contained_and_containing_bookings_conflict() {
        let existing = vec![booked(1, at(15, 0, 0), 60)];
        assert!(has_conflict(&candidate(at(15, 20, 0), 10), &existing).unwrap());
        assert!(has_conflict(&candidate(at(14, 0, 0), 180), &existing).unwrap());
        assert!(has_conflict(&candidate(at(15, 0, 0), 60), &existing).unwrap());
    }

    #[test]
    fn test_reports_earliest_listed_conflict() {
        let existing = vec![booked(1, at(14, 0, 0), 60), booked(2, at(15, 0, 0), 60)];
        let hit = find_conflict(&candidate(at(13, 1, 0), 60), &existing)
            .unwrap()
            .map(Reservation::id);
        assert_eq!(hit, Some(ReservationId::new(1)));
    }

    #[test]
    fn test_runs_into_next_booking_by_a_minute() {
        let later_only = vec![booked(2, at(15, 0, 0), 60)];
        assert!(!has_conflict(&candidate(at(13, 1, 0), 60), &later_only).unwrap());

        let earlier = vec![booked(1, at(14, 0, 0), 60)];
        assert!(has_conflict(&candidate(at(13, 1, 0), 60), &earlier).unwrap());
    }

    #[test]
    fn test_one_minute_bookings() {
        let existing = vec![booked(1, at(12, 0, 0), 1)];
        assert!(!has_conflict(&candidate(at(12, 1, 0), 1), &existing).unwrap());
        assert!(!has_conflict(&candidate(at(11, 59, 0), 1), &existing).unwrap());
        assert!(has_conflict(&candidate(at(12, 0, 30), 1), &existing).unwrap());
    }

    #[test]
    fn test_crossing_midnight() {
        let existing = vec![booked(1, at(23, 30, 0), 60)];
        let next_day = NaiveDate::from_ymd_opt(2025, 4, 14)
            .unwrap()
            .and_hms_opt(0, 15, 0)
            .unwrap();
        assert!(has_conflict(&candidate(next_day, 30), &existing).unwrap());

        let after = next_day + Duration::minutes(15);
        assert!(!has_conflict(&candidate(after, 30), &existing).unwrap());
    }

    #[test]
    fn test_rejects_stored_zero_duration() {
        let bad = Reservation::from_row(
            ReservationId::new(1),
            TableId::new(1),
            "Anna".into(),
            at(12, 0, 0),
            0,
        );
        let err = has_conflict(&candidate(at(18, 0, 0), 60), &[bad]).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "duration_minutes"));
    }

    #[test]
    fn test_candidate_window_bounds() {
        let window = Window::candidate(at(15, 0, 0), 60);
        assert_eq!(window.start, at(15, 0, 1));
        assert_eq!(window.end, at(15, 59, 59));

        let window = Window::existing(at(15, 0, 0), 60);
        assert_eq!(window.start, at(15, 0, 0));
        assert_eq!(window.end, at(16, 0, 0));
    }
}
