//! Reservation types for booking a table over a time interval.
//!
//! This module provides the reservation identifier, the validated input used
//! to create a reservation, and the persisted reservation record, along with
//! the customer-name normalization applied on input.

use std::fmt;

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::table::TableId;

/// Maximum length of a customer name, in characters.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;

/// A store-assigned reservation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalizes a customer name to title case.
///
/// Every run of alphabetic characters gets its first character uppercased and
/// the rest lowercased. Anything else is a word boundary and passes through.
///
/// # Examples
///
/// ```
/// use tablebook::reservation::title_case;
///
/// assert_eq!(title_case("гРиШанЯ ЛюТЫй"), "Гришаня Лютый");
/// assert_eq!(title_case("o'brien"), "O'Brien");
/// assert_eq!(title_case("ANNA-MARIA"), "Anna-Maria");
/// ```
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Validated input for creating a reservation.
///
/// A `NewReservation` is only obtainable through [`NewReservation::builder`],
/// so the customer name is always normalized and the duration always positive.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::{NewReservation, TableId};
///
/// let start = NaiveDate::from_ymd_opt(2025, 4, 13)
///     .unwrap()
///     .and_hms_opt(19, 30, 0)
///     .unwrap();
///
/// let candidate = NewReservation::builder(TableId::new(1), "  ivan petrov ", start)
///     .duration_minutes(90)
///     .build()
///     .unwrap();
///
/// assert_eq!(candidate.customer_name(), "Ivan Petrov");
/// assert_eq!(candidate.duration_minutes(), 90);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReservation {
    table_id: TableId,
    customer_name: String,
    reservation_time: NaiveDateTime,
    duration_minutes: u32,
}

impl NewReservation {
    /// Creates a new builder for a reservation on `table_id` starting at `start`.
    #[must_use]
    pub fn builder(
        table_id: TableId,
        customer_name: impl Into<String>,
        start: NaiveDateTime,
    ) -> NewReservationBuilder {
        NewReservationBuilder {
            table_id,
            customer_name: customer_name.into(),
            start,
            duration_minutes: None,
        }
    }

    /// Returns the table being booked.
    #[must_use]
    pub const fn table_id(&self) -> TableId {
        self.table_id
    }

    /// Returns the normalized customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the start of the reservation.
    #[must_use]
    pub const fn reservation_time(&self) -> NaiveDateTime {
        self.reservation_time
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the end of the naive interval `[start, start + duration)`.
    #[must_use]
    pub fn end_time(&self) -> NaiveDateTime {
        end_of(self.reservation_time, self.duration_minutes)
    }
}

/// Builder for [`NewReservation`].
#[derive(Debug)]
pub struct NewReservationBuilder {
    table_id: TableId,
    customer_name: String,
    start: NaiveDateTime,
    duration_minutes: Option<u32>,
}

impl NewReservationBuilder {
    /// Sets the duration in minutes.
    #[must_use]
    pub const fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Validates and normalizes the input.
    ///
    /// The customer name is trimmed and title-cased, and the start time is
    /// truncated to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer name is empty after trimming or longer than
    ///   [`MAX_CUSTOMER_NAME_LEN`] characters
    /// - The duration is missing or less than one minute
    pub fn build(self) -> Result<NewReservation, ValidationError> {
        let trimmed = self.customer_name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "customer_name".into(),
                message: "customer name must be non-empty after trimming whitespace".into(),
            });
        }
        if trimmed.chars().count() > MAX_CUSTOMER_NAME_LEN {
            return Err(ValidationError {
                field: "customer_name".into(),
                message: format!(
                    "customer name must be at most {MAX_CUSTOMER_NAME_LEN} characters"
                ),
            });
        }

        let duration_minutes = match self.duration_minutes {
            Some(minutes) if minutes >= 1 => minutes,
            Some(_) => {
                return Err(ValidationError {
                    field: "duration_minutes".into(),
                    message: "duration must be at least 1 minute".into(),
                })
            }
            None => {
                return Err(ValidationError {
                    field: "duration_minutes".into(),
                    message: "duration is required".into(),
                })
            }
        };

        let reservation_time = self.start.with_nanosecond(0).unwrap_or(self.start);

        Ok(NewReservation {
            table_id: self.table_id,
            customer_name: title_case(trimmed),
            reservation_time,
            duration_minutes,
        })
    }
}

/// A persisted reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    table_id: TableId,
    customer_name: String,
    reservation_time: NaiveDateTime,
    duration_minutes: u32,
}

impl Reservation {
    /// Attaches a store-assigned identifier to validated input.
    #[must_use]
    pub fn new(id: ReservationId, input: NewReservation) -> Self {
        Self {
            id,
            table_id: input.table_id,
            customer_name: input.customer_name,
            reservation_time: input.reservation_time,
            duration_minutes: input.duration_minutes,
        }
    }

    /// Rebuilds a reservation from stored columns without re-normalizing.
    pub(crate) const fn from_row(
        id: ReservationId,
        table_id: TableId,
        customer_name: String,
        reservation_time: NaiveDateTime,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id,
            table_id,
            customer_name,
            reservation_time,
            duration_minutes,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the booked table.
    #[must_use]
    pub const fn table_id(&self) -> TableId {
        self.table_id
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the start of the reservation.
    #[must_use]
    pub const fn reservation_time(&self) -> NaiveDateTime {
        self.reservation_time
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the end of the naive interval `[start, start + duration)`.
    #[must_use]
    pub fn end_time(&self) -> NaiveDateTime {
        end_of(self.reservation_time, self.duration_minutes)
    }
}

pub(crate) fn end_of(start: NaiveDateTime, minutes: u32) -> NaiveDateTime {
    start
        .checked_add_signed(Duration::minutes(i64::from(minutes)))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 13)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_title_case_mixed_scripts() {
        assert_eq!(title_case("гРиШанЯ ЛюТЫй"), "Гришаня Лютый");
        assert_eq!(title_case("john SMITH"), "John Smith");
        assert_eq!(title_case("o'brien"), "O'Brien");
    }

    #[test]
    fn test_title_case_digits_split_words() {
        assert_eq!(title_case("table4two"), "Table4Two");
        assert_eq!(title_case("42"), "42");
    }

    #[test]
    fn test_builder_normalizes_name() {
        let candidate = NewReservation::builder(TableId::new(1), "  aNNa  kArEnInA ", at(12, 0, 0))
            .duration_minutes(30)
            .build()
            .unwrap();
        assert_eq!(candidate.customer_name(), "Anna  Karenina");
    }

    #[test]
    fn test_builder_rejects_blank_name() {
        let err = NewReservation::builder(TableId::new(1), "   ", at(12, 0, 0))
            .duration_minutes(30)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "customer_name");
        assert!(err.message.contains("non-empty"));
    }

    #[test]
    fn test_builder_rejects_long_name() {
        let name = "a".repeat(MAX_CUSTOMER_NAME_LEN + 1);
        let err = NewReservation::builder(TableId::new(1), name, at(12, 0, 0))
            .duration_minutes(30)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "customer_name");

        let name = "я".repeat(MAX_CUSTOMER_NAME_LEN);
        assert!(NewReservation::builder(TableId::new(1), name, at(12, 0, 0))
            .duration_minutes(30)
            .build()
            .is_ok());
    }

    #[test]
    fn test_builder_rejects_zero_duration() {
        let err = NewReservation::builder(TableId::new(1), "anna", at(12, 0, 0))
            .duration_minutes(0)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "duration_minutes");
    }

    #[test]
    fn test_builder_requires_duration() {
        let err = NewReservation::builder(TableId::new(1), "anna", at(12, 0, 0))
            .build()
            .unwrap_err();
        assert_eq!(err.field, "duration_minutes");
        assert!(err.message.contains("required"));
    }

    #[test]
    fn test_builder_truncates_subseconds() {
        let start = at(12, 0, 5).with_nanosecond(250_000_000).unwrap();
        let candidate = NewReservation::builder(TableId::new(1), "anna", start)
            .duration_minutes(15)
            .build()
            .unwrap();
        assert_eq!(candidate.reservation_time(), at(12, 0, 5));
    }

    #[test]
    fn test_end_time() {
        let candidate = NewReservation::builder(TableId::new(1), "anna", at(23, 30, 0))
            .duration_minutes(60)
            .build()
            .unwrap();
        let end = candidate.end_time();
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2025, 4, 14).unwrap());
        assert_eq!(end.time(), at(0, 30, 0).time());
    }

    #[test]
    fn test_reservation_keeps_input_fields() {
        let candidate = NewReservation::builder(TableId::new(5), "anna", at(18, 0, 0))
            .duration_minutes(45)
            .build()
            .unwrap();
        let reservation = Reservation::new(ReservationId::new(9), candidate);

        assert_eq!(reservation.id(), ReservationId::new(9));
        assert_eq!(reservation.table_id(), TableId::new(5));
        assert_eq!(reservation.customer_name(), "Anna");
        assert_eq!(reservation.reservation_time(), at(18, 0, 0));
        assert_eq!(reservation.duration_minutes(), 45);
        assert_eq!(reservation.end_time(), at(18, 45, 0));
    }

    #[test]
    fn test_reservation_serializes_flat() {
        let candidate = NewReservation::builder(TableId::new(2), "anna", at(18, 0, 0))
            .duration_minutes(45)
            .build()
            .unwrap();
        let reservation = Reservation::new(ReservationId::new(3), candidate);

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["table_id"], 2);
        assert_eq!(json["customer_name"], "Anna");
        assert_eq!(json["reservation_time"], "2025-04-13T18:00:00");
        assert_eq!(json["duration_minutes"], 45);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            field: "customer_name".into(),
            message: "too long".into(),
        };
        assert_eq!(
            err.to_string(),
            "validation error for 'customer_name': too long"
        );
    }
}
