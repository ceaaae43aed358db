//! Read-side operations: lookups and filtered listings.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::location::Location;
use crate::reservation::{Reservation, ReservationId};
use crate::table::{Table, TableId};

/// Maximum length of the table name filter.
pub const MAX_TABLE_NAME_FILTER_LEN: usize = 10;

/// Maximum length of the customer name filter.
pub const MAX_CUSTOMER_FILTER_LEN: usize = 50;

/// Format reservation starts are rendered in for the time filter.
pub const TIME_FILTER_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn check_filter_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::Validation {
            field: field.into(),
            message: format!("filter must be at most {max} characters"),
        });
    }
    Ok(())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter for listing tables. All criteria must match.
///
/// # Examples
///
/// ```
/// use tablebook::operations::TableFilter;
/// use tablebook::Location;
///
/// let filter = TableFilter::new()
///     .with_location(Location::WindowHall)
///     .with_name("booth")
///     .unwrap();
/// assert!(TableFilter::new().with_name("far too long").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableFilter {
    location: Option<Location>,
    name: Option<String>,
    has_reservations: bool,
}

impl TableFilter {
    /// A filter that matches every table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only tables at `location`.
    #[must_use]
    pub const fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Keep only tables whose name contains `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `name` is longer than
    /// [`MAX_TABLE_NAME_FILTER_LEN`] characters.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_filter_len("name", &name, MAX_TABLE_NAME_FILTER_LEN)?;
        self.name = Some(name);
        Ok(self)
    }

    /// Keep only tables with at least one reservation.
    #[must_use]
    pub const fn with_reservations_only(mut self, only: bool) -> Self {
        self.has_reservations = only;
        self
    }

    fn matches(&self, table: &Table) -> bool {
        self.location.is_none_or(|l| l == table.location())
            && self
                .name
                .as_deref()
                .is_none_or(|n| contains_ignore_case(table.name(), n))
    }
}

/// Filter for listing reservations. All criteria must match.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    table_id: Option<TableId>,
    customer_name: Option<String>,
    reservation_time: Option<String>,
}

impl ReservationFilter {
    /// A filter that matches every reservation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only reservations on `table_id`.
    #[must_use]
    pub const fn with_table_id(mut self, table_id: TableId) -> Self {
        self.table_id = Some(table_id);
        self
    }

    /// Keep only reservations whose customer name contains `name`,
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `name` is longer than
    /// [`MAX_CUSTOMER_FILTER_LEN`] characters.
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_filter_len("customer_name", &name, MAX_CUSTOMER_FILTER_LEN)?;
        self.customer_name = Some(name);
        Ok(self)
    }

    /// Keep only reservations whose start, rendered as
    /// [`TIME_FILTER_FORMAT`], contains `text`. `"2025-04-13"` selects a
    /// day and `"T19:"` selects an hour on any day.
    #[must_use]
    pub fn with_reservation_time(mut self, text: impl Into<String>) -> Self {
        self.reservation_time = Some(text.into());
        self
    }

    fn matches(&self, reservation: &Reservation) -> bool {
        self.table_id.is_none_or(|id| id == reservation.table_id())
            && self
                .customer_name
                .as_deref()
                .is_none_or(|n| contains_ignore_case(reservation.customer_name(), n))
            && self.reservation_time.as_deref().is_none_or(|t| {
                reservation
                    .reservation_time()
                    .format(TIME_FILTER_FORMAT)
                    .to_string()
                    .contains(t)
            })
    }
}

/// Returns the table with `id`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if it does not exist.
pub fn get_table(conn: &Connection, id: TableId) -> Result<Table> {
    Database::get_table(conn, id)?.ok_or_else(|| Error::table_not_found(id))
}

/// Returns the reservation with `id`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if it does not exist.
pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Reservation> {
    Database::get_reservation(conn, id)?.ok_or_else(|| Error::reservation_not_found(id))
}

/// Lists tables matching `filter`, ordered by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tables(conn: &Connection, filter: &TableFilter) -> Result<Vec<Table>> {
    let booked = if filter.has_reservations {
        Some(Database::booked_table_ids(conn)?)
    } else {
        None
    };

    Ok(Database::list_tables(conn)?
        .into_iter()
        .filter(|t| filter.matches(t))
        .filter(|t| booked.as_ref().is_none_or(|ids| ids.contains(&t.id())))
        .collect())
}

/// Lists reservations matching `filter`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_reservations(
    conn: &Connection,
    filter: &ReservationFilter,
) -> Result<Vec<Reservation>> {
    let rows = match filter.table_id {
        Some(table_id) => Database::list_reservations_for_table(conn, table_id)?,
        None => Database::list_reservations(conn)?,
    };
    Ok(rows.into_iter().filter(|r| filter.matches(r)).collect())
}
