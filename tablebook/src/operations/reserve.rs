//! Reservation creation planning.
//!
//! Planning a reservation is where the conflict rule is enforced: the table
//! must exist, and the candidate must not overlap any booking already on
//! that table. Run the plan and its execution inside one IMMEDIATE
//! transaction so no other writer can slip in between the check and the
//! insert.

use chrono::NaiveDateTime;
use rusqlite::Connection;

use crate::config::Config;
use crate::conflict;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{NewReservation, Reservation};
use crate::table::TableId;

use super::plan::{OperationPlan, PlanAction};

/// Raw input for a reserve operation.
///
/// The duration is optional; [`ReserveOptions::resolve`] falls back to the
/// configured `default_duration_minutes`.
#[derive(Debug, Clone)]
pub struct ReserveOptions {
    /// The table to book.
    pub table_id: TableId,

    /// Customer name as entered.
    pub customer_name: String,

    /// Start of the reservation.
    pub reservation_time: NaiveDateTime,

    /// Length of the booking, if given explicitly.
    pub duration_minutes: Option<u32>,
}

impl ReserveOptions {
    /// Creates options without an explicit duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tablebook::config::Config;
    /// use tablebook::operations::ReserveOptions;
    /// use tablebook::TableId;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap().and_hms_opt(19, 0, 0).unwrap();
    /// let config = Config { default_duration_minutes: Some(90), ..Default::default() };
    ///
    /// let candidate = ReserveOptions::new(TableId::new(1), "olga", start)
    ///     .resolve(&config)
    ///     .unwrap();
    /// assert_eq!(candidate.duration_minutes(), 90);
    /// assert_eq!(candidate.customer_name(), "Olga");
    /// ```
    #[must_use]
    pub fn new(
        table_id: TableId,
        customer_name: impl Into<String>,
        reservation_time: NaiveDateTime,
    ) -> Self {
        Self {
            table_id,
            customer_name: customer_name.into(),
            reservation_time,
            duration_minutes: None,
        }
    }

    /// Sets an explicit duration.
    #[must_use]
    pub const fn with_duration(mut self, minutes: Option<u32>) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Validates and normalizes the options into a [`NewReservation`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is invalid, or if no
    /// duration was given and the configuration has no default.
    pub fn resolve(&self, config: &Config) -> Result<NewReservation> {
        let mut builder = NewReservation::builder(
            self.table_id,
            self.customer_name.as_str(),
            self.reservation_time,
        );
        if let Some(minutes) = self.duration_minutes.or(config.default_duration_minutes) {
            builder = builder.duration_minutes(minutes);
        }
        Ok(builder.build()?)
    }
}

/// Plans the creation of a reservation.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use tablebook::operations::{CreateReservationPlan, PlanExecutor};
/// use tablebook::{Database, DatabaseConfig, NewReservation, TableId};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
/// let start = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap().and_hms_opt(20, 0, 0).unwrap();
/// let candidate = NewReservation::builder(TableId::new(1), "anna", start)
///     .duration_minutes(60)
///     .build()
///     .unwrap();
///
/// let tx = db.begin_transaction().unwrap();
/// let plan = CreateReservationPlan::new(candidate).build_plan(&tx).unwrap();
/// PlanExecutor::new(&tx).execute(&plan).unwrap();
/// tx.commit().unwrap();
/// ```
pub struct CreateReservationPlan {
    candidate: NewReservation,
}

impl CreateReservationPlan {
    /// Creates a planner for the given candidate.
    #[must_use]
    pub const fn new(candidate: NewReservation) -> Self {
        Self { candidate }
    }

    /// Builds the plan.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the table does not exist
    /// - [`Error::ReservationConflict`] if the candidate overlaps an existing
    ///   reservation on the same table
    /// - a database error if a lookup fails
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let table_id = self.candidate.table_id();
        if Database::get_table(conn, table_id)?.is_none() {
            return Err(Error::table_not_found(table_id));
        }

        let existing = Database::list_reservations_for_table(conn, table_id)?;
        self.check_conflicts(&existing)?;

        Ok(OperationPlan::new(format!(
            "Reserve table {table_id} for {}",
            self.candidate.customer_name()
        ))
        .add_action(PlanAction::CreateReservation(self.candidate.clone())))
    }

    /// Conflict stage: fails if the candidate overlaps any of `existing`.
    ///
    /// `existing` must already be limited to the candidate's table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationConflict`] naming the first booking hit.
    pub fn check_conflicts(&self, existing: &[Reservation]) -> Result<()> {
        match conflict::find_conflict(&self.candidate, existing)? {
            Some(hit) => {
                log::debug!(
                    "rejecting reservation on table {}: overlaps reservation {}",
                    self.candidate.table_id(),
                    hit.id()
                );
                Err(Error::reservation_conflict(hit))
            }
            None => Ok(()),
        }
    }
}
