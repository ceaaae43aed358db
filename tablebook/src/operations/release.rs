//! Reservation deletion planning.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::ReservationId;

use super::plan::{OperationPlan, PlanAction};

/// Plans the deletion of a reservation.
///
/// Unlike a release that tolerates absent records, deleting an unknown id
/// is an error: callers get [`Error::NotFound`].
///
/// # Examples
///
/// ```no_run
/// use tablebook::operations::DeleteReservationPlan;
/// use tablebook::{Database, DatabaseConfig, ReservationId};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
/// let err = DeleteReservationPlan::new(ReservationId::new(404))
///     .build_plan(db.connection())
///     .unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub struct DeleteReservationPlan {
    id: ReservationId,
}

impl DeleteReservationPlan {
    /// Creates a planner for deleting the given reservation.
    #[must_use]
    pub const fn new(id: ReservationId) -> Self {
        Self { id }
    }

    /// Builds the plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has this id.
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let reservation = Database::get_reservation(conn, self.id)?
            .ok_or_else(|| Error::reservation_not_found(self.id))?;

        Ok(OperationPlan::new(format!(
            "Delete reservation {} for {} on table {}",
            reservation.id(),
            reservation.customer_name(),
            reservation.table_id()
        ))
        .add_action(PlanAction::DeleteReservation(self.id)))
    }
}
