//! Plan types for table and reservation operations.
//!
//! A plan lists the database actions an operation will take. Plans are built
//! first and executed afterwards, which is what makes dry runs possible.

use crate::reservation::{NewReservation, ReservationId};
use crate::table::{NewTable, TableId};

/// A single action to be taken during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a new table.
    CreateTable(NewTable),

    /// Delete a table and, by cascade, its reservations.
    DeleteTable(TableId),

    /// Insert a reservation that has passed the conflict check.
    CreateReservation(NewReservation),

    /// Delete a reservation.
    DeleteReservation(ReservationId),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateTable(t) => format!(
                "Create table '{}' with {} seats at {}",
                t.name(),
                t.seats(),
                t.location()
            ),
            Self::DeleteTable(id) => format!("Delete table {id}"),
            Self::CreateReservation(r) => format!(
                "Reserve table {} for {} at {} ({} min)",
                r.table_id(),
                r.customer_name(),
                r.reservation_time().format("%Y-%m-%d %H:%M:%S"),
                r.duration_minutes()
            ),
            Self::DeleteReservation(id) => format!("Delete reservation {id}"),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans carry a description, the ordered actions, and any warnings that
/// should be shown to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Create table 'Bar'");
    /// assert_eq!(plan.description, "Create table 'Bar'");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::operations::{OperationPlan, PlanAction};
    /// use tablebook::TableId;
    ///
    /// let plan = OperationPlan::new("Cleanup")
    ///     .add_action(PlanAction::DeleteTable(TableId::new(3)));
    ///
    /// assert_eq!(plan.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
