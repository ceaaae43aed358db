//! Table creation and deletion planning.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::table::{NewTable, TableId};

use super::plan::{OperationPlan, PlanAction};

/// Plans the creation of a table.
///
/// The input is already validated by [`NewTable::new`], so planning cannot
/// fail and needs no database access.
///
/// # Examples
///
/// ```
/// use tablebook::operations::{CreateTablePlan, PlanAction};
/// use tablebook::{Location, NewTable};
///
/// let table = NewTable::new("  Bar  ", 2, Location::Rooftop).unwrap();
/// let plan = CreateTablePlan::new(table).build_plan();
/// assert!(matches!(&plan.actions[0], PlanAction::CreateTable(t) if t.name() == "Bar"));
/// ```
pub struct CreateTablePlan {
    table: NewTable,
}

impl CreateTablePlan {
    /// Creates a planner for the given table.
    #[must_use]
    pub const fn new(table: NewTable) -> Self {
        Self { table }
    }

    /// Builds the plan.
    #[must_use]
    pub fn build_plan(&self) -> OperationPlan {
        OperationPlan::new(format!("Create table '{}'", self.table.name()))
            .add_action(PlanAction::CreateTable(self.table.clone()))
    }
}

/// Plans the deletion of a table.
pub struct DeleteTablePlan {
    id: TableId,
}

impl DeleteTablePlan {
    /// Creates a planner for deleting the given table.
    #[must_use]
    pub const fn new(id: TableId) -> Self {
        Self { id }
    }

    /// Builds the plan, warning about reservations that go with the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the table does not exist, or a database
    /// error if the lookup fails.
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let table = Database::get_table(conn, self.id)?
            .ok_or_else(|| Error::table_not_found(self.id))?;

        let mut plan =
            OperationPlan::new(format!("Delete table {} '{}'", table.id(), table.name()))
                .add_action(PlanAction::DeleteTable(self.id));

        let cascaded = Database::count_reservations_for_table(conn, self.id)?;
        if cascaded > 0 {
            let noun = if cascaded == 1 { "reservation" } else { "reservations" };
            plan = plan.add_warning(format!(
                "Deleting table {} also removes {cascaded} {noun}",
                self.id
            ));
        }

        Ok(plan)
    }
}
