//! Plan execution engine.
//!
//! The executor takes operation plans and applies them to a connection.
//! Callers that need atomicity pass a transaction, which derefs to a
//! connection, and commit once execution succeeds.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::table::Table;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// Tables created by the plan.
    pub created_tables: Vec<Table>,

    /// Reservations created by the plan.
    pub created_reservations: Vec<Reservation>,

    /// Number of rows removed by delete actions.
    pub deleted: usize,
}

impl ExecutionResult {
    fn for_plan(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            ..Self::default()
        }
    }

    /// The first table created, if any.
    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        self.created_tables.first()
    }

    /// The first reservation created, if any.
    #[must_use]
    pub fn reservation(&self) -> Option<&Reservation> {
        self.created_reservations.first()
    }
}

/// Executes operation plans against a connection.
///
/// # Examples
///
/// ```no_run
/// use tablebook::operations::{CreateTablePlan, PlanExecutor};
/// use tablebook::{Database, DatabaseConfig, Location, NewTable};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
/// let tx = db.begin_transaction().unwrap();
///
/// let plan = CreateTablePlan::new(NewTable::new("Bar", 2, Location::Rooftop).unwrap()).build_plan();
/// let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
/// tx.commit().unwrap();
///
/// println!("created table {}", result.table().unwrap().id());
/// ```
pub struct PlanExecutor<'a> {
    conn: &'a Connection,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode the plan is reported but the database is untouched.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails. Earlier actions are not undone
    /// here; roll back the surrounding transaction instead.
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::for_plan(plan, self.dry_run);
        if self.dry_run {
            log::info!("dry run: {}", plan.description);
            return Ok(result);
        }

        for action in &plan.actions {
            self.execute_action(action, &mut result)?;
        }

        log::debug!("executed plan: {}", plan.description);
        Ok(result)
    }

    fn execute_action(&self, action: &PlanAction, result: &mut ExecutionResult) -> Result<()> {
        match action {
            PlanAction::CreateTable(table) => {
                let created = Database::insert_table(self.conn, table)?;
                log::info!("created table {}", created.id());
                result.created_tables.push(created);
            }
            PlanAction::DeleteTable(id) => {
                if !Database::delete_table(self.conn, *id)? {
                    return Err(Error::table_not_found(*id));
                }
                result.deleted += 1;
            }
            PlanAction::CreateReservation(reservation) => {
                let created = Database::insert_reservation(self.conn, reservation)?;
                log::info!(
                    "created reservation {} on table {}",
                    created.id(),
                    created.table_id()
                );
                result.created_reservations.push(created);
            }
            PlanAction::DeleteReservation(id) => {
                if !Database::delete_reservation(self.conn, *id)? {
                    return Err(Error::reservation_not_found(*id));
                }
                result.deleted += 1;
            }
        }
        Ok(())
    }
}
