//! Reservation commands.
//!
//! `reservation create` is the command that enforces the overlap rule: the
//! plan is built and executed inside one IMMEDIATE transaction, so two
//! processes booking the same slot cannot both succeed.

use crate::error::CliError;
use crate::utils::{
    format_datetime, load_configuration, open_database, parse_datetime, plan_executor,
    print_records, report_plan, write_json, GlobalOptions, ListFormat, RecordFormat,
};
use clap::{Args, Subcommand};
use tablebook::operations::list_reservations;
use tablebook::{
    CreateReservationPlan, DeleteReservationPlan, Reservation, ReservationFilter, ReservationId,
    ReserveOptions, TableId,
};

/// Column headers for reservation listings.
const COLUMN_HEADERS: [&str; 5] = [
    "id",
    "table_id",
    "customer_name",
    "reservation_time",
    "duration_minutes",
];

/// Reservation subcommands.
#[derive(Subcommand)]
pub enum ReservationCommand {
    /// Book a table for a time slot
    Create(CreateReservationCommand),

    /// List reservations
    List(ListReservationsCommand),

    /// Cancel a reservation
    Delete(DeleteReservationCommand),
}

impl ReservationCommand {
    /// Execute the selected subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self {
            Self::Create(cmd) => cmd.execute(global),
            Self::List(cmd) => cmd.execute(global),
            Self::Delete(cmd) => cmd.execute(global),
        }
    }
}

fn reservation_row(reservation: &Reservation) -> Vec<String> {
    vec![
        reservation.id().to_string(),
        reservation.table_id().to_string(),
        reservation.customer_name().to_string(),
        format_datetime(reservation.reservation_time()),
        reservation.duration_minutes().to_string(),
    ]
}

/// Book a table.
#[derive(Args)]
pub struct CreateReservationCommand {
    /// Table to book
    #[arg(long, value_name = "ID")]
    pub table_id: i64,

    /// Customer name (normalized to title case)
    #[arg(long, value_name = "NAME")]
    pub customer: String,

    /// Start time, e.g. 2025-04-13T19:30
    #[arg(long, value_name = "DATETIME")]
    pub at: String,

    /// Length in minutes (default from configuration)
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value = "id", ignore_case = true)]
    pub format: RecordFormat,

    /// Check for conflicts without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateReservationCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse and validate input
        let start = parse_datetime(&self.at)?;
        let config = load_configuration(global)?;
        let candidate = ReserveOptions::new(TableId::new(self.table_id), self.customer, start)
            .with_duration(self.duration)
            .resolve(&config)?;

        // 2. Open database
        let mut db = open_database(global, &config)?;

        // 3. Read, check and write under the write lock
        let result = db.with_transaction(|tx| {
            let plan = CreateReservationPlan::new(candidate).build_plan(tx)?;
            plan_executor(tx, self.dry_run).execute(&plan)
        })?;

        report_plan(global, &result);

        // 4. Output
        if let Some(reservation) = result.reservation() {
            match self.format {
                RecordFormat::Id => println!("{}", reservation.id()),
                RecordFormat::Json => write_json(std::io::stdout().lock(), reservation)?,
            }
        }

        Ok(())
    }
}

/// List reservations.
#[derive(Args)]
pub struct ListReservationsCommand {
    /// Only reservations on this table
    #[arg(long, value_name = "ID")]
    pub table_id: Option<i64>,

    /// Only customers whose name contains this text (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub customer: Option<String>,

    /// Only reservations whose start (YYYY-MM-DDTHH:MM) contains this text
    #[arg(long, value_name = "TEXT")]
    pub time: Option<String>,

    /// Output format (default from configuration, else table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

impl ListReservationsCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Build filter
        let mut filter = ReservationFilter::new();
        if let Some(table_id) = self.table_id {
            filter = filter.with_table_id(TableId::new(table_id));
        }
        if let Some(customer) = self.customer {
            filter = filter.with_customer_name(customer)?;
        }
        if let Some(time) = self.time {
            filter = filter.with_reservation_time(time);
        }

        // 2. Load configuration and open database
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        // 3. Query and output
        let reservations = list_reservations(db.connection(), &filter)?;
        let format = ListFormat::resolve(self.format, &config);
        print_records(format, &COLUMN_HEADERS, &reservations, reservation_row)
    }
}

/// Cancel a reservation.
#[derive(Args)]
pub struct DeleteReservationCommand {
    /// Reservation identifier
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Show what would be deleted without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl DeleteReservationCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let result = db.with_transaction(|tx| {
            let plan = DeleteReservationPlan::new(ReservationId::new(self.id)).build_plan(tx)?;
            plan_executor(tx, self.dry_run).execute(&plan)
        })?;

        report_plan(global, &result);
        if !result.dry_run && !global.quiet {
            eprintln!("Deleted reservation {}", self.id);
        }

        Ok(())
    }
}
