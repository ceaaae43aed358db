//! Table commands.
//!
//! `table create`, `table list`, `table show` and `table delete`.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, plan_executor, print_records, report_plan, write_json,
    write_table, GlobalOptions, ListFormat, RecordFormat,
};
use clap::{Args, Subcommand, ValueEnum};
use tablebook::operations::{get_table, list_tables};
use tablebook::{
    CreateTablePlan, DeleteTablePlan, Location, NewTable, Table, TableFilter, TableId,
};

/// Column headers for table listings.
const COLUMN_HEADERS: [&str; 4] = ["id", "name", "seats", "location"];

/// Table subcommands.
#[derive(Subcommand)]
pub enum TableCommand {
    /// Create a table
    Create(CreateTableCommand),

    /// List tables
    List(ListTablesCommand),

    /// Show one table
    Show(ShowTableCommand),

    /// Delete a table and its reservations
    Delete(DeleteTableCommand),
}

impl TableCommand {
    /// Execute the selected subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self {
            Self::Create(cmd) => cmd.execute(global),
            Self::List(cmd) => cmd.execute(global),
            Self::Show(cmd) => cmd.execute(global),
            Self::Delete(cmd) => cmd.execute(global),
        }
    }
}

fn table_row(table: &Table) -> Vec<String> {
    vec![
        table.id().to_string(),
        table.name().to_string(),
        table.seats().to_string(),
        table.location().to_string(),
    ]
}

/// Create a table.
#[derive(Args)]
pub struct CreateTableCommand {
    /// Table name (1 to 50 characters)
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Number of seats (at least 1)
    #[arg(long, value_name = "N")]
    pub seats: u32,

    /// Location: Terrace, Basement, "Window hall" or Rooftop
    #[arg(long, value_name = "LOCATION")]
    pub location: String,

    /// Output format
    #[arg(long, value_enum, default_value = "id", ignore_case = true)]
    pub format: RecordFormat,

    /// Validate and show the plan without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateTableCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate input before touching the database
        let location = Location::parse(&self.location)?;
        let input = NewTable::new(&self.name, self.seats, location)?;

        // 2. Open database
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        // 3. Plan and execute inside one transaction
        let plan = CreateTablePlan::new(input).build_plan();
        let result = db.with_transaction(|tx| plan_executor(tx, self.dry_run).execute(&plan))?;

        report_plan(global, &result);

        // 4. Output
        if let Some(table) = result.table() {
            match self.format {
                RecordFormat::Id => println!("{}", table.id()),
                RecordFormat::Json => write_json(std::io::stdout().lock(), table)?,
            }
        }

        Ok(())
    }
}

/// List tables.
#[derive(Args)]
pub struct ListTablesCommand {
    /// Only tables in this location
    #[arg(long, value_name = "LOCATION")]
    pub location: Option<String>,

    /// Only tables whose name contains this text (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Only tables with at least one reservation
    #[arg(long)]
    pub has_reservations: bool,

    /// Output format (default from configuration, else table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

impl ListTablesCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Build filter
        let mut filter = TableFilter::new().with_reservations_only(self.has_reservations);
        if let Some(ref location) = self.location {
            filter = filter.with_location(Location::parse(location)?);
        }
        if let Some(name) = self.name {
            filter = filter.with_name(name)?;
        }

        // 2. Load configuration and open database
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        // 3. Query and output
        let tables = list_tables(db.connection(), &filter)?;
        let format = ListFormat::resolve(self.format, &config);
        print_records(format, &COLUMN_HEADERS, &tables, table_row)
    }
}

/// Format for `table show`.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ShowFormat {
    /// Tab-separated table format
    Table,
    /// JSON format
    Json,
}

/// Show one table.
#[derive(Args)]
pub struct ShowTableCommand {
    /// Table identifier
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: ShowFormat,
}

impl ShowTableCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let table = get_table(db.connection(), TableId::new(self.id))?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            ShowFormat::Table => write_table(&mut handle, &COLUMN_HEADERS, &[table_row(&table)]),
            ShowFormat::Json => write_json(&mut handle, &table),
        }
    }
}

/// Delete a table and, with it, every reservation on it.
#[derive(Args)]
pub struct DeleteTableCommand {
    /// Table identifier
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Show what would be deleted without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl DeleteTableCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let result = db.with_transaction(|tx| {
            let plan = DeleteTablePlan::new(TableId::new(self.id)).build_plan(tx)?;
            plan_executor(tx, self.dry_run).execute(&plan)
        })?;

        report_plan(global, &result);
        if !result.dry_run && !global.quiet {
            eprintln!("Deleted table {}", self.id);
        }

        Ok(())
    }
}
