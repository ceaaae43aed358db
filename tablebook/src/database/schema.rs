//! Database schema definitions and SQL constants.

/// Current schema version for the database.
///
/// Stored in the metadata table and checked on every open.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Text format of `reservations.reservation_time`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the dining tables table.
///
/// `location` holds the display form of a location.
pub const CREATE_DINING_TABLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS dining_tables (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        seats INTEGER NOT NULL CHECK (seats >= 1),
        location TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Rows are removed together with their table.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        table_id INTEGER NOT NULL REFERENCES dining_tables(id) ON DELETE CASCADE,
        customer_name TEXT NOT NULL,
        reservation_time TEXT NOT NULL,
        duration_minutes INTEGER NOT NULL CHECK (duration_minutes >= 1)
    )";

/// SQL statement to create an index on `reservations.table_id`.
///
/// Every conflict check loads reservations by table.
pub const CREATE_TABLE_ID_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_table_id ON reservations(table_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub(super) const INSERT_TABLE: &str =
    "INSERT INTO dining_tables (name, seats, location) VALUES (?, ?, ?)";

pub(super) const SELECT_TABLE: &str =
    "SELECT id, name, seats, location FROM dining_tables WHERE id = ?";

pub(super) const LIST_TABLES: &str =
    "SELECT id, name, seats, location FROM dining_tables ORDER BY id";

pub(super) const DELETE_TABLE: &str = "DELETE FROM dining_tables WHERE id = ?";

pub(super) const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (table_id, customer_name, reservation_time, duration_minutes)
    VALUES (?, ?, ?, ?)
";

pub(super) const SELECT_RESERVATION: &str = r"
    SELECT id, table_id, customer_name, reservation_time, duration_minutes
    FROM reservations
    WHERE id = ?
";

pub(super) const LIST_RESERVATIONS: &str = r"
    SELECT id, table_id, customer_name, reservation_time, duration_minutes
    FROM reservations
    ORDER BY id
";

pub(super) const LIST_RESERVATIONS_FOR_TABLE: &str = r"
    SELECT id, table_id, customer_name, reservation_time, duration_minutes
    FROM reservations
    WHERE table_id = ?
    ORDER BY reservation_time, id
";

pub(super) const COUNT_RESERVATIONS_FOR_TABLE: &str =
    "SELECT COUNT(*) FROM reservations WHERE table_id = ?";

pub(super) const SELECT_BOOKED_TABLE_IDS: &str = "SELECT DISTINCT table_id FROM reservations";

pub(super) const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";
