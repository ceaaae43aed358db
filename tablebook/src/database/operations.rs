//! Database CRUD operations for tables and reservations.
//!
//! All functions take a `&Connection` so they run unchanged inside a
//! transaction (a `Transaction` derefs to a `Connection`). None of them open a
//! transaction of their own.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::location::Location;
use crate::reservation::{NewReservation, Reservation, ReservationId};
use crate::table::{NewTable, Table, TableId};

use super::connection::Database;
use super::schema::{
    COUNT_RESERVATIONS_FOR_TABLE, DELETE_RESERVATION, DELETE_TABLE, INSERT_RESERVATION,
    INSERT_TABLE, LIST_RESERVATIONS, LIST_RESERVATIONS_FOR_TABLE, LIST_TABLES,
    SELECT_BOOKED_TABLE_IDS, SELECT_RESERVATION, SELECT_TABLE, TIMESTAMP_FORMAT,
};

/// Deserializes a table from a row of `id, name, seats, location`.
fn row_to_table(row: &rusqlite::Row<'_>) -> rusqlite::Result<Table> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let seats: u32 = row.get(2)?;
    let location: String = row.get(3)?;

    let location = Location::parse(&location)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Table::from_row(TableId::new(id), name, seats, location))
}

/// Deserializes a reservation from a row of
/// `id, table_id, customer_name, reservation_time, duration_minutes`.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let table_id: i64 = row.get(1)?;
    let customer_name: String = row.get(2)?;
    let reservation_time: String = row.get(3)?;
    let duration_minutes: u32 = row.get(4)?;

    let reservation_time = NaiveDateTime::parse_from_str(&reservation_time, TIMESTAMP_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Reservation::from_row(
        ReservationId::new(id),
        TableId::new(table_id),
        customer_name,
        reservation_time,
        duration_minutes,
    ))
}

impl Database {
    /// Inserts a table and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tablebook::database::{Database, DatabaseConfig};
    /// use tablebook::{Location, NewTable};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// let table = Database::insert_table(&tx, &NewTable::new("Bar", 4, Location::Terrace).unwrap()).unwrap();
    /// tx.commit().unwrap();
    /// println!("created table {}", table.id());
    /// ```
    pub fn insert_table(conn: &Connection, table: &NewTable) -> Result<Table> {
        conn.execute(
            INSERT_TABLE,
            params![table.name(), table.seats(), table.location().display_name()],
        )?;
        let id = TableId::new(conn.last_insert_rowid());
        log::debug!("inserted table {id}");
        Ok(Table::new(id, table.clone()))
    }

    /// Retrieves a table by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_table(conn: &Connection, id: TableId) -> Result<Option<Table>> {
        conn.query_row(SELECT_TABLE, [id.value()], row_to_table)
            .optional()
            .map_err(Error::from)
    }

    /// Lists all tables ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_tables(conn: &Connection) -> Result<Vec<Table>> {
        let mut stmt = conn.prepare(LIST_TABLES)?;
        let tables = stmt
            .query_map([], row_to_table)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(tables)
    }

    /// Deletes a table and, through the foreign key, its reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the table was found and deleted
    /// - `Ok(false)` if the table was not found
    pub fn delete_table(conn: &Connection, id: TableId) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_TABLE, [id.value()])?;
        Ok(rows_affected > 0)
    }

    /// Inserts a reservation and returns it with its assigned id.
    ///
    /// No conflict check happens here.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the table does
    /// not exist.
    pub fn insert_reservation(conn: &Connection, reservation: &NewReservation) -> Result<Reservation> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.table_id().value(),
                reservation.customer_name(),
                reservation
                    .reservation_time()
                    .format(TIMESTAMP_FORMAT)
                    .to_string(),
                reservation.duration_minutes(),
            ],
        )?;
        let id = ReservationId::new(conn.last_insert_rowid());
        log::debug!(
            "inserted reservation {id} on table {}",
            reservation.table_id()
        );
        Ok(Reservation::new(id, reservation.clone()))
    }

    /// Retrieves a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        conn.query_row(SELECT_RESERVATION, [id.value()], row_to_reservation)
            .optional()
            .map_err(Error::from)
    }

    /// Lists all reservations ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }

    /// Lists the reservations of one table ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_reservations_for_table(
        conn: &Connection,
        table_id: TableId,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS_FOR_TABLE)?;
        let reservations = stmt
            .query_map([table_id.value()], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }

    /// Counts the reservations of one table.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_reservations_for_table(conn: &Connection, table_id: TableId) -> Result<usize> {
        let count: i64 =
            conn.query_row(COUNT_RESERVATIONS_FOR_TABLE, [table_id.value()], |row| {
                row.get(0)
            })?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Returns the ids of all tables that have at least one reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn booked_table_ids(conn: &Connection) -> Result<HashSet<TableId>> {
        let mut stmt = conn.prepare(SELECT_BOOKED_TABLE_IDS)?;
        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0).map(TableId::new))?
            .collect::<std::result::Result<HashSet<_>, rusqlite::Error>>()?;
        Ok(ids)
    }

    /// Deletes a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and deleted
    /// - `Ok(false)` if the reservation was not found
    pub fn delete_reservation(conn: &Connection, id: ReservationId) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_RESERVATION, [id.value()])?;
        Ok(rows_affected > 0)
    }
}
