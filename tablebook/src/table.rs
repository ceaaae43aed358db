//! Dining table types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::location::Location;

/// Maximum length of a table name, in characters.
pub const MAX_TABLE_NAME_LEN: usize = 50;

/// A store-assigned table identifier.
///
/// # Examples
///
/// ```
/// use tablebook::TableId;
///
/// let id = TableId::new(4);
/// assert_eq!(id.value(), 4);
/// assert_eq!(id.to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(i64);

impl TableId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated input for creating a table.
///
/// # Examples
///
/// ```
/// use tablebook::{Location, NewTable};
///
/// let table = NewTable::new(" Table 7 ", 4, "terrace".parse().unwrap()).unwrap();
/// assert_eq!(table.name(), "Table 7");
/// assert_eq!(table.location(), Location::Terrace);
///
/// assert!(NewTable::new("", 4, Location::Terrace).is_err());
/// assert!(NewTable::new("Table 8", 0, Location::Terrace).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTable {
    name: String,
    seats: u32,
    location: Location,
}

impl NewTable {
    /// Validates table input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the trimmed name is empty or longer than
    /// [`MAX_TABLE_NAME_LEN`] characters, or if `seats` is zero.
    pub fn new(name: &str, seats: u32, location: Location) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                field: "name".into(),
                message: "table name must be non-empty after trimming whitespace".into(),
            });
        }
        if name.chars().count() > MAX_TABLE_NAME_LEN {
            return Err(Error::Validation {
                field: "name".into(),
                message: format!("table name must be at most {MAX_TABLE_NAME_LEN} characters"),
            });
        }
        if seats == 0 {
            return Err(Error::Validation {
                field: "seats".into(),
                message: "a table must have at least 1 seat".into(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            seats,
            location,
        })
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat count.
    #[must_use]
    pub const fn seats(&self) -> u32 {
        self.seats
    }

    /// Returns the location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }
}

/// A persisted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: TableId,
    name: String,
    seats: u32,
    location: Location,
}

impl Table {
    /// Attaches a store-assigned identifier to validated input.
    #[must_use]
    pub fn new(id: TableId, input: NewTable) -> Self {
        Self {
            id,
            name: input.name,
            seats: input.seats,
            location: input.location,
        }
    }

    pub(crate) const fn from_row(id: TableId, name: String, seats: u32, location: Location) -> Self {
        Self {
            id,
            name,
            seats,
            location,
        }
    }

    /// Returns the table identifier.
    #[must_use]
    pub const fn id(&self) -> TableId {
        self.id
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat count.
    #[must_use]
    pub const fn seats(&self) -> u32 {
        self.seats
    }

    /// Returns the location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }
}
