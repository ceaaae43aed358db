//! Seating locations.
//!
//! A table sits in exactly one of a fixed set of locations. Input is accepted
//! in a lowercase wire form (case-insensitively); storage and display always
//! use the canonical display form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Where in the restaurant a table is placed.
///
/// # Examples
///
/// ```
/// use tablebook::Location;
///
/// let location: Location = "WINDOW HALL".parse().unwrap();
/// assert_eq!(location, Location::WindowHall);
/// assert_eq!(location.to_string(), "Window hall");
/// assert_eq!(location.wire_name(), "window hall");
///
/// assert!("cloakroom".parse::<Location>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    /// Outdoor terrace.
    Terrace,
    /// Basement hall.
    Basement,
    /// Main hall, by the windows.
    WindowHall,
    /// Rooftop.
    Rooftop,
}

impl Location {
    /// All locations, in display order.
    pub const ALL: [Self; 4] = [Self::Terrace, Self::Basement, Self::WindowHall, Self::Rooftop];

    /// Returns the lowercase form accepted on input.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Terrace => "terrace",
            Self::Basement => "basement",
            Self::WindowHall => "window hall",
            Self::Rooftop => "rooftop",
        }
    }

    /// Returns the canonical display form used for storage and output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Terrace => "Terrace",
            Self::Basement => "Basement",
            Self::WindowHall => "Window hall",
            Self::Rooftop => "Rooftop",
        }
    }

    /// Parses a location from user input.
    ///
    /// Surrounding whitespace is ignored, runs of inner whitespace collapse to
    /// one space, and case does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocation`] if the value names no known location.
    pub fn parse(value: &str) -> Result<Self> {
        let normalized = value
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|location| location.wire_name() == normalized)
            .ok_or_else(|| Error::InvalidLocation {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_forms() {
        assert_eq!(Location::parse("terrace").unwrap(), Location::Terrace);
        assert_eq!(Location::parse("basement").unwrap(), Location::Basement);
        assert_eq!(Location::parse("window hall").unwrap(), Location::WindowHall);
        assert_eq!(Location::parse("rooftop").unwrap(), Location::Rooftop);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Location::parse("Terrace").unwrap(), Location::Terrace);
        assert_eq!(Location::parse("ROOFTOP").unwrap(), Location::Rooftop);
        assert_eq!(Location::parse("Window Hall").unwrap(), Location::WindowHall);
    }

    #[test]
    fn test_parse_normalizes_whitespace() {
        assert_eq!(
            Location::parse("  window   hall ").unwrap(),
            Location::WindowHall
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for value in ["cloakroom", "roof", "", "terrace2", "window-hall"] {
            let err = Location::parse(value).unwrap_err();
            assert!(
                matches!(err, Error::InvalidLocation { .. }),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Location::Terrace.to_string(), "Terrace");
        assert_eq!(Location::WindowHall.to_string(), "Window hall");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for location in Location::ALL {
            assert_eq!(Location::parse(location.display_name()).unwrap(), location);
        }
    }

    #[test]
    fn test_serde_uses_display_form() {
        let json = serde_json::to_string(&Location::WindowHall).unwrap();
        assert_eq!(json, "\"Window hall\"");

        let parsed: Location = serde_json::from_str("\"basement\"").unwrap();
        assert_eq!(parsed, Location::Basement);

        assert!(serde_json::from_str::<Location>("\"attic\"").is_err());
    }
}
