use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A `<unit>/<subslot>/<port>` port address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PortAddress {
    pub unit: u32,
    pub subslot: u32,
    pub port: u32,
}

/// Errors returned when a port address cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    #[error("expected <unit>/<subslot>/<port>, got '{0}'")]
    Shape(String),
    #[error("invalid number '{value}' in port address '{input}'")]
    Number { input: String, value: String },
}

impl PortAddress {
    pub fn new(unit: u32, subslot: u32, port: u32) -> Self {
        Self {
            unit,
            subslot,
            port,
        }
    }

    /// Shift a zero-based subslot to the one-based convention.
    ///
    /// Returns `None` when the subslot has no successor.
    pub fn with_one_based_subslot(self) -> Option<Self> {
        let subslot = self.subslot.checked_add(1)?;
        Some(Self { subslot, ..self })
    }
}

impl FromStr for PortAddress {
    type Err = AddressParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.trim().split('/').collect();
        let [unit, subslot, port] = parts.as_slice() else {
            return Err(AddressParseError::Shape(input.to_string()));
        };
        Ok(Self {
            unit: parse_part(input, unit)?,
            subslot: parse_part(input, subslot)?,
            port: parse_part(input, port)?,
        })
    }
}

impl Display for PortAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.unit, self.subslot, self.port)
    }
}

fn parse_part(input: &str, value: &str) -> Result<u32, AddressParseError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressParseError::Number {
            input: input.to_string(),
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| AddressParseError::Number {
        input: input.to_string(),
        value: value.to_string(),
    })
}
