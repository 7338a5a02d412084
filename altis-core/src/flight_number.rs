use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

const MAX_ROUTE_NUMBER: u16 = 9999;

/// A validated flight number: a two letter uppercase airline code followed by
/// a route number no greater than 9999 (e.g. `BA1654`).
///
/// Validation happens once, in [`FlightNumber::new`]; the value is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlightNumber {
    number: String,
    route: u16,
}

impl FlightNumber {
    /// Validates `number`.
    ///
    /// Rules are checked in order and the first one that fails decides the error:
    /// the first two characters must be alphabetic, then both uppercase, then the
    /// remainder must be a non-empty run of ASCII digits with a value of at most 9999.
    pub fn new(number: impl Into<String>) -> CoreResult<Self> {
        let number = number.into();

        let code: Vec<char> = number.chars().take(2).collect();
        if code.is_empty() || !code.iter().all(|c| c.is_alphabetic()) {
            return Err(CoreError::MissingAirlineCode(number));
        }
        if !code.iter().all(|c| c.is_uppercase()) {
            return Err(CoreError::InvalidAirlineCode(number));
        }

        let route_text = &number[code.iter().map(|c| c.len_utf8()).sum::<usize>()..];
        if route_text.is_empty() || !route_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidRouteNumber(number));
        }
        // Overflowing u16 is just another way of exceeding the limit.
        let route = match route_text.parse::<u16>() {
            Ok(route) if route <= MAX_ROUTE_NUMBER => route,
            _ => return Err(CoreError::InvalidRouteNumber(number)),
        };

        Ok(Self { number, route })
    }

    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// The two character airline code.
    pub fn airline(&self) -> &str {
        let end = self
            .number
            .char_indices()
            .nth(2)
            .map_or(self.number.len(), |(idx, _)| idx);
        &self.number[..end]
    }

    pub fn route_number(&self) -> u16 {
        self.route
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

impl FromStr for FlightNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FlightNumber {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FlightNumber> for String {
    fn from(value: FlightNumber) -> Self {
        value.number
    }
}
