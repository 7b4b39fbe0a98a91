//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// ISO 4217 currency codes used by partnership deals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// British Pound Sterling
    #[default]
    GBP,
    /// Euro
    EUR,
    /// United States Dollar
    USD,
    /// Swiss Franc
    CHF,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::CHF => "CHF",
        }
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GBP => "£",
            Currency::EUR => "€",
            Currency::USD => "$",
            Currency::CHF => "CHF",
        }
    }

    /// Parses a currency from a string code, ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "GBP" => Some(Currency::GBP),
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "CHF" => Some(Currency::CHF),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CoreError::invalid_value("currency", s))
    }
}
