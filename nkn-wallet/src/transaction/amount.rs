//! Token amounts in smallest units

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Decimal places of one NKN
pub const AMOUNT_DECIMALS: u32 = 8;

/// Smallest units per NKN
pub const AMOUNT_MULTIPLIER: i64 = 100_000_000;

/// An amount already scaled to smallest units.
///
/// Scaling from a [`Decimal`] happens exactly once, in [`Amount::from_decimal`];
/// digits past the eighth decimal place are floored away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(i64);

impl Amount {
    /// Zero amount
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from smallest units
    pub fn from_units(units: i64) -> Result<Self> {
        if units < 0 {
            return Err(Error::InvalidArgument(format!("amount {} is negative", units)));
        }
        Ok(Self(units))
    }

    /// Scale a decimal NKN value to smallest units
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(Error::InvalidArgument(format!("amount {} is negative", value)));
        }

        value
            .checked_mul(Decimal::from(AMOUNT_MULTIPLIER))
            .map(|scaled| scaled.floor())
            .and_then(|scaled| scaled.to_i64())
            .map(Self)
            .ok_or_else(|| Error::InvalidArgument(format!("amount {} is out of range", value)))
    }

    /// Smallest units
    pub fn units(&self) -> i64 {
        self.0
    }

    /// Value in NKN
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, AMOUNT_DECIMALS).normalize()
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| Error::InvalidArgument(format!("invalid amount {:?}: {}", s, e)))?;
        Self::from_decimal(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = Error;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::from_decimal(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
