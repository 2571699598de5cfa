//! Currency denominations and platinum normalization.
//!
//! Every amount that reaches a session total is expressed in platinum.
//! The smaller denominations convert at fixed ratios:
//! 1 platinum = 10 gold = 100 silver = 1000 copper.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Unit words as they appear in coin loot messages
const UNIT_PLATINUM: &str = "platinum";
const UNIT_GOLD: &str = "gold";
const UNIT_SILVER: &str = "silver";
const UNIT_COPPER: &str = "copper";

/// A coin denomination found in loot messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    /// Base unit. All totals are kept in platinum.
    Platinum,
    /// One tenth of a platinum piece.
    Gold,
    /// One hundredth of a platinum piece.
    Silver,
    /// One thousandth of a platinum piece.
    Copper,
}

impl Denomination {
    /// How many coins of this denomination make up one platinum piece.
    pub fn per_platinum(self) -> i64 {
        match self {
            Denomination::Platinum => 1,
            Denomination::Gold => 10,
            Denomination::Silver => 100,
            Denomination::Copper => 1000,
        }
    }

    /// Convert a coin count in this denomination to platinum.
    ///
    /// The result is exact: the divisors are powers of ten, so the value
    /// is representable in a `Decimal` without rounding.
    pub fn to_platinum(self, amount: i64) -> Decimal {
        Decimal::new(amount, 0) / Decimal::new(self.per_platinum(), 0)
    }

    /// The unit word used in log messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Denomination::Platinum => UNIT_PLATINUM,
            Denomination::Gold => UNIT_GOLD,
            Denomination::Silver => UNIT_SILVER,
            Denomination::Copper => UNIT_COPPER,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Add two platinum amounts, saturating at the `Decimal` bounds.
///
/// A saturated sum is logged at WARN with the name of the total it feeds.
pub fn add_plat(total: Decimal, amount: Decimal, field: &'static str) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!(field, %total, %amount, "Platinum total overflowed, saturating");
        total.saturating_add(amount)
    })
}

/// A unit word that is not one of the four known denominations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown currency unit: {0:?}")]
pub struct UnknownDenomination(pub String);

impl FromStr for Denomination {
    type Err = UnknownDenomination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UNIT_PLATINUM => Ok(Denomination::Platinum),
            UNIT_GOLD => Ok(Denomination::Gold),
            UNIT_SILVER => Ok(Denomination::Silver),
            UNIT_COPPER => Ok(Denomination::Copper),
            other => Err(UnknownDenomination(other.to_string())),
        }
    }
}

/// A single `<amount> <unit>` drop from a coin loot message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinDrop {
    /// Number of coins. Zero when the amount token failed to parse.
    pub amount: i64,
    /// Denomination of the coins.
    pub denomination: Denomination,
}

impl CoinDrop {
    /// Create a new coin drop.
    pub fn new(amount: i64, denomination: Denomination) -> Self {
        Self {
            amount,
            denomination,
        }
    }

    /// Platinum value of this drop.
    pub fn platinum(&self) -> Decimal {
        self.denomination.to_platinum(self.amount)
    }
}
