//! Fixed unit codes for invoice line items.
//!
//! The set is closed: a submitted unit must match one of these tokens
//! exactly or the item is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Unit of measure for a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitCode {
    /// Counting
    Units,
    /// Minutes
    Min,
    /// Hours
    Hrs,
    /// Days
    Days,
    /// Weeks
    Weeks,
    /// Months
    Months,
    /// Meters
    M,
    /// Square meters
    Sqm,
    /// Liters
    L,
    /// Cubic meters
    Cbm,
    /// Kilograms
    Kg,
    /// Grams
    G,
    /// Tonnes
    T,
    /// Boxes
    Box,
    /// Packs
    Pack,
    /// Sets
    Set,
}

impl UnitCode {
    /// Every accepted unit code, in display order.
    pub const ALL: [UnitCode; 16] = [
        UnitCode::Units,
        UnitCode::Min,
        UnitCode::Hrs,
        UnitCode::Days,
        UnitCode::Weeks,
        UnitCode::Months,
        UnitCode::M,
        UnitCode::Sqm,
        UnitCode::L,
        UnitCode::Cbm,
        UnitCode::Kg,
        UnitCode::G,
        UnitCode::T,
        UnitCode::Box,
        UnitCode::Pack,
        UnitCode::Set,
    ];

    /// The wire/storage token for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCode::Units => "units",
            UnitCode::Min => "min",
            UnitCode::Hrs => "hrs",
            UnitCode::Days => "days",
            UnitCode::Weeks => "weeks",
            UnitCode::Months => "months",
            UnitCode::M => "m",
            UnitCode::Sqm => "sqm",
            UnitCode::L => "l",
            UnitCode::Cbm => "cbm",
            UnitCode::Kg => "kg",
            UnitCode::G => "g",
            UnitCode::T => "t",
            UnitCode::Box => "box",
            UnitCode::Pack => "pack",
            UnitCode::Set => "set",
        }
    }
}

impl fmt::Display for UnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for an unrecognized unit token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnit;

impl FromStr for UnitCode {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitCode::ALL
            .iter()
            .find(|unit| unit.as_str() == s)
            .copied()
            .ok_or(UnknownUnit)
    }
}
