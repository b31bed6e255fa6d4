// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fixed-point amounts for balances and transfers.
//!
//! Amounts are held as a signed count of micro-units (six decimal places).
//! Arithmetic on balances is exact, and so is the JSON form: an amount is
//! written as its decimal text and read back from the literal digits of the
//! incoming number, never through `f64`. Extra decimals on input are rounded
//! half away from zero to the nearest micro-unit.
//!
//! ```rust,ignore
//! let amount: Amount = "40".parse()?;
//! assert_eq!(amount.to_string(), "40.000000");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Micro-units per whole unit.
pub const MICROS_PER_UNIT: i64 = 1_000_000;

/// Decimal places carried by an amount.
const SCALE: i64 = 6;

/// Digits in `u64::MAX`; anything longer cannot fit.
const MAX_DIGITS: usize = 20;

/// Errors that can occur when building an amount from an external value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount {0:?} is not a decimal number")]
    Malformed(String),

    #[error("Amount {0} is outside the representable range")]
    OutOfRange(String),
}

/// A signed amount with six decimal places of precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(0);

    /// Create an amount from a raw micro-unit count.
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Create an amount from whole units.
    ///
    /// Returns `None` if the value does not fit.
    pub fn from_units(units: i64) -> Option<Self> {
        units.checked_mul(MICROS_PER_UNIT).map(Self)
    }

    /// Raw micro-unit count.
    #[inline]
    pub const fn micros(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Shortest exact JSON number text: `60.0`, `40.5`, `0.000001`.
    fn to_json_text(self) -> String {
        let text = self.to_string();
        let trimmed = text.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{trimmed}0")
        } else {
            trimmed.to_string()
        }
    }
}

/// Renders exactly six decimals, e.g. `40.000000` or `-0.500000`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = MICROS_PER_UNIT as u64;
        write!(f, "{sign}{}.{:06}", abs / per_unit, abs % per_unit)
    }
}

/// Parses JSON number syntax (`40`, `-0.5`, `1.25e3`) without going through
/// floating point.
impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || AmountError::Malformed(text.to_string());
        let out_of_range = || AmountError::OutOfRange(text.to_string());

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                (mantissa, exponent.parse::<i64>().map_err(|_| malformed())?)
            }
            None => (unsigned, 0),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty()
            || !int_part
                .bytes()
                .chain(frac_part.bytes())
                .all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes())
            .map(|b| b - b'0')
            .skip_while(|&d| d == 0)
            .collect();
        if digits.is_empty() {
            return Ok(Self::ZERO);
        }

        // Power of ten that turns the digit string into micro-units.
        let shift = exponent
            .saturating_add(SCALE)
            .saturating_sub(frac_part.len() as i64);

        let magnitude: u128 = if shift >= 0 {
            let zeros = usize::try_from(shift).map_err(|_| out_of_range())?;
            if digits.len().saturating_add(zeros) > MAX_DIGITS {
                return Err(out_of_range());
            }
            let value = digits.iter().fold(0u128, |acc, &d| acc * 10 + u128::from(d));
            value * 10u128.pow(zeros as u32)
        } else {
            let dropped = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
            let kept_len = digits.len().saturating_sub(dropped);
            let (kept, rest) = digits.split_at(kept_len);
            if kept.len() > MAX_DIGITS {
                return Err(out_of_range());
            }
            // Digits dropped beyond the string length are implicit leading zeros.
            let round_up = dropped <= digits.len() && rest.first().is_some_and(|&d| d >= 5);
            let value = kept.iter().fold(0u128, |acc, &d| acc * 10 + u128::from(d));
            value + u128::from(round_up)
        };

        let micros = if negative {
            i64::try_from(-i128::try_from(magnitude).map_err(|_| out_of_range())?)
        } else {
            i64::try_from(magnitude)
        }
        .map_err(|_| out_of_range())?;
        Ok(Self(micros))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number: serde_json::Number = self.to_json_text().parse().map_err(ser::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        number.to_string().parse().map_err(de::Error::custom)
    }
}
