//! Arbitrary-scale decimal values.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decimal number `coefficient × 10^exponent`.
///
/// Precision is significant: `1.0` (10 × 10⁻¹) and `1.00` (100 × 10⁻²) are
/// different values, so equality and hashing compare both parts verbatim.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decimal {
    coefficient: i128,
    exponent: i32,
}

/// Error returned when a string is not a decimal literal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal literal: {0:?}")]
pub struct ParseDecimalError(String);

impl Decimal {
    /// Zero with exponent zero.
    pub const ZERO: Decimal = Decimal::new(0, 0);

    /// Creates a decimal from its coefficient and exponent.
    #[must_use]
    pub const fn new(coefficient: i128, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Returns the unscaled coefficient.
    #[must_use]
    pub const fn coefficient(self) -> i128 {
        self.coefficient
    }

    /// Returns the power-of-ten exponent.
    #[must_use]
    pub const fn exponent(self) -> i32 {
        self.exponent
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.coefficient == 0
    }

    /// Approximates this decimal as an `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.coefficient as f64 * 10f64.powi(self.exponent)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses `[-+]digits[.digits][(d|D|e|E)[-+]digits]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecimalError(s.to_string());

        let (mantissa, exp_part) = match s.find(['d', 'D', 'e', 'E']) {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };
        let mut exponent: i32 = match exp_part {
            Some(e) => e.parse().map_err(|_| invalid())?,
            None => 0,
        };

        let (negative, digits) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let mut coefficient: i128 = 0;
        for c in int_part.chars().chain(frac_part.chars()) {
            let d = c.to_digit(10).ok_or_else(invalid)?;
            coefficient = coefficient
                .checked_mul(10)
                .and_then(|n| n.checked_add(i128::from(d)))
                .ok_or_else(invalid)?;
        }
        let scale = i32::try_from(frac_part.len()).map_err(|_| invalid())?;
        exponent = exponent.checked_sub(scale).ok_or_else(invalid)?;

        Ok(Self::new(
            if negative { -coefficient } else { coefficient },
            exponent,
        ))
    }
}

/// Leading fractional zeros beyond which [`Decimal`] displays in exponent form.
const MAX_LEADING_ZEROS: usize = 20;

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.unsigned_abs().to_string();
        let scale = self.exponent.unsigned_abs() as usize;
        if self.exponent > 0 || scale > digits.len() + MAX_LEADING_ZEROS {
            return write!(f, "{}d{}", self.coefficient, self.exponent);
        }
        let sign = if self.coefficient < 0 { "-" } else { "" };
        if scale == 0 {
            write!(f, "{sign}{digits}.")
        } else if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int}.{frac}")
        } else {
            write!(f, "{sign}0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self::new(i128::from(n), 0)
    }
}
