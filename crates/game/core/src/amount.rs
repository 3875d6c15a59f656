//! Two-decimal fixed-point quantities.
//!
//! Weights, prices and carrying capacity are decimal quantities. They are
//! stored as signed hundredths so that sums are exact and the capacity
//! boundary (`total + weight == max`) compares reliably.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

/// Decimal quantity with two fractional digits.
///
/// Negative amounts are representable on purpose: content may carry a
/// negative weight, and the inventory must be able to see and reject it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Hundredths per whole unit.
    pub const SCALE: i64 = 100;

    /// Creates an amount from whole units (`Amount::from_units(5)` is `5.00`).
    ///
    /// Saturates at the representable range; use [`Amount::checked_from_units`]
    /// for untrusted input.
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(Self::SCALE))
    }

    /// Like [`Amount::from_units`], but `None` when the value does not fit.
    pub const fn checked_from_units(units: i64) -> Option<Self> {
        match units.checked_mul(Self::SCALE) {
            Some(hundredths) => Some(Self(hundredths)),
            None => None,
        }
    }

    /// Creates an amount from hundredths (`Amount::from_hundredths(250)` is `2.50`).
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Converts a float, rounding to the nearest hundredth.
    ///
    /// Out-of-range values saturate; NaN becomes zero.
    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::SCALE as f64).round() as i64)
    }

    /// Like [`Amount::from_f64`], but `None` for non-finite or out-of-range values.
    pub fn checked_from_f64(value: f64) -> Option<Self> {
        let hundredths = (value * Self::SCALE as f64).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        (hundredths.is_finite() && hundredths >= i64::MIN as f64 && hundredths < i64::MAX as f64)
            .then(|| Self(hundredths as i64))
    }

    pub const fn hundredths(self) -> i64 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub const fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }

    pub const fn saturating_sub(self, other: Amount) -> Amount {
        Amount(self.0.saturating_sub(other.0))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}

/// Error returned when parsing an [`Amount`] from text fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount: {0:?}")]
pub struct ParseAmountError(pub String);

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parses `"12"`, `"12.5"`, `"-0.25"`. More than two fractional digits
    /// are rejected rather than silently rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAmountError(s.to_string());
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| err())?
        };
        if whole < 0 {
            return Err(err());
        }
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| err())? * 10,
            _ => frac.parse().map_err(|_| err())?,
        };

        let value = whole
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(err)?;
        Ok(Amount(if negative { -value } else { value }))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AmountVisitor;

        impl serde::de::Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal number or numeric string")
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Amount, E> {
                Amount::checked_from_units(v).ok_or_else(|| E::custom("amount out of range"))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Amount, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(Amount::checked_from_units)
                    .ok_or_else(|| E::custom("amount out of range"))
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Amount, E> {
                Amount::checked_from_f64(v).ok_or_else(|| E::custom("amount out of range"))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Amount, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
