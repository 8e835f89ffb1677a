//! Fixed-point money values
//!
//! Every price in this crate is an [`Amount`] backed by `rust_decimal`.
//! **NEVER use f64 for pricing arithmetic!** Floating point input is accepted
//! only at the formatting boundary, through [`Amount::try_from_f64`].
//!
//! # Precision
//!
//! - Uses `Decimal` internally (28-29 significant digits)
//! - Discount factors such as `0.92` are exact
//! - Serializes as string (preserves precision)

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monetary amount with fixed-point precision
///
/// The currency lives next to the amount (see [`crate::Price`]); an `Amount`
/// on its own is unit-less.
///
/// # Examples
///
/// ```rust
/// use pricekit_core::Amount;
///
/// let base = Amount::from_units(399);
/// let surcharge = Amount::from_units(20);
/// assert_eq!(base.checked_add(&surcharge).unwrap(), Amount::from_units(419));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Create from whole currency units.
    ///
    /// ```rust
    /// use pricekit_core::Amount;
    /// assert_eq!(Amount::from_units(499).to_string(), "499");
    /// ```
    pub fn from_units(units: i64) -> Self {
        Self {
            value: Decimal::from(units),
        }
    }

    /// Wrap an existing `Decimal`.
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Create from decimal string (e.g., "99.5")
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed as a valid decimal.
    ///
    /// ```rust
    /// use pricekit_core::Amount;
    /// let amt = Amount::from_str_checked("99.50").unwrap();
    /// assert_eq!(amt.to_string(), "99.50");
    /// ```
    pub fn from_str_checked(s: &str) -> Result<Self, String> {
        Decimal::from_str(s.trim())
            .map(|value| Self { value })
            .map_err(|e| format!("Invalid amount: {}", e))
    }

    /// Convert a finite `f64` through its shortest round-trip decimal form.
    ///
    /// `99.995_f64` is stored in binary as `99.99499999...`, but its shortest
    /// representation is `"99.995"`; this is the value a reader typed and
    /// the value that gets rounded. Returns `None` for NaN, infinities and
    /// magnitudes outside the `Decimal` range.
    ///
    /// ```rust
    /// use pricekit_core::Amount;
    /// let amt = Amount::try_from_f64(99.995).unwrap();
    /// assert_eq!(amt.to_string(), "99.995");
    /// assert!(Amount::try_from_f64(f64::NAN).is_none());
    /// ```
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // `Display` for f64 never uses exponent notation and always
        // produces the shortest string that round-trips.
        Decimal::from_str(&value.to_string())
            .ok()
            .map(|value| Self { value })
    }

    /// Get the internal Decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Check if amount is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.value < Decimal::ZERO
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
        }
    }

    /// Checked addition (returns None on overflow)
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.value
            .checked_add(other.value)
            .map(|value| Self { value })
    }

    /// Saturating addition (clamps to max on overflow)
    pub fn saturating_add(&self, other: &Self) -> Self {
        self.checked_add(other).unwrap_or(Self {
            value: Decimal::MAX,
        })
    }

    /// Multiply by a rate without rounding (returns None on overflow).
    ///
    /// ```rust
    /// use pricekit_core::Amount;
    /// use rust_decimal_macros::dec;
    /// let discounted = Amount::from_units(483).checked_scale(dec!(0.92)).unwrap();
    /// assert_eq!(discounted.to_string(), "444.36");
    /// ```
    pub fn checked_scale(&self, rate: Decimal) -> Option<Self> {
        self.value.checked_mul(rate).map(|value| Self { value })
    }

    /// Round to `dp` decimal places, halves away from zero.
    ///
    /// This is "round half up" for positive values: `444.5` becomes `445`
    /// and `-0.5` becomes `-1`.
    ///
    /// ```rust
    /// use pricekit_core::Amount;
    /// let amt = Amount::from_str_checked("99.995").unwrap();
    /// assert_eq!(amt.round_half_up(2).to_string(), "100.00");
    /// ```
    pub fn round_half_up(&self, dp: u32) -> Self {
        Self {
            value: self
                .value
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Round to a whole unit, halves away from zero.
    pub fn round_whole(&self) -> Self {
        self.round_half_up(0)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self { value }
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Self::from_units(units)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Amount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_checked(s)
    }
}
