//! Interval pricing
//!
//! This module turns a base monthly price into the price shown for a billing
//! interval.
//!
//! # Overview
//!
//! | interval | amount | note |
//! |---|---|---|
//! | monthly | base + 20 | Billed Monthly |
//! | annually | base | Billed Yearly |
//! | twoYears | round(base × 0.92) | 2 Months Free |
//! | threeYears | round(base × 0.89) | 4 Months Free |
//!
//! Every quote is per month and in USD. Only the two discounted intervals
//! are rounded (halves away from zero).
//!
//! # Example
//!
//! ```rust
//! use pricekit_core::{price_for, Amount, BillingInterval};
//!
//! let price = price_for(BillingInterval::TwoYears, Amount::from_units(483));
//! assert_eq!(price.amount, Amount::from_units(444));
//! assert_eq!(price.note.as_deref(), Some("2 Months Free"));
//! ```

use crate::{Amount, BillingInterval};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Currency of every interval quote. Amounts are never converted.
pub const QUOTE_CURRENCY: &str = "USD";

/// Billing period a price amount covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePeriod {
    Month,
    Year,
}

impl PricePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// A concrete price quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: Amount,
    /// Three-letter uppercase currency code.
    pub currency: String,
    pub per: PricePeriod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Price {
    pub fn new(amount: Amount, currency: impl Into<String>, per: PricePeriod) -> Self {
        Self {
            amount,
            currency: currency.into(),
            per,
            note: None,
        }
    }

    /// Set the display note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Pricing rules for interval quotes.
///
/// `Default` is the production rule set; a config file may override it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCalculator {
    /// Added to the base price for month-to-month billing.
    #[serde(default = "default_monthly_surcharge")]
    pub monthly_surcharge: Amount,
    /// Multiplier for two-year prepay.
    #[serde(default = "default_two_year_rate")]
    pub two_year_rate: Decimal,
    /// Multiplier for three-year prepay.
    #[serde(default = "default_three_year_rate")]
    pub three_year_rate: Decimal,
}

fn default_monthly_surcharge() -> Amount {
    Amount::from_units(20)
}

fn default_two_year_rate() -> Decimal {
    dec!(0.92)
}

fn default_three_year_rate() -> Decimal {
    dec!(0.89)
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self {
            monthly_surcharge: default_monthly_surcharge(),
            two_year_rate: default_two_year_rate(),
            three_year_rate: default_three_year_rate(),
        }
    }
}

impl PriceCalculator {
    /// Create a new calculator with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the month-to-month surcharge.
    pub fn with_monthly_surcharge(mut self, surcharge: Amount) -> Self {
        self.monthly_surcharge = surcharge;
        self
    }

    /// Set both prepay multipliers.
    pub fn with_prepay_rates(mut self, two_years: Decimal, three_years: Decimal) -> Self {
        self.two_year_rate = two_years;
        self.three_year_rate = three_years;
        self
    }

    /// Quote `base_monthly` for `interval`.
    ///
    /// Negative input is not rejected. Arithmetic saturates instead of
    /// panicking on `Decimal` overflow.
    pub fn price_for(&self, interval: BillingInterval, base_monthly: Amount) -> Price {
        let (amount, note) = match interval {
            BillingInterval::Monthly => (
                base_monthly.saturating_add(&self.monthly_surcharge),
                "Billed Monthly",
            ),
            BillingInterval::Annually => (base_monthly, "Billed Yearly"),
            BillingInterval::TwoYears => {
                (self.discounted(base_monthly, self.two_year_rate), "2 Months Free")
            }
            BillingInterval::ThreeYears => {
                (self.discounted(base_monthly, self.three_year_rate), "4 Months Free")
            }
        };

        Price::new(amount, QUOTE_CURRENCY, PricePeriod::Month).with_note(note)
    }

    /// Quote for a raw interval key; unknown keys get the monthly rule.
    pub fn price_for_key(&self, key: &str, base_monthly: Amount) -> Price {
        self.price_for(BillingInterval::from_key_or_default(key), base_monthly)
    }

    fn discounted(&self, base: Amount, rate: Decimal) -> Amount {
        base.checked_scale(rate)
            .map(|scaled| scaled.round_whole())
            .unwrap_or_else(|| Amount::new(Decimal::MAX))
    }
}

/// Quote with the default rules.
pub fn price_for(interval: BillingInterval, base_monthly: Amount) -> Price {
    PriceCalculator::default().price_for(interval, base_monthly)
}

/// Quote a raw interval key with the default rules.
pub fn price_for_key(key: &str, base_monthly: Amount) -> Price {
    PriceCalculator::default().price_for_key(key, base_monthly)
}
