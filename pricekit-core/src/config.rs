//! Configuration for pricing pages.

use crate::{
    BillingInterval, Locale, MoneyStyle, PlanCatalog, PlanDefinition, PriceCalculator,
    PricingError, Result, SelectionController,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pricing page configuration.
///
/// Every field has a default, so `{}` is a valid config file. Display
/// settings never change a price's currency; each plan is shown in the
/// currency it is quoted in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Maximum digits after the decimal separator.
    #[serde(default)]
    pub fractional_digits: u32,

    #[serde(default)]
    pub locale: Locale,

    /// Interval selected when the page loads.
    #[serde(default)]
    pub default_interval: BillingInterval,

    #[serde(default)]
    pub rules: PriceCalculator,

    /// Replaces the built-in catalog when present.
    #[serde(default)]
    pub plans: Option<Vec<PlanDefinition>>,
}

impl PricingConfig {
    /// Read a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PricingError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), "loaded pricing config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| PricingError::Config(e.to_string()))
    }

    /// Set the display precision.
    pub fn with_fractional_digits(mut self, digits: u32) -> Self {
        self.fractional_digits = digits;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_default_interval(mut self, interval: BillingInterval) -> Self {
        self.default_interval = interval;
        self
    }

    /// Display settings for formatting prices in any currency.
    pub fn money_style(&self) -> MoneyStyle {
        MoneyStyle::new(self.fractional_digits, self.locale)
    }

    /// Catalog from `plans`, or the built-in catalog priced with `rules`.
    pub fn catalog(&self) -> Result<PlanCatalog> {
        let plans = match &self.plans {
            Some(plans) => plans.clone(),
            None => crate::catalog::default_plans(),
        };
        PlanCatalog::with_calculator(plans, self.rules.clone())
    }

    pub fn controller(&self) -> Result<SelectionController> {
        Ok(SelectionController::with_interval(
            self.catalog()?,
            self.default_interval,
        ))
    }
}
