//! Plan catalog
//!
//! A [`PlanCatalog`] holds plan definitions and produces a fresh
//! [`BillingPlan`] list for each interval. Plans priced with
//! [`PlanPricing::Fixed`] ignore the interval; everything else goes through
//! the [`PriceCalculator`].

use crate::{Amount, BillingInterval, Price, PriceCalculator, PricePeriod, PricingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_CTA_LABEL: &str = "Select Plan";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeature {
    pub id: String,
    pub label: String,
}

impl PlanFeature {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A plan resolved for one interval, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPlan {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub price: Price,
    pub features: Vec<PlanFeature>,
    pub cta_label: String,
    #[serde(default)]
    pub highlight: bool,
}

/// How a plan's price is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PlanPricing {
    /// Same price for every interval.
    Fixed { price: Price },
    /// Quoted per interval from a base monthly price.
    #[serde(rename_all = "camelCase")]
    Interval { base_monthly: Amount },
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub pricing: PlanPricing,
    pub features: Vec<PlanFeature>,
    #[serde(default = "default_cta_label")]
    pub cta_label: String,
    #[serde(default)]
    pub highlight: bool,
}

fn default_cta_label() -> String {
    DEFAULT_CTA_LABEL.to_string()
}

impl PlanDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, pricing: PlanPricing) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: None,
            pricing,
            features: Vec::new(),
            cta_label: default_cta_label(),
            highlight: false,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_feature(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.features.push(PlanFeature::new(id, label));
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// Resolve the definition for `interval`.
    pub fn resolve(&self, calculator: &PriceCalculator, interval: BillingInterval) -> BillingPlan {
        let price = match &self.pricing {
            PlanPricing::Fixed { price } => price.clone(),
            PlanPricing::Interval { base_monthly } => calculator.price_for(interval, *base_monthly),
        };

        BillingPlan {
            id: self.id.clone(),
            name: self.name.clone(),
            subtitle: self.subtitle.clone(),
            price,
            features: self.features.clone(),
            cta_label: self.cta_label.clone(),
            highlight: self.highlight,
        }
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(PricingError::InvalidCatalog(reason));

        if self.id.trim().is_empty() {
            return invalid("plan id cannot be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return invalid(format!("plan '{}' has an empty name", self.id));
        }
        if self.features.is_empty() {
            return invalid(format!("plan '{}' has no features", self.id));
        }

        let mut seen = HashSet::new();
        for feature in &self.features {
            if feature.id.trim().is_empty() {
                return invalid(format!("plan '{}' has a feature with an empty id", self.id));
            }
            if !seen.insert(feature.id.as_str()) {
                return invalid(format!(
                    "plan '{}' repeats feature id '{}'",
                    self.id, feature.id
                ));
            }
        }

        if let PlanPricing::Fixed { price } = &self.pricing {
            crate::money::normalize_currency(&price.currency).map_err(|_| {
                PricingError::InvalidCatalog(format!(
                    "plan '{}' uses invalid currency '{}'",
                    self.id, price.currency
                ))
            })?;
        }
        Ok(())
    }
}

/// Ordered, validated set of plans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    plans: Vec<PlanDefinition>,
    calculator: PriceCalculator,
}

impl PlanCatalog {
    /// Build a catalog priced with the default rules.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidCatalog`] when the list is empty, plan ids
    /// repeat, or any plan fails validation.
    pub fn new(plans: Vec<PlanDefinition>) -> Result<Self> {
        Self::with_calculator(plans, PriceCalculator::default())
    }

    /// Build a catalog priced with custom rules.
    pub fn with_calculator(plans: Vec<PlanDefinition>, calculator: PriceCalculator) -> Result<Self> {
        if plans.is_empty() {
            return Err(PricingError::InvalidCatalog("catalog has no plans".to_string()));
        }

        let mut ids = HashSet::new();
        for plan in &plans {
            plan.validate()?;
            if !ids.insert(plan.id.as_str()) {
                return Err(PricingError::InvalidCatalog(format!(
                    "duplicate plan id '{}'",
                    plan.id
                )));
            }
        }

        tracing::debug!(plans = plans.len(), "plan catalog built");
        Ok(Self { plans, calculator })
    }

    /// Plans resolved for `interval`, in catalog order.
    pub fn plans_for(&self, interval: BillingInterval) -> Vec<BillingPlan> {
        self.plans
            .iter()
            .map(|plan| plan.resolve(&self.calculator, interval))
            .collect()
    }

    pub fn get(&self, plan_id: &str) -> Option<&PlanDefinition> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    /// Display name for a plan id.
    pub fn plan_name(&self, plan_id: &str) -> Option<&str> {
        self.get(plan_id).map(|plan| plan.name.as_str())
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            plans: default_plans(),
            calculator: PriceCalculator::default(),
        }
    }
}

/// The FutureFeed plan line-up.
pub fn default_plans() -> Vec<PlanDefinition> {
    vec![
        PlanDefinition::new(
            "basic",
            "Basic FAR Self-Assessment",
            PlanPricing::Fixed {
                price: Price::new(Amount::from_units(499), "USD", PricePeriod::Year)
                    .with_note("one time annual payment"),
            },
        )
        .with_feature("b1", "For Contractors with FCI (i.e., no CUI)")
        .with_feature("b2", "Compliance Single-Point-of-Truth")
        .with_feature("b3", "Guided Self-Assessment")
        .with_feature("b4", "Organize scope and assets")
        .with_feature("b5", "Store evidence to defend your assessment"),
        PlanDefinition::new(
            "core",
            "FutureFeed Core",
            PlanPricing::Interval {
                base_monthly: Amount::from_units(399),
            },
        )
        .with_subtitle("CMMC Level 1+")
        .with_feature("c1", "All of the features of CMMC1 Express")
        .with_feature("c2", "CIS Implementation Group 1 (IG1) **")
        .with_feature("c3", "Manage Live SSP")
        .with_feature("c4", "Manage POAMs")
        .with_feature("c5", "Build and Manage Projects")
        .with_feature("c6", "Add Other Frameworks")
        .highlighted(),
        PlanDefinition::new(
            "dod",
            "DoD Contractor CUI Bundle",
            PlanPricing::Interval {
                base_monthly: Amount::from_units(483),
            },
        )
        .with_subtitle("CMMC Level 2+")
        .with_feature("d1", "All of the features of FutureFeed Core")
        .with_feature("d2", "CMMC 2.0 Level 2 Framework")
        .with_feature("d3", "NIST SP 800-171 Framework")
        .with_feature("d4", "Dynamic SPRS Score Tracking"),
    ]
}

/// Plans of the default catalog for `interval`.
pub fn get_plans(interval: BillingInterval) -> Vec<BillingPlan> {
    PlanCatalog::default().plans_for(interval)
}
