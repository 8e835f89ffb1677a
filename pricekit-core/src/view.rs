//! Presentation-ready card data
//!
//! Renderers consume [`PlanCardView`] instead of formatting prices
//! themselves.

use crate::catalog::DEFAULT_CTA_LABEL;
use crate::{BillingInterval, BillingPlan, MoneyFormatter, MoneyStyle, Result};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCardView {
    pub plan_id: String,
    pub name: String,
    pub subtitle: Option<String>,
    /// Formatted amount in the plan's own currency, e.g. `$419`.
    pub price_text: String,
    /// Period suffix, e.g. `/ month`.
    pub period_text: String,
    pub note: Option<String>,
    pub features: Vec<String>,
    pub cta_label: String,
    /// `aria-label` for the CTA button, e.g.
    /// `Select Plan: FutureFeed Core — Annually`.
    pub cta_accessible_label: String,
    pub highlight: bool,
}

impl PlanCardView {
    /// Project `plan` as shown while `interval` is selected.
    ///
    /// `formatter` must be built for `plan.price.currency`; [`plan_cards`]
    /// takes care of that.
    pub fn from_plan(
        plan: &BillingPlan,
        interval: BillingInterval,
        formatter: &MoneyFormatter,
    ) -> Self {
        let price_text = formatter.format(plan.price.amount);
        let period_text = format!("/ {}", plan.price.per.as_str());
        let cta_label = if plan.cta_label.trim().is_empty() {
            DEFAULT_CTA_LABEL.to_string()
        } else {
            plan.cta_label.clone()
        };
        let cta_accessible_label =
            format!("{}: {} — {}", cta_label, plan.name, interval.human_name());

        Self {
            plan_id: plan.id.clone(),
            name: plan.name.clone(),
            subtitle: plan.subtitle.clone(),
            price_text,
            period_text,
            note: plan.price.note.clone(),
            features: plan.features.iter().map(|f| f.label.clone()).collect(),
            cta_label,
            cta_accessible_label,
            highlight: plan.highlight,
        }
    }
}

/// Cards for `plans`, each priced in its own currency.
///
/// One formatter is built per distinct currency.
///
/// # Errors
///
/// [`crate::PricingError::InvalidCurrency`] when a plan carries a malformed
/// currency code.
pub fn plan_cards(
    plans: &[BillingPlan],
    interval: BillingInterval,
    style: MoneyStyle,
) -> Result<Vec<PlanCardView>> {
    let mut formatters: HashMap<&str, MoneyFormatter> = HashMap::new();
    let mut cards = Vec::with_capacity(plans.len());

    for plan in plans {
        let formatter = match formatters.entry(plan.price.currency.as_str()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(style.formatter(&plan.price.currency)?),
        };
        cards.push(PlanCardView::from_plan(plan, interval, formatter));
    }
    Ok(cards)
}
