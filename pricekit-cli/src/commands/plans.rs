//! Plans command - list plans priced for an interval

use anyhow::Result;
use pricekit_core::{BillingInterval, PricingConfig};

use crate::ui;

#[tracing::instrument(skip(config))]
pub fn run(config: &PricingConfig, interval: Option<BillingInterval>, json: bool) -> Result<()> {
    let interval = interval.unwrap_or(config.default_interval);
    let plans = config.catalog()?.plans_for(interval);
    tracing::debug!("Resolved {} plans", plans.len());

    if json {
        return ui::json(&plans);
    }

    ui::header(&format!("Plans - {}", interval.human_name()));
    ui::interval_toggle(&pricekit_core::interval_options(interval));
    for card in pricekit_core::plan_cards(&plans, interval, config.money_style())? {
        ui::plan_card(&card);
    }
    ui::separator();
    Ok(())
}
