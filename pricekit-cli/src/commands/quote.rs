//! Quote command - price a base monthly amount for an interval

use anyhow::{anyhow, Result};
use pricekit_core::{human_interval_key, Amount, BillingInterval, PricingConfig};

use crate::ui;

#[tracing::instrument(skip(config))]
pub fn run(config: &PricingConfig, base: &str, interval: &str, json: bool) -> Result<()> {
    let base = Amount::from_str_checked(base).map_err(|e| anyhow!("{}: {}", e, base))?;
    let price = config.rules.price_for_key(interval, base);

    if json {
        return ui::json(&price);
    }

    ui::header("Price Quote");
    if interval.parse::<BillingInterval>().is_err() {
        ui::warning(&format!(
            "Unknown interval '{}', quoting with the monthly rule",
            interval
        ));
    }

    let formatter = config.money_style().formatter(&price.currency)?;
    ui::key_value("Interval", human_interval_key(interval));
    ui::key_value("Base", &formatter.format(base));
    ui::key_value(
        "Price",
        &format!("{} / {}", formatter.format(price.amount), price.per.as_str()),
    );
    if let Some(note) = &price.note {
        ui::key_value("Note", note);
    }
    Ok(())
}
