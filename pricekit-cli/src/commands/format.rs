//! Format command - render an amount the way price cards do

use anyhow::Result;
use pricekit_core::{build_formatter, Locale};

use crate::ui;

pub fn run(amount: f64, currency: &str, digits: u32, locale: &str) -> Result<()> {
    let locale: Locale = locale.parse()?;
    let formatter = build_formatter(currency, digits)?.with_locale(locale);
    tracing::debug!(
        "Formatting {} as {} ({} digits, {})",
        amount,
        formatter.currency(),
        digits,
        locale.as_tag()
    );
    ui::success(&formatter.format_f64(amount));
    Ok(())
}
