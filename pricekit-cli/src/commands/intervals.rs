//! Intervals command - show the interval toggle

use pricekit_core::{interval_options, BillingInterval};

use crate::ui;

pub fn run(selected: BillingInterval) {
    ui::header("Billing Intervals");
    ui::interval_toggle(&interval_options(selected));
    for option in interval_options(selected) {
        let state = if option.pressed { "pressed" } else { "not pressed" };
        ui::key_value(option.value.as_key(), &format!("{} ({})", option.label, state));
    }
}
