//! Stateless pricing functions

use pricekit_core::{
    get_plans, human_interval_key, interval_options, price_for_key, Amount, BillingInterval,
};
use wasm_bindgen::prelude::*;

use crate::utils::{js_error, to_js, warn};

/// Plans of the built-in catalog for an interval key
///
/// Unknown keys are priced as monthly.
#[wasm_bindgen(js_name = getPlans)]
pub fn get_plans_js(interval: &str) -> Result<JsValue, JsValue> {
    to_js(&get_plans(BillingInterval::from_key_or_default(interval)))
}

/// Quote a base monthly price for an interval key
///
/// Returns `{ amount, currency, per, note }`; unknown keys get the
/// monthly rule.
#[wasm_bindgen(js_name = priceFor)]
pub fn price_for_js(interval: &str, base_monthly: f64) -> Result<JsValue, JsValue> {
    let base = Amount::try_from_f64(base_monthly)
        .ok_or_else(|| js_error(&format!("Invalid base price: {}", base_monthly)))?;
    if interval.parse::<BillingInterval>().is_err() {
        warn(&format!("Unknown billing interval '{}', using monthly", interval));
    }
    to_js(&price_for_key(interval, base))
}

/// Human-readable name for an interval key ("2 Years")
#[wasm_bindgen(js_name = humanInterval)]
pub fn human_interval_js(interval: &str) -> String {
    human_interval_key(interval).to_string()
}

/// Toggle options `{ value, label, pressed }` with `selected` pressed
#[wasm_bindgen(js_name = intervalOptions)]
pub fn interval_options_js(selected: &str) -> Result<JsValue, JsValue> {
    to_js(&interval_options(BillingInterval::from_key_or_default(selected)))
}
