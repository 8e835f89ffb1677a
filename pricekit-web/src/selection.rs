//! Selection controller bindings

use pricekit_core::{
    BillingPlan, IntervalOption, Locale, MoneyStyle, SelectionController, SelectionEvent,
    SelectionState,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::utils::{js_error, to_js};

/// Everything a pricing page renders for the current selection
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageSnapshot {
    state: SelectionState,
    options: Vec<IntervalOption>,
    plans: Vec<BillingPlan>,
}

/// JavaScript-friendly selection controller
///
/// Owns the selected interval and the live-region announcement. Wire the
/// interval toggle to `changeInterval` and each card's button to
/// `selectPlan`, then render `announcement` into an `aria-live` region.
#[wasm_bindgen]
pub struct WasmSelectionController {
    inner: SelectionController,
}

impl Default for WasmSelectionController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmSelectionController {
    /// Create a controller over the built-in catalog, starting on monthly
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: SelectionController::default(),
        }
    }

    /// Handle a toggle change. Returns `false` for unknown interval keys.
    #[wasm_bindgen(js_name = changeInterval)]
    pub fn change_interval(&mut self, interval: &str) -> bool {
        self.inner
            .handle(SelectionEvent::IntervalChanged(interval.to_string()))
    }

    /// Handle a plan's call-to-action button
    #[wasm_bindgen(js_name = selectPlan)]
    pub fn select_plan(&mut self, plan_id: &str) {
        self.inner
            .handle(SelectionEvent::PlanSelected(plan_id.to_string()));
    }

    /// Text for the live region
    #[wasm_bindgen(getter)]
    pub fn announcement(&self) -> String {
        self.inner.announcement().to_string()
    }

    /// Current interval key
    #[wasm_bindgen(getter, js_name = currentInterval)]
    pub fn current_interval(&self) -> String {
        self.inner.current_interval().as_key().to_string()
    }

    /// Plans for the current interval
    pub fn plans(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.plans())
    }

    /// Card view models for the current interval
    ///
    /// Each card is priced in its plan's currency; `fractionalDigits`
    /// (default 0) and `locale` (default "en-US") only control display.
    pub fn cards(
        &self,
        fractional_digits: Option<u32>,
        locale: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let locale = match locale {
            Some(tag) => tag.parse::<Locale>().map_err(|e| js_error(&e.to_string()))?,
            None => Locale::default(),
        };
        let style = MoneyStyle::new(fractional_digits.unwrap_or(0), locale);
        let cards = self
            .inner
            .cards(style)
            .map_err(|e| js_error(&e.to_string()))?;
        to_js(&cards)
    }

    /// State, toggle options and plans in one object
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&PageSnapshot {
            state: self.inner.state().clone(),
            options: self.inner.interval_options(),
            plans: self.inner.plans(),
        })
    }
}
