//! Money formatter bindings

use pricekit_core::{Amount, Locale, MoneyFormatter};
use wasm_bindgen::prelude::*;

use crate::utils::js_error;

/// JavaScript-friendly money formatter
///
/// The constructor throws for an invalid currency, so a page never renders
/// prices with a broken formatter.
#[wasm_bindgen]
#[derive(Clone)]
pub struct WasmMoneyFormatter {
    inner: MoneyFormatter,
}

#[wasm_bindgen]
impl WasmMoneyFormatter {
    /// Create a formatter for `currency` with `fractional_digits` decimals
    #[wasm_bindgen(constructor)]
    pub fn new(currency: &str, fractional_digits: Option<u32>) -> Result<WasmMoneyFormatter, JsValue> {
        let inner = MoneyFormatter::new(currency, fractional_digits.unwrap_or(0))
            .map_err(|e| js_error(&e.to_string()))?;
        Ok(WasmMoneyFormatter { inner })
    }

    /// Switch the display locale ("en-US", "de-DE", "fr-FR")
    #[wasm_bindgen(js_name = withLocale)]
    pub fn with_locale(self, locale: &str) -> Result<WasmMoneyFormatter, JsValue> {
        let locale = locale
            .parse::<Locale>()
            .map_err(|e| js_error(&e.to_string()))?;
        Ok(WasmMoneyFormatter {
            inner: self.inner.with_locale(locale),
        })
    }

    /// Format a JavaScript number
    pub fn format(&self, amount: f64) -> String {
        self.inner.format_f64(amount)
    }

    /// Format a decimal string such as `"444"` or `"99.995"`
    #[wasm_bindgen(js_name = formatDecimal)]
    pub fn format_decimal(&self, amount: &str) -> Result<String, JsValue> {
        let amount = Amount::from_str_checked(amount).map_err(|e| js_error(&e))?;
        Ok(self.inner.format(amount))
    }

    #[wasm_bindgen(getter)]
    pub fn currency(&self) -> String {
        self.inner.currency().to_string()
    }

    #[wasm_bindgen(getter, js_name = fractionalDigits)]
    pub fn fractional_digits(&self) -> u32 {
        self.inner.fractional_digits()
    }

    /// Fraction digits always shown, capped by the currency's minor units
    #[wasm_bindgen(getter, js_name = minFractionalDigits)]
    pub fn min_fractional_digits(&self) -> u32 {
        self.inner.min_fractional_digits()
    }
}
