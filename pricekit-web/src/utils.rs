//! Utility functions for WASM

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set up better panic messages in the browser console
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Log a message to the browser console
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn warn(s: &str);
}

/// Convert an error message into a JS `Error`
pub fn js_error(msg: &str) -> JsValue {
    js_sys::Error::new(msg).into()
}

/// Serialize a value for JavaScript, mapping failures to a JS `Error`
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| js_error(&format!("Serialization failed: {}", e)))
}
