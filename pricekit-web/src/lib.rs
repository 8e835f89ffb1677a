#![cfg(target_arch = "wasm32")]
//! Pricekit Web - WebAssembly bindings
//!
//! This crate exposes the pricing core to a browser pricing page: plan
//! lists, money formatters and the selection controller that drives the
//! page's live region.
//!
//! Amounts cross the boundary as decimal strings (`"444"`) so no precision
//! is lost to JavaScript numbers.

use wasm_bindgen::prelude::*;

mod formatter;
mod pricing;
mod selection;
mod utils;

pub use formatter::WasmMoneyFormatter;
pub use pricing::*;
pub use selection::WasmSelectionController;

/// Initialize the WASM module
///
/// Runs once when the module is loaded and installs the panic hook.
#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
}

/// Get the version of the Pricekit WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
