//! WASM bindings for thali
//!
//! This crate provides JavaScript-friendly API for:
//! - Thali descriptions
//! - Menu statistics
//! - Menu search
//! - Customer receipts
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { createThaliDescription, getThaliStats, searchThaliMenu, generateThaliReceipt } from 'thali-wasm';
//!
//! await init();
//!
//! const thali = { name: "Rajasthani Thali", items: ["dal", "churma"], price: 250, isVeg: true };
//! createThaliDescription(thali); // "RAJASTHANI THALI (Veg) - Items: dal, churma - Rs.250.00"
//!
//! const stats = getThaliStats([thali]);          // { totalThalis: 1, ... } or null
//! const hits = searchThaliMenu([thali], "DAL");  // [ { name: "Rajasthani Thali", ... } ]
//! const receipt = generateThaliReceipt("Asha", [thali]);
//! ```
//!
//! Values that cannot be read as JSON data (functions, symbols, NaN
//! prices) are treated as `null`, so they take the same empty-result paths
//! as any other malformed input. Inside an array only the offending element
//! becomes `null`; the rest of the menu is still used.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Read a JavaScript value as JSON data, falling back to `null`
///
/// Arrays are read element by element so one unreadable element becomes
/// `null` on its own instead of nulling the whole array.
fn to_json(value: JsValue) -> Value {
    if js_sys::Array::is_array(&value) {
        return Value::Array(js_sys::Array::from(&value).iter().map(to_json).collect());
    }
    serde_wasm_bindgen::from_value(value).unwrap_or(Value::Null)
}

/// Convert to a plain JavaScript value (objects, not `Map`s)
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Describe a thali in one line
///
/// @param thali - Thali object ({ name, items, price, isVeg })
/// @returns Description, or "" if the thali is incomplete
#[wasm_bindgen(js_name = createThaliDescription)]
pub fn create_thali_description(thali: JsValue) -> String {
    thali::create_thali_description(&to_json(thali))
}

/// Summarize a menu
///
/// @param thalis - Array of thali objects
/// @returns { totalThalis, vegCount, nonVegCount, avgPrice, cheapest, costliest, names } or null
#[wasm_bindgen(js_name = getThaliStats)]
pub fn get_thali_stats(thalis: JsValue) -> Result<JsValue, JsValue> {
    match thali::get_thali_stats(&to_json(thalis)) {
        Some(stats) => to_js(&stats),
        None => Ok(JsValue::NULL),
    }
}

/// Search a menu by name or item, ignoring case
///
/// Matches are returned as copies of the input objects.
///
/// @param thalis - Array of thali objects
/// @param query - Text to look for
/// @returns Array of matching thalis (empty if the input is invalid)
#[wasm_bindgen(js_name = searchThaliMenu)]
pub fn search_thali_menu(thalis: JsValue, query: JsValue) -> Result<js_sys::Array, JsValue> {
    let found = thali::search_thali_menu(&to_json(thalis), &to_json(query));

    let result = js_sys::Array::new();
    for hit in &found {
        result.push(&to_js(hit)?);
    }
    Ok(result)
}

/// Render a receipt
///
/// @param customerName - Customer name
/// @param thalis - Array of ordered thalis
/// @returns Receipt text, or "" if the name or order is invalid
#[wasm_bindgen(js_name = generateThaliReceipt)]
pub fn generate_thali_receipt(customer_name: JsValue, thalis: JsValue) -> String {
    thali::generate_thali_receipt(&to_json(customer_name), &to_json(thalis))
}

/// Price formatting utilities
#[wasm_bindgen]
pub struct PriceFormatter;

#[wasm_bindgen]
impl PriceFormatter {
    /// Render a number with a fixed number of decimals
    ///
    /// @param n - Number to format
    /// @param digits - Fraction digits
    /// @returns Formatted string (e.g., "1.13" for 1.125 with 2 digits)
    #[wasm_bindgen(js_name = toFixed)]
    pub fn to_fixed(n: f64, digits: usize) -> String {
        thali::to_fixed(n, digits)
    }

    /// Render an amount as a rupee price
    ///
    /// @param amount - Amount in rupees
    /// @returns Price text (e.g., "Rs.250.00")
    #[wasm_bindgen(js_name = formatRupees)]
    pub fn format_rupees(amount: f64) -> String {
        thali::format_rupees(amount)
    }
}
