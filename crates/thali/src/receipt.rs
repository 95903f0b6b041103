//! Plain-text receipts

use serde_json::Value;
use tracing::debug;

use crate::formatter::{format_rupee_total, format_rupees};
use crate::thali::{kind, valid_price};

const RECEIPT_HEADER: &str = "THALI RECEIPT";
const RULE: &str = "---";

/// Render a receipt for a customer's order
///
/// Returns an empty string when `customer_name` is not a non-blank string or
/// `thalis` is not a non-empty array. Every element gets a line item; one
/// without a valid price is shown as `Rs.0.00` and adds nothing to the total.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use thali::generate_thali_receipt;
///
/// let order = json!([{"name": "Rajasthani Thali", "items": ["dal"], "price": 250, "isVeg": true}]);
/// assert_eq!(
///     generate_thali_receipt(&json!("Asha"), &order),
///     "THALI RECEIPT\n---\nCustomer: ASHA\n- Rajasthani Thali x Rs.250.00\n---\nTotal: Rs.250.00\nItems: 1"
/// );
/// ```
pub fn generate_thali_receipt(customer_name: &Value, thalis: &Value) -> String {
    let Some(customer) = customer_name.as_str().filter(|name| !name.trim().is_empty()) else {
        debug!(kind = kind(customer_name), "receipt needs a customer name");
        return String::new();
    };
    let thalis = match thalis.as_array() {
        Some(thalis) if !thalis.is_empty() => thalis,
        _ => {
            debug!(kind = kind(thalis), "receipt needs at least one thali");
            return String::new();
        }
    };

    let mut lines = vec![
        RECEIPT_HEADER.to_string(),
        RULE.to_string(),
        format!("Customer: {}", customer.to_uppercase()),
    ];
    lines.extend(thalis.iter().map(line_item));

    let prices: Vec<f64> = thalis.iter().filter_map(valid_price).collect();
    lines.push(RULE.to_string());
    lines.push(format!("Total: {}", format_rupee_total(&prices)));
    lines.push(format!("Items: {}", thalis.len()));

    lines.join("\n")
}

fn line_item(thali: &Value) -> String {
    let price = valid_price(thali).unwrap_or(0.0);
    format!("- {} x {}", display_name(thali), format_rupees(price))
}

/// Name as shown on a line item
///
/// A missing name renders as `undefined`.
fn display_name(thali: &Value) -> String {
    match thali.as_object().and_then(|record| record.get("name")) {
        Some(name) => value_to_string(name),
        None => "undefined".to_string(),
    }
}

/// Plain text for a JSON value
///
/// Arrays join their elements with commas (null elements are blank) and
/// objects render as `[object Object]`.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(values) => values
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => value_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
