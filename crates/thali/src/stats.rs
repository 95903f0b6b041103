//! Menu statistics

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::formatter::{to_fixed, PRICE_DIGITS};
use crate::thali::{is_record, kind, name_of, valid_price};

/// Summary of a thali menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThaliStats {
    /// Number of elements, malformed ones included
    pub total_thalis: usize,
    pub veg_count: usize,
    pub non_veg_count: usize,
    /// Mean of the valid prices with two decimals, "0.00" when there are none
    pub avg_price: String,
    pub cheapest: f64,
    pub costliest: f64,
    /// String names in menu order
    pub names: Vec<String>,
}

/// Compute statistics over a menu
///
/// Returns `None` when `thalis` is not an array or is empty. Elements with a
/// missing or non-numeric price are left out of the price figures only.
pub fn get_thali_stats(thalis: &Value) -> Option<ThaliStats> {
    let thalis = match thalis.as_array() {
        Some(thalis) if !thalis.is_empty() => thalis,
        _ => {
            debug!(kind = kind(thalis), "no thalis to summarize");
            return None;
        }
    };

    let veg_flag = |value: &Value| {
        is_record(value)
            .then(|| value.get("isVeg").and_then(Value::as_bool))
            .flatten()
    };
    let veg_count = thalis.iter().filter(|t| veg_flag(*t) == Some(true)).count();
    let non_veg_count = thalis.iter().filter(|t| veg_flag(*t) == Some(false)).count();

    let prices: Vec<f64> = thalis
        .iter()
        .enumerate()
        .filter_map(|(index, t)| {
            let price = valid_price(t);
            if price.is_none() {
                trace!(index, "skipping element without a valid price");
            }
            price
        })
        .collect();

    let (avg, cheapest, costliest) = if prices.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        (
            mean(&prices),
            prices.iter().copied().fold(f64::INFINITY, f64::min),
            prices.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    };

    let names = thalis
        .iter()
        .filter_map(name_of)
        .map(str::to_string)
        .collect();

    Some(ThaliStats {
        total_thalis: thalis.len(),
        veg_count,
        non_veg_count,
        avg_price: to_fixed(avg, PRICE_DIGITS),
        cheapest,
        costliest,
        names,
    })
}

/// Arithmetic mean of a non-empty price set
///
/// Falls back to summing pre-divided prices when the plain sum overflows.
fn mean(prices: &[f64]) -> f64 {
    let count = prices.len() as f64;
    let sum: f64 = prices.iter().sum();
    if sum.is_finite() {
        sum / count
    } else {
        prices.iter().map(|p| p / count).sum()
    }
}
