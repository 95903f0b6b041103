//! Price formatting and thali descriptions

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::thali::{kind, Thali};

/// Currency prefix for rendered prices
const CURRENCY_PREFIX: &str = "Rs.";

/// Separator between items in a description
const ITEM_SEPARATOR: &str = ", ";

/// Fraction digits for rendered prices
pub(crate) const PRICE_DIGITS: usize = 2;

/// Upper bound on requested fraction digits
const MAX_DIGITS: usize = 100;

/// Render a number with exactly `digits` fraction digits
///
/// Exact halfway values round away from zero. Zero and non-finite input
/// render as unsigned zero. `digits` is capped at 100.
///
/// # Examples
/// ```
/// use thali::to_fixed;
/// assert_eq!(to_fixed(250.0, 2), "250.00");
/// assert_eq!(to_fixed(1.125, 2), "1.13");
/// assert_eq!(to_fixed(-2.5, 0), "-3");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(MAX_DIGITS);
    if !value.is_finite() || value == 0.0 {
        return format!("{:.digits$}", 0.0);
    }

    let value = if is_halfway(value, digits) {
        // Nudge one ulp outward so the formatter's tie rule never applies
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };

    format!("{value:.digits$}")
}

/// `true` if `value` lies exactly between two `digits`-place decimals
///
/// Such a value is an odd multiple of 2^-(digits + 1); no other binary
/// fraction can end in a 5 at position `digits + 1`.
fn is_halfway(value: f64, digits: usize) -> bool {
    let scaled = value.abs() * 2f64.powi(digits as i32 + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

/// Render an amount as a rupee price (e.g., "Rs.250.00")
pub fn format_rupees(amount: f64) -> String {
    format!("{CURRENCY_PREFIX}{}", to_fixed(amount, PRICE_DIGITS))
}

/// Render the sum of finite amounts as a rupee price
///
/// A sum too large for `f64` is computed on halved amounts and doubled back
/// in decimal, so it never collapses to infinity.
pub(crate) fn format_rupee_total(amounts: &[f64]) -> String {
    let mut halvings = 0;
    loop {
        let factor = 0.5f64.powi(halvings);
        let sum: f64 = amounts.iter().map(|a| a * factor).sum();
        if sum.is_finite() {
            let text = (0..halvings).fold(to_fixed(sum, PRICE_DIGITS), |text, _| {
                double_decimal(&text)
            });
            return format!("{CURRENCY_PREFIX}{text}");
        }
        halvings += 1;
    }
}

/// Double a plain decimal string ("-12.55" -> "-25.10")
fn double_decimal(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let mut carry = 0;
    let mut doubled: Vec<char> = digits
        .chars()
        .rev()
        .map(|c| match c.to_digit(10) {
            Some(d) => {
                let v = d * 2 + carry;
                carry = v / 10;
                char::from_digit(v % 10, 10).unwrap_or('0')
            }
            None => c,
        })
        .collect();
    if carry > 0 {
        doubled.push('1');
    }

    let mut result = sign.to_string();
    result.extend(doubled.iter().rev());
    result
}

impl fmt::Display for Thali {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Items: {} - {}",
            self.name.to_uppercase(),
            self.label(),
            self.items.join(ITEM_SEPARATOR),
            format_rupees(self.price)
        )
    }
}

/// Describe a thali in one line
///
/// Returns an empty string unless the value is a complete, correctly typed
/// thali record.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use thali::create_thali_description;
///
/// let thali = json!({"name": "Rajasthani Thali", "items": ["dal", "churma"], "price": 250, "isVeg": true});
/// assert_eq!(
///     create_thali_description(&thali),
///     "RAJASTHANI THALI (Veg) - Items: dal, churma - Rs.250.00"
/// );
/// assert_eq!(create_thali_description(&json!(null)), "");
/// ```
pub fn create_thali_description(thali: &Value) -> String {
    match Thali::from_value(thali) {
        Some(thali) => thali.to_string(),
        None => {
            debug!(kind = kind(thali), "not a valid thali, no description");
            String::new()
        }
    }
}
