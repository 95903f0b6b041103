//! Thali record type and validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, ThaliError};

/// A validated meal combo record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thali {
    /// Human-readable label
    pub name: String,
    /// Dishes on the platter, in serving order
    pub items: Vec<String>,
    /// Price in rupees
    pub price: f64,
    /// `true` for vegetarian, `false` for non-vegetarian
    pub is_veg: bool,
}

impl Thali {
    /// Create a new thali
    pub fn new(name: &str, items: &[&str], price: f64, is_veg: bool) -> Self {
        Self {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            price,
            is_veg,
        }
    }

    /// Validate a loosely-typed value as a thali
    ///
    /// Returns `None` unless the value is an object carrying a string `name`,
    /// an array of strings `items`, a finite number `price` and a boolean
    /// `isVeg`. Other keys are ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;

        let name = record.get("name")?.as_str()?;
        let items = record
            .get("items")?
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?;
        let price = record.get("price").and_then(number)?;
        let is_veg = record.get("isVeg")?.as_bool()?;

        Some(Self {
            name: name.to_string(),
            items,
            price,
            is_veg,
        })
    }

    /// Convert back to the loosely-typed representation
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "items": self.items,
            "price": self.price,
            "isVeg": self.is_veg,
        })
    }

    /// Dietary label ("Veg" / "Non-Veg")
    pub fn label(&self) -> &'static str {
        if self.is_veg {
            "Veg"
        } else {
            "Non-Veg"
        }
    }
}

impl From<Thali> for Value {
    fn from(thali: Thali) -> Self {
        thali.to_value()
    }
}

/// Extract a valid price from a thali-like value
///
/// Only objects with a finite numeric `price` field have a price.
pub fn valid_price(value: &Value) -> Option<f64> {
    value.as_object()?.get("price").and_then(number)
}

fn number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// `true` if the value is a structured record (not null, not an array)
pub(crate) fn is_record(value: &Value) -> bool {
    value.is_object()
}

/// The `name` field, if the value is a record with a string name
pub(crate) fn name_of(value: &Value) -> Option<&str> {
    value.as_object()?.get("name")?.as_str()
}

/// Parse a single thali from JSON, rejecting anything that fails validation
pub fn parse_thali(json: &str) -> Result<Thali> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ThaliError::ParseError(e.to_string()))?;
    Thali::from_value(&value).ok_or_else(|| ThaliError::InvalidThali(describe_invalid(&value)))
}

/// Parse a menu (JSON array) of thali-like values
///
/// Elements are kept as-is, malformed ones included; the operations skip or
/// tolerate them individually.
pub fn parse_thalis(json: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(thalis) => Ok(thalis),
        other => Err(ThaliError::ParseError(format!(
            "expected an array of thalis, got {}",
            kind(&other)
        ))),
    }
}

fn describe_invalid(value: &Value) -> String {
    let Some(record) = value.as_object() else {
        return format!("expected an object, got {}", kind(value));
    };

    let checks: [(&str, fn(&Value) -> bool); 4] = [
        ("name", Value::is_string),
        ("items", |v| {
            v.as_array()
                .is_some_and(|items| items.iter().all(Value::is_string))
        }),
        ("price", |v| number(v).is_some()),
        ("isVeg", Value::is_boolean),
    ];

    checks
        .iter()
        .find_map(|(field, valid)| match record.get(*field) {
            None => Some(format!("missing field `{field}`")),
            Some(v) if !valid(v) => Some(format!("field `{field}` has wrong type ({})", kind(v))),
            Some(_) => None,
        })
        .unwrap_or_else(|| "unknown validation failure".to_string())
}

/// Short name for a JSON value's type
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
