//! Menu search

use serde_json::Value;
use tracing::debug;

use crate::thali::{kind, name_of};

/// Find thalis whose name or any item contains `query`, ignoring case
///
/// Returns an empty list when `thalis` is not an array or `query` is not a
/// string. Matches keep their menu order; malformed elements never match.
pub fn search_thali_menu(thalis: &Value, query: &Value) -> Vec<Value> {
    let (Some(thalis), Some(query)) = (thalis.as_array(), query.as_str()) else {
        debug!(
            thalis = kind(thalis),
            query = kind(query),
            "search needs an array and a string"
        );
        return Vec::new();
    };

    let query = query.to_lowercase();
    thalis
        .iter()
        .filter(|thali| matches(thali, &query))
        .cloned()
        .collect()
}

fn matches(thali: &Value, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);

    let name_match = name_of(thali).is_some_and(contains);
    let item_match = thali
        .get("items")
        .and_then(Value::as_array)
        .is_some_and(|items| items.iter().filter_map(Value::as_str).any(contains));

    name_match || item_match
}
