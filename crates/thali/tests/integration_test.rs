//! Integration tests for the thali menu operations

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use thali::{
    create_thali_description, generate_thali_receipt, get_thali_stats, parse_thalis,
    search_thali_menu, Thali, ThaliStats,
};

const MENU_JSON: &str = r#"[
    {"name": "Rajasthani Thali", "items": ["dal baati", "churma", "papad"], "price": 250, "isVeg": true},
    {"name": "Bengali Fish Thali", "items": ["machher jhol", "rice", "mishti doi"], "price": 320, "isVeg": false},
    {"name": "South Indian Thali", "items": ["sambar", "rasam", "Dal Tadka"], "price": 199.99, "isVeg": true},
    {"name": "Kashmiri Wazwan", "items": ["rogan josh", "gushtaba"], "price": 450, "isVeg": false}
]"#;

fn menu() -> Value {
    Value::Array(parse_thalis(MENU_JSON).unwrap())
}

#[test]
fn test_descriptions_for_whole_menu() {
    let menu = menu();
    let descriptions: Vec<String> = menu
        .as_array()
        .unwrap()
        .iter()
        .map(create_thali_description)
        .collect();

    assert_eq!(
        descriptions,
        vec![
            "RAJASTHANI THALI (Veg) - Items: dal baati, churma, papad - Rs.250.00",
            "BENGALI FISH THALI (Non-Veg) - Items: machher jhol, rice, mishti doi - Rs.320.00",
            "SOUTH INDIAN THALI (Veg) - Items: sambar, rasam, Dal Tadka - Rs.199.99",
            "KASHMIRI WAZWAN (Non-Veg) - Items: rogan josh, gushtaba - Rs.450.00",
        ]
    );
}

#[test]
fn test_description_matches_typed_display() {
    let thali = Thali::new("Konkani Thali", &["sol kadhi", "fish fry"], 410.0, false);
    let value: Value = thali.clone().into();
    assert_eq!(value, thali.to_value());
    assert_eq!(create_thali_description(&value), thali.to_string());
}

#[test]
fn test_stats_for_menu() {
    let stats = get_thali_stats(&menu()).unwrap();
    assert_eq!(
        stats,
        ThaliStats {
            total_thalis: 4,
            veg_count: 2,
            non_veg_count: 2,
            avg_price: "305.00".to_string(),
            cheapest: 199.99,
            costliest: 450.0,
            names: vec![
                "Rajasthani Thali".to_string(),
                "Bengali Fish Thali".to_string(),
                "South Indian Thali".to_string(),
                "Kashmiri Wazwan".to_string(),
            ],
        }
    );
}

#[test]
fn test_stats_property_example() {
    let stats = get_thali_stats(&json!([
        {"name": "A", "items": [], "price": 100, "isVeg": true},
        {"name": "B", "items": [], "price": 200, "isVeg": false}
    ]))
    .unwrap();

    assert_eq!(
        serde_json::to_value(&stats).unwrap(),
        json!({
            "totalThalis": 2,
            "vegCount": 1,
            "nonVegCount": 1,
            "avgPrice": "150.00",
            "cheapest": 100.0,
            "costliest": 200.0,
            "names": ["A", "B"]
        })
    );
}

#[test]
fn test_search_menu() {
    let menu = menu();
    let found = search_thali_menu(&menu, &json!("dal"));
    let names: Vec<&str> = found.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names, vec!["Rajasthani Thali", "South Indian Thali"]);

    assert_eq!(search_thali_menu(&menu, &json!("DAL")), found);
    assert_eq!(search_thali_menu(&menu, &json!("thali")).len(), 3);
    assert!(search_thali_menu(&menu, &json!("paneer")).is_empty());
}

#[test]
fn test_search_rejects_non_list_and_non_string() {
    assert_eq!(search_thali_menu(&json!("not array"), &json!("dal")), Vec::<Value>::new());
    assert_eq!(search_thali_menu(&menu(), &json!(5)), Vec::<Value>::new());
}

#[test]
fn test_receipt_for_order() {
    let menu = menu();
    let order = search_thali_menu(&menu, &json!("non-existent"));
    assert_eq!(generate_thali_receipt(&json!("Asha"), &Value::Array(order)), "");

    let order = json!([menu[0].clone(), menu[3].clone()]);
    assert_eq!(
        generate_thali_receipt(&json!("Meera"), &order),
        "THALI RECEIPT\n---\nCustomer: MEERA\n\
         - Rajasthani Thali x Rs.250.00\n\
         - Kashmiri Wazwan x Rs.450.00\n\
         ---\nTotal: Rs.700.00\nItems: 2"
    );
}

#[test]
fn test_operations_are_repeatable() {
    let menu = menu();
    let customer = json!("Asha");

    assert_eq!(
        create_thali_description(&menu[1]),
        create_thali_description(&menu[1])
    );
    assert_eq!(get_thali_stats(&menu), get_thali_stats(&menu));
    assert_eq!(
        search_thali_menu(&menu, &json!("rice")),
        search_thali_menu(&menu, &json!("rice"))
    );
    assert_eq!(
        generate_thali_receipt(&customer, &menu),
        generate_thali_receipt(&customer, &menu)
    );
}

#[test]
fn test_sentinels() {
    assert_eq!(create_thali_description(&json!(null)), "");
    assert_eq!(create_thali_description(&json!({})), "");
    assert_eq!(create_thali_description(&json!({"name": "X"})), "");
    assert_eq!(get_thali_stats(&json!([])), None);
    assert_eq!(get_thali_stats(&json!("not an array")), None);
    assert_eq!(generate_thali_receipt(&json!(""), &menu()), "");
    assert_eq!(generate_thali_receipt(&json!("Asha"), &json!([])), "");
}
