//! Print a description, stats, search results and a receipt for a sample menu
//! Run with: cargo run --example receipt_demo
//!
//! Set RUST_LOG=thali=debug to see why malformed input is rejected.

use serde_json::{json, Value};
use thali::{
    create_thali_description, generate_thali_receipt, get_thali_stats, parse_thalis,
    search_thali_menu,
};
use tracing_subscriber::EnvFilter;

const MENU: &str = r#"[
    {"name": "Rajasthani Thali", "items": ["dal baati", "churma", "papad"], "price": 250, "isVeg": true},
    {"name": "Punjabi Thali", "items": ["dal makhani", "paneer", "naan"], "price": 280, "isVeg": true},
    {"name": "Malabar Thali", "items": ["fish curry", "appam"], "price": 340, "isVeg": false},
    {"name": "Broken Entry", "price": "n/a"}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("thali=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let menu = Value::Array(parse_thalis(MENU)?);

    println!("=== Menu ===");
    for thali in menu.as_array().into_iter().flatten() {
        let description = create_thali_description(thali);
        if description.is_empty() {
            println!("(skipped malformed entry)");
        } else {
            println!("{description}");
        }
    }

    println!("\n=== Stats ===");
    if let Some(stats) = get_thali_stats(&menu) {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    println!("\n=== Search: \"dal\" ===");
    let order = search_thali_menu(&menu, &json!("dal"));
    for thali in &order {
        println!("{}", thali["name"]);
    }

    println!("\n=== Receipt ===");
    println!("{}", generate_thali_receipt(&json!("Asha"), &Value::Array(order)));

    Ok(())
}
