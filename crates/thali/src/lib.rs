//! Thali - meal combo formatting and reporting
//!
//! This crate provides:
//! - Thali descriptions ("RAJASTHANI THALI (Veg) - Items: dal, churma - Rs.250.00")
//! - Menu statistics (veg/non-veg counts, average, cheapest, costliest)
//! - Case-insensitive menu search over names and items
//! - Plain-text customer receipts
//!
//! All four operations accept loosely-typed JSON values and never fail:
//! malformed input yields an empty string, an empty list, or `None`.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use thali::{create_thali_description, generate_thali_receipt};
//!
//! let thali = json!({
//!     "name": "Rajasthani Thali",
//!     "items": ["dal", "churma"],
//!     "price": 250,
//!     "isVeg": true
//! });
//!
//! assert_eq!(
//!     create_thali_description(&thali),
//!     "RAJASTHANI THALI (Veg) - Items: dal, churma - Rs.250.00"
//! );
//!
//! let receipt = generate_thali_receipt(&json!("Asha"), &json!([thali]));
//! assert!(receipt.starts_with("THALI RECEIPT\n---\nCustomer: ASHA"));
//! ```

mod formatter;
mod receipt;
mod search;
mod stats;
mod thali;

pub use formatter::{create_thali_description, format_rupees, to_fixed};
pub use receipt::generate_thali_receipt;
pub use search::search_thali_menu;
pub use stats::{get_thali_stats, ThaliStats};
pub use thali::{parse_thali, parse_thalis, valid_price, Thali};

use thiserror::Error;

/// Errors that can occur while loading thali data
#[derive(Debug, Error)]
pub enum ThaliError {
    #[error("Failed to parse thali data: {0}")]
    ParseError(String),

    #[error("Invalid thali: {0}")]
    InvalidThali(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for thali loading operations
pub type Result<T> = std::result::Result<T, ThaliError>;
