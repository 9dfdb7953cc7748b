//! Integration tests for volume discounts.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p volume-discount-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `function_run` - Host input documents through to result documents
//! - `admin_configuration` - Price levels authored in the admin through to
//!   discounts at checkout
//!
//! This crate only provides document builders shared by the test files.

use serde_json::{Value, json};

/// Build a host input document.
///
/// `configuration` is the raw metafield value; `None` leaves the metafield out.
#[must_use]
pub fn input_document(configuration: Option<&str>, lines: &[(&str, u32)]) -> String {
    let lines: Vec<Value> = lines
        .iter()
        .map(|(id, quantity)| json!({"id": id, "quantity": quantity}))
        .collect();

    let discount_node = configuration.map_or_else(
        || json!({"metafield": null}),
        |value| json!({"metafield": {"value": value}}),
    );

    json!({
        "cart": {"lines": lines},
        "discountNode": discount_node,
    })
    .to_string()
}

/// Extract `(cart line id, percentage text)` pairs from a result document.
///
/// # Panics
///
/// Panics if the document does not have the result shape.
#[must_use]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
pub fn discounted_lines(output: &str) -> Vec<(String, String)> {
    let output: Value = serde_json::from_str(output).unwrap();
    assert_eq!(output["discountApplicationStrategy"], "FIRST");

    output["discounts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|discount| {
            let targets = discount["targets"].as_array().unwrap();
            assert_eq!(targets.len(), 1, "one target per discount");
            (
                targets[0]["cartLine"]["id"].as_str().unwrap().to_owned(),
                discount["value"]["percentage"]["value"]
                    .as_str()
                    .unwrap()
                    .to_owned(),
            )
        })
        .collect()
}

/// Gid of the `n`th cart line.
#[must_use]
pub fn line_gid(n: u32) -> String {
    format!("gid://shopify/CartLine/{n}")
}
