//! Input document sent by the host for one cart evaluation.
//!
//! ```json
//! {
//!   "cart": {"lines": [{"id": "gid://shopify/CartLine/1", "quantity": 7}]},
//!   "discountNode": {"metafield": {"value": "[{\"quantity\":5,\"percentage\":10}]"}}
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Root of the input document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunInput {
    /// Cart being evaluated.
    pub cart: Cart,
    /// Discount record the function is attached to.
    #[serde(default)]
    pub discount_node: DiscountNode,
}

impl RunInput {
    /// Raw configuration blob, if the discount record carries one.
    #[must_use]
    pub fn configuration(&self) -> Option<&str> {
        self.discount_node
            .metafield
            .as_ref()
            .map(|metafield| metafield.value.as_str())
    }
}

/// Cart snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    /// Line items in cart order.
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

/// One cart line as the host describes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Host global id of the line.
    pub id: String,
    /// Units on the line.
    pub quantity: u32,
}

/// The discount record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscountNode {
    /// Configuration metafield; absent when the record has none.
    #[serde(default)]
    pub metafield: Option<Metafield>,
}

/// A metafield value as the host delivers it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metafield {
    /// JSON text of the stored configuration.
    pub value: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let input: RunInput = serde_json::from_str(
            r#"{
                "cart": {"lines": [
                    {"id": "gid://shopify/CartLine/1", "quantity": 3},
                    {"id": "gid://shopify/CartLine/2", "quantity": 9}
                ]},
                "discountNode": {"metafield": {"value": "[]"}}
            }"#,
        )
        .unwrap();

        assert_eq!(input.cart.lines.len(), 2);
        assert_eq!(input.configuration(), Some("[]"));
    }

    #[test]
    fn test_missing_and_null_metafield() {
        let input: RunInput = serde_json::from_str(r#"{"cart": {"lines": []}}"#).unwrap();
        assert_eq!(input.configuration(), None);

        let input: RunInput =
            serde_json::from_str(r#"{"cart": {"lines": []}, "discountNode": {"metafield": null}}"#)
                .unwrap();
        assert_eq!(input.configuration(), None);
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let result = serde_json::from_str::<RunInput>(
            r#"{"cart": {"lines": [{"id": "a", "quantity": -1}]}}"#,
        );
        assert!(result.is_err());
    }
}
