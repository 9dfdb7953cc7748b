//! Result document returned to the host.
//!
//! ```json
//! {
//!   "discounts": [{
//!     "targets": [{"cartLine": {"id": "gid://shopify/CartLine/1"}}],
//!     "value": {"percentage": {"value": "10"}}
//!   }],
//!   "discountApplicationStrategy": "FIRST"
//! }
//! ```

use serde::{Deserialize, Serialize};
use volume_discount_core::ApplicationStrategy;

/// Root of the result document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRunResult {
    /// Discounts in cart order.
    pub discounts: Vec<Discount>,
    /// How the host resolves several discounts on one target.
    pub discount_application_strategy: ApplicationStrategy,
}

impl FunctionRunResult {
    /// The result that discounts nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            discounts: Vec::new(),
            discount_application_strategy: ApplicationStrategy::First,
        }
    }
}

/// A discount on one or more targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// What the discount applies to.
    pub targets: Vec<Target>,
    /// How much is taken off.
    pub value: Value,
}

/// A discount target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    /// A whole cart line.
    CartLine(CartLineTarget),
}

/// Reference to a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineTarget {
    /// Host global id of the line.
    pub id: String,
}

/// Discount amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    /// Percentage off.
    Percentage(Percentage),
}

/// Percentage value as decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentage {
    /// E.g. `"12.5"`.
    pub value: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_result_shape() {
        let json = serde_json::to_value(FunctionRunResult::empty()).unwrap();
        assert_eq!(
            json,
            json!({"discounts": [], "discountApplicationStrategy": "FIRST"})
        );
    }

    #[test]
    fn test_discount_shape() {
        let discount = Discount {
            targets: vec![Target::CartLine(CartLineTarget {
                id: "gid://shopify/CartLine/1".to_owned(),
            })],
            value: Value::Percentage(Percentage {
                value: "12.5".to_owned(),
            }),
        };

        assert_eq!(
            serde_json::to_value(&discount).unwrap(),
            json!({
                "targets": [{"cartLine": {"id": "gid://shopify/CartLine/1"}}],
                "value": {"percentage": {"value": "12.5"}}
            })
        );
    }
}
