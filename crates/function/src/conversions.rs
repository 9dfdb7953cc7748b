//! Conversions between host documents and core types.

use volume_discount_core::{CartLine, CartLineId, DiscountResult, LineDiscount};

use crate::FunctionError;
use crate::input;
use crate::output::{CartLineTarget, Discount, FunctionRunResult, Percentage, Target, Value};

// =============================================================================
// Input conversions
// =============================================================================

/// Convert host cart lines, rejecting lines without an id.
pub fn convert_cart_lines(lines: &[input::CartLine]) -> Result<Vec<CartLine>, FunctionError> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let id = CartLineId::new(line.id.as_str());
            if id.is_blank() {
                return Err(FunctionError::InvalidInput(format!(
                    "cart line {index} has no id"
                )));
            }
            Ok(CartLine {
                id,
                quantity: line.quantity,
            })
        })
        .collect()
}

// =============================================================================
// Output conversions
// =============================================================================

fn convert_line_discount(discount: LineDiscount) -> Discount {
    Discount {
        targets: vec![Target::CartLine(CartLineTarget {
            id: discount.target.into_inner(),
        })],
        value: Value::Percentage(Percentage {
            value: discount.percentage.to_string(),
        }),
    }
}

pub fn convert_result(result: DiscountResult) -> FunctionRunResult {
    FunctionRunResult {
        discounts: result
            .discounts
            .into_iter()
            .map(convert_line_discount)
            .collect(),
        discount_application_strategy: result.application_strategy,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id_rejected() {
        let lines = vec![
            input::CartLine {
                id: "gid://shopify/CartLine/1".to_owned(),
                quantity: 1,
            },
            input::CartLine {
                id: " ".to_owned(),
                quantity: 2,
            },
        ];
        let err = convert_cart_lines(&lines).unwrap_err();
        assert!(err.to_string().contains("cart line 1"));
    }

    #[test]
    fn test_result_conversion_keeps_decimal_text() {
        let result = DiscountResult {
            discounts: vec![LineDiscount {
                target: CartLineId::new("gid://shopify/CartLine/9"),
                percentage: "12.50".parse().unwrap(),
            }],
            ..DiscountResult::empty()
        };

        let converted = convert_result(result);
        assert_eq!(
            converted.discounts[0].value,
            Value::Percentage(Percentage {
                value: "12.5".to_owned()
            })
        );
        assert_eq!(
            converted.discounts[0].targets,
            vec![Target::CartLine(CartLineTarget {
                id: "gid://shopify/CartLine/9".to_owned()
            })]
        );
    }
}
