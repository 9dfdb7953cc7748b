//! Discount result types.

use serde::{Deserialize, Serialize};

use super::{CartLineId, Percentage};

/// Rule the host uses when several discounts target the same line.
///
/// The calculator emits at most one discount per line, so this is a
/// structural constant rather than a runtime choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStrategy {
    /// Only the first applicable discount in the list applies to a target.
    #[default]
    First,
}

impl std::fmt::Display for ApplicationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "FIRST"),
        }
    }
}

/// A percentage discount on a single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiscount {
    /// The discounted line.
    pub target: CartLineId,
    /// Percentage off the line.
    pub percentage: Percentage,
}

/// Output of one calculator invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscountResult {
    /// Per-line discounts in cart order.
    pub discounts: Vec<LineDiscount>,
    /// Always [`ApplicationStrategy::First`].
    pub application_strategy: ApplicationStrategy,
}

impl DiscountResult {
    /// The result that applies no discount anywhere.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            discounts: Vec::new(),
            application_strategy: ApplicationStrategy::First,
        }
    }

    /// Whether no line received a discount.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }
}
