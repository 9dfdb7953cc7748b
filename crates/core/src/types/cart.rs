//! Cart snapshot types.

use serde::{Deserialize, Serialize};

use super::CartLineId;

/// One line item in the cart being evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Host identifier, unique within the cart.
    pub id: CartLineId,
    /// Units purchased on this line.
    pub quantity: u32,
}

impl CartLine {
    /// Create a new cart line.
    #[must_use]
    pub fn new(id: impl Into<CartLineId>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}
