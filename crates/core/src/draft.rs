//! Textual tier rows as typed by a merchant.
//!
//! The admin form edits each price level as three free-text fields. A
//! [`TierDraft`] holds those fields verbatim until the merchant saves, at
//! which point [`TierDraft::to_tier`] turns them into a validated [`Tier`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Percentage, PercentageError, Tier};

/// Errors that can occur when converting a [`TierDraft`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// The quantity field is not a whole number of units.
    #[error("quantity must be a whole number, got {0:?}")]
    InvalidQuantity(String),
    /// The percentage field is not usable.
    #[error(transparent)]
    InvalidPercentage(#[from] PercentageError),
    /// Shorthand text is not `quantity:percentage[:message]`.
    #[error("expected quantity:percentage[:message], got {0:?}")]
    InvalidShorthand(String),
}

/// One editable price level.
///
/// ## Examples
///
/// ```
/// use volume_discount_core::TierDraft;
///
/// let draft: TierDraft = "10:15:Buy 10, save 15%".parse().unwrap();
/// let tier = draft.to_tier().unwrap();
/// assert_eq!(tier.quantity, 10);
/// assert_eq!(tier.percentage.to_string(), "15");
/// assert_eq!(draft.message, "Buy 10, save 15%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierDraft {
    /// Minimum units, as typed.
    pub quantity: String,
    /// Percentage off, as typed (without the `%` suffix).
    pub percentage: String,
    /// Merchant-facing label for the level.
    pub message: String,
}

impl TierDraft {
    /// Create a draft from its three text fields.
    #[must_use]
    pub fn new(
        quantity: impl Into<String>,
        percentage: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            quantity: quantity.into(),
            percentage: percentage.into(),
            message: message.into(),
        }
    }

    /// Convert the text fields into a validated tier.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is not a non-negative whole number or
    /// the percentage is not a decimal between 0 and 100.
    pub fn to_tier(&self) -> Result<Tier, DraftError> {
        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidQuantity(self.quantity.clone()))?;
        let percentage = self
            .percentage
            .trim()
            .trim_end_matches('%')
            .parse::<Percentage>()?;
        Ok(Tier::new(quantity, percentage))
    }
}

/// A new row starts at one unit with no discount.
impl Default for TierDraft {
    fn default() -> Self {
        Self::new("1", "0", "")
    }
}

impl From<Tier> for TierDraft {
    fn from(tier: Tier) -> Self {
        Self::new(tier.quantity.to_string(), tier.percentage.to_string(), "")
    }
}

/// Parses `quantity:percentage[:message]`.
///
/// The message may itself contain colons.
impl FromStr for TierDraft {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(quantity), Some(percentage), message) => {
                Ok(Self::new(quantity, percentage, message.unwrap_or_default()))
            }
            _ => Err(DraftError::InvalidShorthand(s.to_owned())),
        }
    }
}
