//! Volume discount tiers.

use serde::{Deserialize, Serialize};

use super::Percentage;

/// A quantity threshold paired with the discount it unlocks.
///
/// A cart line qualifies for a tier when its quantity is at least the
/// tier's `quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tier {
    /// Minimum units on a line for this tier to apply.
    pub quantity: u32,
    /// Discount applied to a qualifying line.
    pub percentage: Percentage,
}

impl Tier {
    /// Create a new tier.
    #[must_use]
    pub const fn new(quantity: u32, percentage: Percentage) -> Self {
        Self {
            quantity,
            percentage,
        }
    }

    /// Whether a line with `quantity` units qualifies for this tier.
    #[must_use]
    pub const fn is_met_by(&self, quantity: u32) -> bool {
        quantity >= self.quantity
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+ units: {}% off", self.quantity, self.percentage)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let tier = Tier::new(5, "10".parse().unwrap());
        assert!(!tier.is_met_by(4));
        assert!(tier.is_met_by(5));
        assert!(tier.is_met_by(6));
    }

    #[test]
    fn test_zero_threshold_matches_everything() {
        let tier = Tier::new(0, Percentage::ZERO);
        assert!(tier.is_met_by(0));
    }

    #[test]
    fn test_display() {
        let tier = Tier::new(10, "12.5".parse().unwrap());
        assert_eq!(tier.to_string(), "10+ units: 12.5% off");
    }
}
