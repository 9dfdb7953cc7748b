//! Best-tier selection per cart line.
//!
//! For each line, the tiers whose threshold the line's quantity meets are
//! candidates, and the one with the largest threshold wins. When several
//! tiers share that threshold, the first one in configuration order wins.
//! Lines with no candidate get no discount at all rather than a zero entry.

use tracing::debug;

use crate::types::{CartLine, DiscountResult, LineDiscount, Tier};

/// Pick the tier that applies to a line with `quantity` units.
///
/// ```
/// use volume_discount_core::{Tier, select_tier};
///
/// let tiers = [
///     Tier::new(5, "10".parse().unwrap()),
///     Tier::new(10, "20".parse().unwrap()),
/// ];
/// assert_eq!(select_tier(&tiers, 7), Some(&tiers[0]));
/// assert_eq!(select_tier(&tiers, 12), Some(&tiers[1]));
/// assert_eq!(select_tier(&tiers, 3), None);
/// ```
#[must_use]
pub fn select_tier(tiers: &[Tier], quantity: u32) -> Option<&Tier> {
    tiers
        .iter()
        .filter(|tier| tier.is_met_by(quantity))
        .fold(None, |best: Option<&Tier>, tier| match best {
            Some(current) if current.quantity >= tier.quantity => Some(current),
            _ => Some(tier),
        })
}

/// Compute the discount for every line of a cart.
///
/// Discounts come back in cart order. With no tiers configured the cart is
/// not read at all.
pub fn compute_discounts<'a, I>(tiers: &[Tier], cart_lines: I) -> DiscountResult
where
    I: IntoIterator<Item = &'a CartLine>,
{
    if tiers.is_empty() {
        debug!("No tiers configured, skipping cart");
        return DiscountResult::empty();
    }

    let discounts: Vec<LineDiscount> = cart_lines
        .into_iter()
        .filter_map(|line| {
            select_tier(tiers, line.quantity).map(|tier| LineDiscount {
                target: line.id.clone(),
                percentage: tier.percentage,
            })
        })
        .collect();

    debug!(
        tiers = tiers.len(),
        discounted_lines = discounts.len(),
        "Computed line discounts"
    );

    DiscountResult {
        discounts,
        ..DiscountResult::empty()
    }
}
