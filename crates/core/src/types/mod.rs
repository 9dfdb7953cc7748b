//! Core types for volume discounts.
//!
//! This module provides type-safe wrappers for the discount domain.

pub mod cart;
pub mod discount;
pub mod id;
pub mod percentage;
pub mod tier;

pub use cart::CartLine;
pub use discount::{ApplicationStrategy, DiscountResult, LineDiscount};
pub use id::*;
pub use percentage::{Percentage, PercentageError};
pub use tier::Tier;
