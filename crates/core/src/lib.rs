//! Volume Discount Core - tier selection and configuration types.
//!
//! This crate provides everything the discount function needs that does not
//! touch the host boundary:
//! - `function` - Parses host input documents and produces result documents
//! - `cli` - Runs the function locally and authors configuration blobs
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no host
//! document formats. Given the same tiers and cart, every call produces the
//! same result.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for cart line ids, percentages, tiers and results
//! - [`configuration`] - Typed parse/encode boundary for the stored tier blob
//! - [`draft`] - Textual tier rows as typed by a merchant
//! - [`calculator`] - Best-tier selection per cart line

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod calculator;
pub mod configuration;
pub mod draft;
pub mod types;

pub use calculator::{compute_discounts, select_tier};
pub use configuration::{
    ConfigurationError, ConfigurationMetafield, ConfigurationPolicy, TierConfiguration,
};
pub use draft::{DraftError, TierDraft};
pub use types::*;
