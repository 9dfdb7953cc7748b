//! Volume discount function - the boundary between the host's discount engine
//! and the tier calculator.
//!
//! # Architecture
//!
//! - [`input`] mirrors the document the host sends for each cart evaluation
//! - [`output`] mirrors the document the host expects back
//! - [`run`] reads the stored configuration, runs the calculator and converts
//!   the result
//!
//! # Example
//!
//! ```
//! use volume_discount_function::{ConfigurationPolicy, run_json};
//!
//! let input = r#"{
//!     "cart": {"lines": [{"id": "gid://shopify/CartLine/1", "quantity": 7}]},
//!     "discountNode": {"metafield": {"value": "[{\"quantity\":5,\"percentage\":10}]"}}
//! }"#;
//!
//! let output = run_json(input, ConfigurationPolicy::Strict).unwrap();
//! assert!(output.contains(r#""value":"10""#));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod conversions;
pub mod input;
pub mod output;
mod run;

pub use input::RunInput;
pub use output::FunctionRunResult;
pub use run::{run, run_json};
pub use volume_discount_core::{ConfigurationError, ConfigurationPolicy};

use thiserror::Error;

/// Errors that can occur while running the function.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// The stored tier configuration is unusable.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The host document could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The host document violates its contract.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
