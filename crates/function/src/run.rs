//! Function entry points.

use tracing::{debug, instrument};
use volume_discount_core::{ConfigurationPolicy, TierConfiguration, compute_discounts};

use crate::FunctionError;
use crate::conversions::{convert_cart_lines, convert_result};
use crate::input::RunInput;
use crate::output::FunctionRunResult;

/// Compute line discounts for one cart evaluation.
///
/// An empty tier list short-circuits to the empty result before the cart is
/// looked at.
///
/// # Errors
///
/// Returns [`FunctionError::Configuration`] if the stored configuration is
/// unusable under [`ConfigurationPolicy::Strict`], or
/// [`FunctionError::InvalidInput`] if a cart line has no id.
#[instrument(skip(input), fields(lines = input.cart.lines.len()))]
pub fn run(input: &RunInput, policy: ConfigurationPolicy) -> Result<FunctionRunResult, FunctionError> {
    let configuration = TierConfiguration::load(input.configuration(), policy)?;

    if configuration.is_empty() {
        debug!("No tiers configured");
        return Ok(FunctionRunResult::empty());
    }

    let lines = convert_cart_lines(&input.cart.lines)?;
    let result = compute_discounts(configuration.tiers(), &lines);

    debug!(
        tiers = configuration.len(),
        discounts = result.discounts.len(),
        "Function run complete"
    );

    Ok(convert_result(result))
}

/// Run the function over a JSON input document, returning the JSON result.
///
/// # Errors
///
/// Returns [`FunctionError::Json`] if the input is not a valid document, and
/// any error from [`run`].
pub fn run_json(input: &str, policy: ConfigurationPolicy) -> Result<String, FunctionError> {
    let input: RunInput = serde_json::from_str(input)?;
    let output = run(&input, policy)?;
    Ok(serde_json::to_string(&output)?)
}
