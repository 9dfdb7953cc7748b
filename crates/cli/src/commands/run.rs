//! Run the discount function over an input document.
//!
//! # Usage
//!
//! ```bash
//! # Read the input document from a file
//! vd-cli run --input cart.json
//!
//! # Read from stdin, tolerate broken configuration
//! cat cart.json | vd-cli run --policy lenient --pretty
//! ```

use std::path::Path;

use tracing::info;
use volume_discount_function::{ConfigurationPolicy, FunctionRunResult, RunInput, run};

use super::{read_document, write_document};

/// Run the function and print the result document.
///
/// # Arguments
///
/// * `input` - Input document path (`None` or `-` for stdin)
/// * `policy` - Handling of unreadable configuration
/// * `pretty` - Pretty-print the result
///
/// # Errors
///
/// Returns an error if the input cannot be read or decoded, or the function
/// rejects it.
pub async fn execute(
    input: Option<&Path>,
    policy: ConfigurationPolicy,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(input).await?;
    let output = evaluate(&document, policy, pretty)?;
    write_document(&output).await?;
    Ok(())
}

fn evaluate(
    document: &str,
    policy: ConfigurationPolicy,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let input: RunInput = serde_json::from_str(document)?;

    info!(lines = input.cart.lines.len(), %policy, "Running volume discount function");

    let result: FunctionRunResult = run(&input, policy)?;

    info!(discounts = result.discounts.len(), "Function run finished");

    let output = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "cart": {"lines": [
            {"id": "gid://shopify/CartLine/1", "quantity": 12},
            {"id": "gid://shopify/CartLine/2", "quantity": 2}
        ]},
        "discountNode": {"metafield": {"value": "[{\"quantity\":5,\"percentage\":10},{\"quantity\":10,\"percentage\":20}]"}}
    }"#;

    #[test]
    fn test_evaluate_compact() {
        let output = evaluate(DOCUMENT, ConfigurationPolicy::Strict, false).unwrap();
        assert_eq!(
            output,
            r#"{"discounts":[{"targets":[{"cartLine":{"id":"gid://shopify/CartLine/1"}}],"value":{"percentage":{"value":"20"}}}],"discountApplicationStrategy":"FIRST"}"#
        );
    }

    #[test]
    fn test_evaluate_pretty_is_same_document() {
        let compact: serde_json::Value =
            serde_json::from_str(&evaluate(DOCUMENT, ConfigurationPolicy::Strict, false).unwrap())
                .unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&evaluate(DOCUMENT, ConfigurationPolicy::Strict, true).unwrap())
                .unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_evaluate_policy() {
        let broken = r#"{"cart": {"lines": [{"id": "a", "quantity": 1}]}}"#;
        assert!(evaluate(broken, ConfigurationPolicy::Strict, false).is_err());
        assert_eq!(
            evaluate(broken, ConfigurationPolicy::Lenient, false).unwrap(),
            r#"{"discounts":[],"discountApplicationStrategy":"FIRST"}"#
        );
    }
}
