//! Tier configuration authoring commands.
//!
//! # Usage
//!
//! ```bash
//! # Build the stored configuration from shorthand tiers
//! vd-cli config build --tier 5:10 --tier 10:20
//!
//! # Build from a YAML list of price levels and print the full metafield
//! vd-cli config build --file tiers.yaml --metafield
//!
//! # Validate a stored configuration blob
//! vd-cli config check configuration.json
//! ```
//!
//! A tier file is a list of price levels with text fields, as the admin form
//! edits them:
//!
//! ```yaml
//! - quantity: "5"
//!   percentage: "10"
//!   message: Buy 5, save 10%
//! - quantity: "10"
//!   percentage: "20"
//! ```

use std::path::Path;

use tracing::{info, warn};
use volume_discount_core::{TierConfiguration, TierDraft};

use super::{read_document, write_document};

/// Build a configuration and print it.
///
/// # Arguments
///
/// * `shorthands` - Tiers as `quantity:percentage[:message]`
/// * `file` - Optional YAML file of price levels, read before the shorthands
/// * `metafield` - Print the full metafield instead of just its value
///
/// # Errors
///
/// Returns an error if the file cannot be read or any tier is invalid.
pub async fn build(
    shorthands: &[String],
    file: Option<&Path>,
    metafield: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = match file {
        Some(path) => {
            info!(path = %path.display(), "Loading tiers from file");
            Some(tokio::fs::read_to_string(path).await?)
        }
        None => None,
    };

    let configuration = build_configuration(shorthands, yaml.as_deref())?;

    if configuration.is_empty() {
        warn!("No tiers given, the discount will not apply to any line");
    }

    info!(tiers = configuration.len(), "Built configuration");

    let output = if metafield {
        serde_json::to_string_pretty(&configuration.to_metafield()?)?
    } else {
        configuration.to_json()?
    };
    write_document(&output).await?;
    Ok(())
}

/// Validate a stored configuration blob.
///
/// # Errors
///
/// Returns an error if the blob cannot be read or does not parse.
pub async fn check(file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_document(file).await?;
    let configuration = TierConfiguration::parse(&raw)?;

    info!(tiers = configuration.len(), "Configuration is valid");
    for tier in &configuration {
        info!("  {tier}");
    }

    Ok(())
}

fn build_configuration(
    shorthands: &[String],
    yaml: Option<&str>,
) -> Result<TierConfiguration, Box<dyn std::error::Error>> {
    let mut drafts: Vec<TierDraft> = match yaml {
        Some(content) => serde_yaml::from_str(content)?,
        None => Vec::new(),
    };

    for shorthand in shorthands {
        drafts.push(shorthand.parse()?);
    }

    Ok(TierConfiguration::from_drafts(&drafts)?)
}
