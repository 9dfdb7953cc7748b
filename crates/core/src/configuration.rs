//! Typed boundary for the stored tier configuration.
//!
//! The admin app stores tiers on the discount record as a JSON metafield:
//!
//! ```json
//! [{"quantity": 5, "percentage": 10}, {"quantity": 10, "percentage": 20}]
//! ```
//!
//! Every "trust the input" assumption about that blob lives here. Callers get
//! either validated [`Tier`]s or a [`ConfigurationError`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::warn;

use crate::draft::TierDraft;
use crate::types::{Percentage, Tier};

/// Metafield namespace owned by the app.
pub const METAFIELD_NAMESPACE: &str = "$app:volume-discount";
/// Metafield key holding the tier list.
pub const METAFIELD_KEY: &str = "function-configuration";
/// Host metafield type of the tier list.
pub const METAFIELD_TYPE: &str = "json";

/// Errors from reading a stored configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The discount record carries no configuration.
    #[error("configuration is missing")]
    Missing,
    /// The configuration is present but blank.
    #[error("configuration is empty")]
    Empty,
    /// The configuration is not a JSON list of tiers.
    #[error("configuration is not a list of tiers: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A tier has an out-of-range value.
    #[error("tier {index} is invalid: {reason}")]
    InvalidTier {
        /// Zero-based position of the tier in the list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
}

/// What to do with a configuration that cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationPolicy {
    /// Surface the error to the host.
    #[default]
    Strict,
    /// Log the error and treat the discount as having no tiers.
    Lenient,
}

impl std::fmt::Display for ConfigurationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for ConfigurationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(format!("invalid configuration policy: {s}")),
        }
    }
}

/// Tier as stored, before validation.
#[derive(Deserialize)]
struct StoredTier {
    quantity: i64,
    percentage: Decimal,
}

/// Tier as written back to the metafield.
#[derive(Serialize)]
struct EncodedTier {
    quantity: u32,
    #[serde(serialize_with = "serialize_percentage_number")]
    percentage: Percentage,
}

/// The admin app has always stored percentages as JSON numbers.
fn serialize_percentage_number<S>(percentage: &Percentage, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number =
        serde_json::Number::from_str(&percentage.to_string()).map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}

/// A validated, ordered list of tiers.
///
/// Order only matters for tie-breaks between tiers that share a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TierConfiguration(Vec<Tier>);

impl TierConfiguration {
    /// Wrap already-validated tiers.
    #[must_use]
    pub const fn new(tiers: Vec<Tier>) -> Self {
        Self(tiers)
    }

    /// Parse a stored configuration blob.
    ///
    /// Unknown fields on a tier are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob is blank, is not a JSON array of
    /// `{quantity, percentage}` objects, or contains a negative quantity or a
    /// percentage outside `0..=100`.
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        if raw.trim().is_empty() {
            return Err(ConfigurationError::Empty);
        }

        let stored: Vec<StoredTier> = serde_json::from_str(raw)?;

        stored
            .into_iter()
            .enumerate()
            .map(|(index, tier)| -> Result<Tier, ConfigurationError> {
                let quantity =
                    u32::try_from(tier.quantity).map_err(|_| ConfigurationError::InvalidTier {
                        index,
                        reason: format!("quantity out of range: {}", tier.quantity),
                    })?;
                let percentage =
                    Percentage::new(tier.percentage).map_err(|e| ConfigurationError::InvalidTier {
                        index,
                        reason: e.to_string(),
                    })?;
                Ok(Tier::new(quantity, percentage))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Read an optional blob, applying `policy` to anything unreadable.
    ///
    /// # Errors
    ///
    /// Under [`ConfigurationPolicy::Strict`], returns
    /// [`ConfigurationError::Missing`] when `raw` is `None` and any error from
    /// [`TierConfiguration::parse`] otherwise. Never fails under
    /// [`ConfigurationPolicy::Lenient`].
    pub fn load(raw: Option<&str>, policy: ConfigurationPolicy) -> Result<Self, ConfigurationError> {
        let parsed = raw.map_or(Err(ConfigurationError::Missing), Self::parse);

        match (parsed, policy) {
            (Ok(configuration), _) => Ok(configuration),
            (Err(e), ConfigurationPolicy::Strict) => Err(e),
            (Err(e), ConfigurationPolicy::Lenient) => {
                warn!(error = %e, "Ignoring unreadable configuration");
                Ok(Self::default())
            }
        }
    }

    /// Build a configuration from textual tier rows.
    ///
    /// Messages are not part of the stored configuration and are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidTier`] naming the first row that
    /// fails to parse.
    pub fn from_drafts(drafts: &[TierDraft]) -> Result<Self, ConfigurationError> {
        drafts
            .iter()
            .enumerate()
            .map(|(index, draft)| {
                draft.to_tier().map_err(|e| ConfigurationError::InvalidTier {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Encode as the stored JSON blob.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let encoded: Vec<EncodedTier> = self
            .0
            .iter()
            .map(|tier| EncodedTier {
                quantity: tier.quantity,
                percentage: tier.percentage,
            })
            .collect();
        serde_json::to_string(&encoded)
    }

    /// Describe the metafield the host stores this configuration in.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_metafield(&self) -> serde_json::Result<ConfigurationMetafield> {
        Ok(ConfigurationMetafield {
            namespace: METAFIELD_NAMESPACE.to_owned(),
            key: METAFIELD_KEY.to_owned(),
            kind: METAFIELD_TYPE.to_owned(),
            value: self.to_json()?,
        })
    }

    /// The tiers, in configuration order.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.0
    }

    /// Number of tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tiers are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Tier>> for TierConfiguration {
    fn from(tiers: Vec<Tier>) -> Self {
        Self(tiers)
    }
}

impl AsRef<[Tier]> for TierConfiguration {
    fn as_ref(&self) -> &[Tier] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TierConfiguration {
    type Item = &'a Tier;
    type IntoIter = std::slice::Iter<'a, Tier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Metafield input for attaching a configuration to a discount record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationMetafield {
    /// Metafield namespace.
    pub namespace: String,
    /// Metafield key.
    pub key: String,
    /// Host metafield type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Encoded tier list.
    pub value: String,
}
