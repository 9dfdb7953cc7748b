//! CLI settings loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VD_CONFIG_POLICY` - `strict` or `lenient` handling of unreadable
//!   configuration (default: strict)
//! - `VD_LOG_FORMAT` - `pretty` or `json` log lines on stderr (default: pretty)
//! - `RUST_LOG` - Log filter (default: info)
//!
//! Command-line flags take precedence over these.

use thiserror::Error;
use volume_discount_core::ConfigurationPolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid log format: {s}")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Policy for unreadable tier configuration.
    pub policy: ConfigurationPolicy,
    /// Log line format.
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// Reads `.env` first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let policy = parse_optional(&lookup, "VD_CONFIG_POLICY")?.unwrap_or_default();
        let log_format = parse_optional(&lookup, "VD_LOG_FORMAT")?.unwrap_or_default();

        Ok(Self { policy, log_format })
    }
}

fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr<Err = String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .map(|value| {
            value
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar(name.to_owned(), e))
        })
        .transpose()
}
