//! Volume Discount CLI - local function runs and configuration authoring.
//!
//! # Usage
//!
//! ```bash
//! # Run the discount function over an input document
//! vd-cli run --input cart.json
//!
//! # Build a stored configuration from tiers
//! vd-cli config build --tier 5:10 --tier 10:20
//!
//! # Validate a stored configuration
//! vd-cli config check configuration.json
//! ```
//!
//! # Commands
//!
//! - `run` - Run the discount function (stdin or file in, result document out)
//! - `config build` - Build a configuration or metafield from tiers
//! - `config check` - Validate a configuration blob
//!
//! Documents go to stdout; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use volume_discount_core::ConfigurationPolicy;

mod commands;
mod config;

use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "vd-cli")]
#[command(author, version, about = "Volume discount CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the discount function over an input document
    Run {
        /// Input document path (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Handling of unreadable configuration (`strict`, `lenient`)
        #[arg(short, long)]
        policy: Option<ConfigurationPolicy>,

        /// Pretty-print the result document
        #[arg(long)]
        pretty: bool,
    },
    /// Author and validate tier configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Build a configuration from tiers
    Build {
        /// Tier as `quantity:percentage[:message]` (repeatable)
        #[arg(short, long = "tier")]
        tiers: Vec<String>,

        /// YAML file of price levels
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the full metafield instead of just its value
        #[arg(short, long)]
        metafield: bool,
    },
    /// Validate a configuration blob
    Check {
        /// Configuration file (defaults to stdin)
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let config = CliConfig::from_env();

    // Initialize tracing
    init_tracing(
        config
            .as_ref()
            .map_or(LogFormat::default(), |config| config.log_format),
    );

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Run {
            input,
            policy,
            pretty,
        } => {
            let policy = policy.unwrap_or(config.policy);
            commands::run::execute(input.as_deref(), policy, pretty).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Build {
                tiers,
                file,
                metafield,
            } => {
                commands::tiers::build(&tiers, file.as_deref(), metafield).await?;
            }
            ConfigAction::Check { file } => {
                commands::tiers::check(file.as_deref()).await?;
            }
        },
    }
    Ok(())
}
