//! AWS Backend Settings
//!
//! Resolves the application settings from the environment and an optional
//! `.env` file, then prints or checks them.

use anyhow::{Context, Result};
use aws_backend_settings::{
    config::{Settings, DEFAULT_ENV_FILE},
    logging::{init_tracing, DEFAULT_LOG_LEVEL},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AWS Backend Settings
///
/// Loads the backend configuration exactly as the service would at startup.
#[derive(Parser, Debug)]
#[command(name = "aws-backend-settings")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Environment file to load (its values override the process environment)
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Skip the environment file entirely
    #[arg(long, conflicts_with = "env_file")]
    no_env_file: bool,

    /// Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved settings as JSON (secrets omitted)
    Show {
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
    /// Load the settings and report whether they are valid
    Check,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level);

    let env_file = (!args.no_env_file).then_some(args.env_file.as_path());
    let settings = Settings::load_from(env_file).context("Failed to load settings")?;

    match args.command.unwrap_or(Command::Show { compact: false }) {
        Command::Show { compact } => {
            let output = if compact {
                serde_json::to_string(&settings)?
            } else {
                serde_json::to_string_pretty(&settings)?
            };
            println!("{}", output);
        }
        Command::Check => {
            tracing::info!(
                project = %settings.project_name,
                version = %settings.version,
                environment = %settings.environment,
                aws_region = %settings.aws_region,
                allowed_hosts = settings.allowed_hosts.len(),
                static_aws_credentials = settings.has_static_aws_credentials(),
                "Settings are valid"
            );
        }
    }

    Ok(())
}
