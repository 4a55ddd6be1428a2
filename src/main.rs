//! Environment Reporter CLI
//!
//! Loads a .env file into the process environment, then prints a greeting,
//! a secret value or an incremented number.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_reporter::{Config, DEFAULT_CONFIG_FILE, LoadOutcome};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "envreport")]
#[command(about = "Load a .env file and report configuration values")]
#[command(version = "0.1.0")]
#[command(long_about = "
Environment Reporter loads KEY=VALUE pairs from a .env file into the process
environment (existing variables are never overwritten) and reports values.

Examples:
  envreport hello                      # Print the greeting
  envreport password                   # Print the PASSWORD variable
  envreport --env-file prod.env password --key DB_PASSWORD
  envreport inc 41                     # Print 42
  envreport config                     # Show current configuration
")]
struct Cli {
    /// Configuration file path (default: envreport.toml if present)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Dotenv file to load (default: search for .env upwards)
    #[arg(long, global = true, value_name = "FILE")]
    env_file: Option<String>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the greeting
    Hello,

    /// Print the secret variable
    Password {
        /// Variable to report instead of the configured one
        #[arg(short, long, value_name = "VARIABLE")]
        key: Option<String>,
    },

    /// Print the successor of a number
    Inc {
        #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
        number: i64,
    },

    /// Show current configuration
    Config,

    /// Create a sample configuration file
    InitConfig {
        /// Output path for config file (default: envreport.toml)
        #[arg(value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "env_reporter=debug,envreport=debug"
    } else {
        "env_reporter=warn,envreport=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load configuration file")?,
        None => Config::discover("."),
    };

    if let Some(env_file) = &cli.env_file {
        config.env_file = Some(env_file.clone());
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;

    match env_reporter::init_env(&config) {
        LoadOutcome::Loaded(path) => tracing::debug!(path = %path.display(), "environment ready"),
        LoadOutcome::Missing => tracing::debug!("running without an environment file"),
        LoadOutcome::Skipped(reason) => tracing::debug!(%reason, "environment file ignored"),
    }

    match cli.command {
        Commands::Hello => {
            env_reporter::print_hello().context("Failed to write greeting")?;
            Ok(())
        }

        Commands::Password { key } => {
            let key = key.as_deref().unwrap_or_else(|| config.secret_key());
            let mut stdout = std::io::stdout().lock();
            env_reporter::write_password(&mut stdout, key).context("Failed to write password")?;
            stdout.flush()?;
            Ok(())
        }

        Commands::Inc { number } => {
            println!("{}", env_reporter::inc_num(number));
            Ok(())
        }

        Commands::Config => {
            let toml_content =
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            println!("{}", toml_content);
            println!("Secret variable: {}", config.secret_key());
            Ok(())
        }

        Commands::InitConfig { output } => {
            let config_path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

            if config_path.exists() {
                println!(
                    "Configuration file already exists: {}",
                    config_path.display()
                );
                return Ok(());
            }

            let toml_content = toml::to_string_pretty(&Config::sample())
                .context("Failed to serialize configuration")?;

            std::fs::write(
                &config_path,
                format!("# Environment Reporter Configuration\n\n{}", toml_content),
            )
            .context("Failed to write configuration file")?;

            println!("Created configuration file: {}", config_path.display());
            println!();
            println!("Edit the file to customize your settings:");
            println!("  - env_file: Dotenv file loaded at startup");
            println!("  - secret_key: Variable printed by `envreport password`");

            Ok(())
        }
    }
}
