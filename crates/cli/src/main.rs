mod commands;
mod config;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::ListFilter;
use config::InspectorConfig;
use cryptocolors_abi::{cryptocolors, InterfaceTable};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "abi-inspect",
    about = "Inspect the CryptoColors contract interface table"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "abi-inspect.toml", value_name = "PATH")]
    config: PathBuf,

    /// Loads the table from a JSON file instead of the embedded one.
    #[arg(long, value_name = "PATH")]
    abi: Option<PathBuf>,

    /// Overrides the configured log filter.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists entries in declaration order.
    List {
        /// Only callable operations.
        #[arg(long, conflicts_with = "notifications")]
        operations: bool,

        /// Only notifications.
        #[arg(long)]
        notifications: bool,
    },
    /// Prints the entry with the given name as JSON.
    Resolve { name: String },
    /// Prints selectors and topics for every entry.
    Signatures,
    /// Loads and validates a table, reporting entry counts.
    Validate {
        /// Table to validate; defaults to the configured table.
        path: Option<PathBuf>,
    },
    /// Re-serializes the loaded table.
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = InspectorConfig::load(&cli.config)?;

    if let Some(path) = &cli.abi {
        config.table.path = Some(path.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config.logging.level);
    debug!(config = %cli.config.display(), "configuration loaded");

    let output = run(&cli.command, &config)?;
    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    Ok(())
}

fn run(command: &Command, config: &InspectorConfig) -> Result<String> {
    if let Command::Validate { path: Some(path) } = command {
        let table = load_from(path)?;
        return Ok(commands::validate(&table));
    }

    let owned;
    let table: &InterfaceTable = match &config.table.path {
        Some(path) => {
            owned = load_from(path)?;
            &owned
        }
        None => cryptocolors(),
    };

    match command {
        Command::List {
            operations,
            notifications,
        } => {
            let filter = match (*operations, *notifications) {
                (true, _) => ListFilter::Operations,
                (_, true) => ListFilter::Notifications,
                _ => ListFilter::All,
            };
            Ok(commands::list(table, filter))
        }
        Command::Resolve { name } => commands::resolve(table, name),
        Command::Signatures => Ok(commands::signatures(table)),
        Command::Validate { .. } => Ok(commands::validate(table)),
        Command::Dump => commands::dump(table),
    }
}

fn load_from(path: &Path) -> Result<InterfaceTable> {
    let table = InterfaceTable::from_path(path)
        .with_context(|| format!("failed to load interface table {}", path.display()))?;
    info!(path = %path.display(), entries = table.len(), "interface table loaded");
    Ok(table)
}

fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}
