//! BigCommerce CLI - Command-line client for the BigCommerce platform
//!
//! This CLI enables developers to:
//! - Validate an access token's granted scopes
//! - Export the full product catalog to a local JSON file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bigcommerce_cli::commands;
use bigcommerce_cli::error::CliResult;
use bigcommerce_cli::logging::{init_global_logger, LogConfig};

/// BigCommerce CLI - store catalog tooling
#[derive(Parser)]
#[command(name = "bigcommerce")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show progress messages for each operation
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Show HTTP method, URL, status code and timing
    #[arg(long, global = true)]
    debug: bool,

    /// Show full request/response headers (tokens are redacted)
    #[arg(long, global = true)]
    trace: bool,

    /// Suppress progress output
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Append log output to a file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with the store's product catalog
    Catalog(commands::catalog::CatalogArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_args_and_env(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_file.clone(),
    );

    if let Err(e) = init_global_logger(log_config) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Catalog(args) => commands::catalog::execute(args).await,
    }
}
