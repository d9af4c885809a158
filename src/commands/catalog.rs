//! Catalog command implementations
//!
//! This module implements the `bigcommerce catalog` command for exporting
//! the full product catalog to a local JSON file.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Subcommand};

use crate::api::{self, ApiClient};
use crate::config::Config;
use crate::error::CliResult;
use crate::models::StoreCredentials;
use crate::output::print_success;
use crate::verbose;

/// Catalog management commands
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

/// Available catalog subcommands
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Export all products to a JSON file
    ///
    /// Examples:
    ///   bigcommerce catalog export --store-hash abc123 --access-token TOKEN
    ///   bigcommerce catalog export --store-hash abc123 --access-token TOKEN --output dump.json
    Export(ExportArgs),
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// BigCommerce store hash
    #[arg(long)]
    pub store_hash: String,

    /// BigCommerce access token
    #[arg(long)]
    pub access_token: String,

    /// Path of the JSON file to write
    #[arg(long, default_value = "products.json")]
    pub output: PathBuf,
}

/// Execute catalog commands
pub async fn execute(args: CatalogArgs) -> CliResult<()> {
    match args.command {
        CatalogCommands::Export(export_args) => execute_export(export_args).await,
    }
}

/// Execute the export command
async fn execute_export(args: ExportArgs) -> CliResult<()> {
    verbose!("Loading configuration...");
    let config = Config::from_env()?;
    export_with_config(config, args).await
}

/// Run the export against an explicit configuration
///
/// Validates the token's scopes, walks every catalog page, and writes the
/// aggregated product list as pretty-printed JSON. Nothing is written unless
/// the entire walk completes.
pub async fn export_with_config(config: Config, args: ExportArgs) -> CliResult<()> {
    let client = ApiClient::new(config)?;
    let credentials = StoreCredentials::new(args.store_hash, args.access_token);

    verbose!("Validating token scopes...");
    api::validate_scopes(&client, &credentials).await?;

    verbose!("Fetching catalog products...");
    let start = Instant::now();
    let products = api::fetch_all_products(&client, &credentials).await?;
    let elapsed = start.elapsed();

    verbose!(
        "Retrieved {} products in {:.2}s",
        products.len(),
        elapsed.as_secs_f64()
    );

    let json = serde_json::to_string_pretty(&products)?;
    tokio::fs::write(&args.output, json).await?;

    print_success(&format!(
        "{} products written to {}",
        products.len(),
        args.output.display()
    ));

    Ok(())
}
