//! Fotopack storefront CLI
//!
//! Presentation layer over the quoting core: reveals catalog listings and
//! simulates price quotes, with user-facing notices for invalid input.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use fotopack::catalog::{HttpCatalogSource, load_catalog, products};
use fotopack::pricing::QuoteError;
use fotopack::simulate::simulate_quote;
use fotopack::store::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fotopack", about = "Photo-pack storefront quoting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the catalog and print the product listings.
    Listings(ListingsArgs),

    /// Simulate a price quote for a quantity and installment count.
    Quote(QuoteArgs),
}

#[derive(Debug, Args)]
struct ListingsArgs {
    /// URL of the catalog JSON resource
    #[arg(long, env = "FOTOPACK_CATALOG_URL")]
    url: String,

    /// Path of the store file backing the catalog cache and quote log
    #[arg(long, env = "FOTOPACK_STORE", default_value = "fotopack-store.json")]
    store: String,
}

#[derive(Debug, Args)]
struct QuoteArgs {
    /// Number of photos to quote
    #[arg(long)]
    quantity: i64,

    /// Installment count: 1, 3 or 6
    #[arg(long)]
    installments: i64,

    /// Path of the store file backing the catalog cache and quote log
    #[arg(long, env = "FOTOPACK_STORE", default_value = "fotopack-store.json")]
    store: String,
}

impl Cli {
    async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Listings(args) => listings(args).await,
            Commands::Quote(args) => quote(args),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    if let Err(notice) = cli.run().await {
        report(&notice);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn listings(args: ListingsArgs) -> Result<(), String> {
    let mut store = JsonFileStore::open(args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    let source = HttpCatalogSource::new(args.url);

    // A failed load degrades to an empty listing rather than an error.
    load_catalog(&source, &mut store).await;

    let records =
        products(&store).map_err(|error| format!("failed to read catalog cache: {error}"))?;

    for record in &records {
        show(&record.to_string());
    }

    Ok(())
}

fn quote(args: QuoteArgs) -> Result<(), String> {
    let mut store = JsonFileStore::open(args.store)
        .map_err(|error| format!("failed to open store: {error}"))?;

    match simulate_quote(&mut store, args.quantity, args.installments) {
        Ok(price) => {
            show(&price.to_string());

            Ok(())
        }
        Err(QuoteError::InvalidQuantity) => Err("Please enter a valid number".to_owned()),
        Err(QuoteError::InvalidInstallments) => Err("Please enter 1, 3 or 6".to_owned()),
    }
}

#[expect(clippy::print_stdout, reason = "command output")]
fn show(line: &str) {
    println!("{line}");
}

#[expect(clippy::print_stderr, reason = "user-facing notice")]
fn report(notice: &str) {
    eprintln!("{notice}");
}
