//! Fresh CLI - terminal storefront driver for FreshFruit Paradise.
//!
//! Commands:
//! - `fresh browse` - List the catalog with filter/search/sort
//! - `fresh add` - Add a product to the cart
//! - `fresh cart` - Show the cart
//! - `fresh remove` - Remove a cart line
//! - `fresh qty` - Set a line quantity
//! - `fresh checkout` - Simulated checkout
//! - `fresh theme` - Show or toggle the theme
//! - `fresh offline` - Drill the offline worker lifecycle

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, BrowseArgs, OfflineArgs, QtyArgs, RemoveArgs, ThemeArgs};

/// Fresh CLI - drive the FreshFruit Paradise storefront from a terminal
#[derive(Parser)]
#[command(name = "fresh")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Local storage directory
    #[arg(long, global = true, default_value = ".freshfruit")]
    storage_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    Browse(BrowseArgs),

    /// Add a product to the cart
    Add(AddArgs),

    /// Show the cart
    Cart,

    /// Remove a cart line
    Remove(RemoveArgs),

    /// Set a line quantity
    Qty(QtyArgs),

    /// Simulated checkout
    Checkout,

    /// Show or toggle the theme
    Theme(ThemeArgs),

    /// Drill the offline worker lifecycle against a simulated site
    Offline(OfflineArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = output::Output::new(cli.verbose);

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &cli.storage_dir, &output),
        Commands::Add(args) => commands::cart::add(args, &cli.storage_dir, &output),
        Commands::Cart => commands::cart::show(&cli.storage_dir, &output),
        Commands::Remove(args) => commands::cart::remove(args, &cli.storage_dir, &output),
        Commands::Qty(args) => commands::cart::set_quantity(args, &cli.storage_dir, &output),
        Commands::Checkout => commands::cart::checkout(&cli.storage_dir, &output),
        Commands::Theme(args) => commands::theme::run(args, &cli.storage_dir, &output),
        Commands::Offline(args) => commands::offline::run(args, &output).await,
    };

    if let Err(e) = result {
        output.error(&format!("{e:#}"));
        std::process::exit(1);
    }
    Ok(())
}
