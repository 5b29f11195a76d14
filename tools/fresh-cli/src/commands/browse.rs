//! `fresh browse` - list the catalog.

use crate::commands::open_storefront;
use crate::output::Output;
use anyhow::{anyhow, Result};
use clap::Args;
use fresh_commerce::search::{CategoryFilter, SortOption};

#[derive(Args)]
pub struct BrowseArgs {
    /// Category filter (all, tropical, citrus, berries, orchard)
    #[arg(short, long, default_value = "all")]
    pub filter: String,

    /// Search text matched against names and descriptions
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order (featured, name, name-desc, price-asc, price-desc)
    #[arg(long, default_value = "featured")]
    pub sort: String,
}

pub fn run(args: BrowseArgs, storage_dir: &str, output: &Output) -> Result<()> {
    let filter = CategoryFilter::from_code(&args.filter)
        .ok_or_else(|| anyhow!("unknown filter: {}", args.filter))?;
    let sort = SortOption::from_code(&args.sort)
        .ok_or_else(|| anyhow!("unknown sort: {}", args.sort))?;

    let mut page = open_storefront(storage_dir, output)?;
    page.apply_filter(filter);
    let results = page.search(&args.search, sort);

    output.header("FreshFruit Paradise");
    for product in results.matches() {
        output.line(&format!(
            "{} {:24} {:>8}   {}",
            product.emoji(),
            product.name,
            product.price.as_str(),
            product.category.display_name(),
        ));
    }

    if let Some(summary) = results.summary() {
        output.info(&summary);
    }
    if let Some(message) = results.no_results_message() {
        output.warn(&message);
    }
    Ok(())
}
