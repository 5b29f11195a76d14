//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod offline;
pub mod theme;

pub use browse::BrowseArgs;
pub use cart::{AddArgs, QtyArgs, RemoveArgs};
pub use offline::OfflineArgs;
pub use theme::ThemeArgs;

use crate::output::Output;
use anyhow::{anyhow, Result};
use fresh_page::{Storefront, StorefrontConfig, Theme};
use std::sync::Arc;

/// Wire a storefront against the given storage directory, with the
/// terminal as every collaborator.
pub fn open_storefront(storage_dir: &str, output: &Output) -> Result<Storefront> {
    let sink = Arc::new(output.clone());
    let config = StorefrontConfig::new("FreshFruit Paradise").with_storage_dir(storage_dir);

    Storefront::init(config, sink.clone(), sink.clone(), sink, Theme::Light).map_err(
        |(fallback, e)| {
            // Startup fault: render the minimal fallback page, then report.
            output.header(&fallback.title);
            output.line(&fallback.message);
            output.line(&format!("[{}]", fallback.action));
            anyhow!(e)
        },
    )
}
