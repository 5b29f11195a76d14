//! `fresh theme` - show or toggle the theme preference.

use crate::commands::open_storefront;
use crate::output::Output;
use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct ThemeArgs {
    /// Toggle between light and dark instead of just showing
    #[arg(short, long)]
    pub toggle: bool,
}

pub fn run(args: ThemeArgs, storage_dir: &str, output: &Output) -> Result<()> {
    let mut page = open_storefront(storage_dir, output)?;

    if args.toggle {
        let theme = page.theme_mut().toggle()?;
        output.success(&format!("Theme changed to {theme} mode"));
    } else {
        output.info(&format!("Current theme: {}", page.theme().current()));
    }
    Ok(())
}
