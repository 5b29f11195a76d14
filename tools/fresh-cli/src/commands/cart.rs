//! `fresh add` / `cart` / `remove` / `qty` / `checkout` - cart operations.

use crate::commands::open_storefront;
use crate::output::Output;
use anyhow::Result;
use clap::Args;
use fresh_commerce::ids::ItemId;

#[derive(Args)]
pub struct AddArgs {
    /// Product name, e.g. "Sweet Mango" (case-insensitive)
    pub product: String,

    /// How many units to add
    #[arg(short, long, default_value_t = 1)]
    pub count: u32,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Cart line id, as shown by `fresh cart`
    pub id: String,
}

#[derive(Args)]
pub struct QtyArgs {
    /// Cart line id, as shown by `fresh cart`
    pub id: String,

    /// New quantity; 0 removes the line
    pub quantity: u32,
}

pub fn add(args: AddArgs, storage_dir: &str, output: &Output) -> Result<()> {
    let mut page = open_storefront(storage_dir, output)?;
    let product = page.catalog().find_by_name(&args.product)?.clone();

    for _ in 0..args.count.max(1) {
        page.cart_mut().add_to_cart(&product);
    }
    show_lines(&page, output);
    Ok(())
}

pub fn show(storage_dir: &str, output: &Output) -> Result<()> {
    let page = open_storefront(storage_dir, output)?;
    show_lines(&page, output);
    Ok(())
}

pub fn remove(args: RemoveArgs, storage_dir: &str, output: &Output) -> Result<()> {
    let mut page = open_storefront(storage_dir, output)?;
    page.cart_mut().remove_from_cart(&ItemId::new(args.id));
    show_lines(&page, output);
    Ok(())
}

pub fn set_quantity(args: QtyArgs, storage_dir: &str, output: &Output) -> Result<()> {
    let mut page = open_storefront(storage_dir, output)?;
    page.cart_mut()
        .set_quantity(&ItemId::new(args.id), args.quantity);
    show_lines(&page, output);
    Ok(())
}

pub fn checkout(storage_dir: &str, output: &Output) -> Result<()> {
    let mut page = open_storefront(storage_dir, output)?;
    if !page.cart_mut().checkout() {
        output.info("Your cart is empty. Add some delicious fruits to get started!");
    }
    Ok(())
}

fn show_lines(page: &fresh_page::Storefront, output: &Output) {
    let view = page.cart().view();
    output.header("Your Cart");

    if view.items.is_empty() {
        output.line("\u{1F6D2} Your cart is empty");
        return;
    }

    for item in &view.items {
        output.line(&format!(
            "{:28} {:>8} x{:<3} [{}]",
            item.name,
            item.price.as_str(),
            item.quantity,
            item.id,
        ));
    }
    output.line(&format!("Total: ${:.2}", view.total));
}
