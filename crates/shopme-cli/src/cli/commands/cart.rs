//! Cart summary.

use anyhow::{Context, Result};
use shopme_core::cart::{self, CartSummary, format_price};
use shopme_core::config::Config;

use super::authenticated_client;

pub async fn show(config: &Config) -> Result<()> {
    let api = authenticated_client(config)?;
    let items = api.fetch_cart().await.context("Failed to load cart")?;
    let lines = cart::valid_lines(items);

    if lines.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for line in &lines {
        println!(
            "{:>3} × {:<32} {:>10}",
            line.quantity,
            line.product.name,
            format_price(line.line_total())
        );
    }

    let summary = CartSummary::of(&lines);
    println!();
    println!("Items:    {}", summary.item_count);
    println!("Subtotal: {}", format_price(summary.subtotal));
    println!("Shipping: Free");
    println!("Total:    {}", format_price(summary.total));
    Ok(())
}
