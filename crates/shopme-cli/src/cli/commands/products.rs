//! Product listing.

use anyhow::{Context, Result};
use shopme_core::cart::format_price;
use shopme_core::config::Config;

use super::authenticated_client;

pub async fn list(config: &Config) -> Result<()> {
    let api = authenticated_client(config)?;
    let products = api
        .list_products()
        .await
        .context("Failed to load products")?;

    if products.is_empty() {
        println!("No products.");
        return Ok(());
    }

    for product in &products {
        let stock = if product.in_stock() {
            format!("{} in stock", product.stock)
        } else {
            "Out of stock".to_string()
        };
        println!(
            "{:<32} {:<12} {:>10}  {}",
            product.name,
            product.category.as_str(),
            format_price(product.price),
            stock
        );
    }
    Ok(())
}
