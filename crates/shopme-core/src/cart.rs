//! Client-side cart view model: filtering, totals and local updates.
//!
//! The server owns the cart. These helpers only shape what it returns for
//! display and apply the optimistic updates made after a successful write.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::api::{CartItem, Product, ProductId};
use crate::forms::ValidationError;

/// A displayable cart line. Unlike [`CartItem`], the product is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Drops items whose product no longer exists.
pub fn valid_lines(items: Vec<CartItem>) -> Vec<CartLine> {
    let total = items.len();
    let lines: Vec<CartLine> = items
        .into_iter()
        .filter_map(|item| {
            item.product.map(|product| CartLine {
                product,
                quantity: item.quantity,
            })
        })
        .collect();
    if lines.len() != total {
        tracing::debug!(dropped = total - lines.len(), "cart items without product");
    }
    lines
}

pub fn subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|l| l.quantity).sum()
}

/// Order summary shown on the cart and checkout screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub item_count: u32,
    pub subtotal: Decimal,
    /// Shipping is always free.
    pub shipping: Decimal,
    pub total: Decimal,
}

impl CartSummary {
    pub fn of(lines: &[CartLine]) -> Self {
        let subtotal = subtotal(lines);
        let shipping = Decimal::ZERO;
        Self {
            item_count: item_count(lines),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

/// Formats a price as dollars with two decimals, halves rounded away from zero.
pub fn format_price(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Rejects quantities below one.
///
/// # Errors
/// Returns [`ValidationError::QuantityBelowOne`] for zero.
pub fn validate_quantity(quantity: u32) -> Result<u32, ValidationError> {
    if quantity < 1 {
        return Err(ValidationError::QuantityBelowOne);
    }
    Ok(quantity)
}

/// Sets the quantity of the matching line. Returns false if no line matched.
pub fn set_quantity(lines: &mut [CartLine], product_id: &ProductId, quantity: u32) -> bool {
    match lines.iter_mut().find(|l| &l.product.id == product_id) {
        Some(line) => {
            line.quantity = quantity;
            true
        }
        None => false,
    }
}

/// Removes the matching line. Returns false if no line matched.
pub fn remove_line(lines: &mut Vec<CartLine>, product_id: &ProductId) -> bool {
    let before = lines.len();
    lines.retain(|l| &l.product.id != product_id);
    lines.len() != before
}
