//! Feature slices for the TUI (state/update/render per slice).

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod navbar;
pub mod products;
pub mod toasts;
