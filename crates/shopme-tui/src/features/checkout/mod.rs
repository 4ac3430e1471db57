//! Checkout feature slice: order summary and "place order".
//!
//! Placing an order clears the server-side cart; no order record is created.

mod render;
mod state;
mod update;

pub use render::render_checkout;
pub use state::CheckoutState;
pub use update::{handle_checkout_event, handle_checkout_key, load};
