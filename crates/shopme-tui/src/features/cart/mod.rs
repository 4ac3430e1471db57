//! Cart feature slice.
//!
//! ## Module Structure
//!
//! - `state.rs`: CartState (lines, per-line busy flags)
//! - `update.rs`: quantity/remove handling and cart result handling
//! - `render.rs`: line table and order summary

mod render;
mod state;
mod update;

pub use render::{render_cart, render_summary};
pub use state::CartState;
pub use update::{handle_cart_event, handle_cart_key, load};
