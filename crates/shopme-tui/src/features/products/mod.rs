//! Products feature slice: the catalog.
//!
//! ## Module Structure
//!
//! - `state.rs`: ProductsState (catalog, filters, selection, busy flags)
//! - `update.rs`: key handling and catalog result handling
//! - `render.rs`: filter bar and product table
//!
//! Create/edit and delete confirmation live in `overlays`.

mod render;
mod state;
mod update;

pub use render::render_products;
pub use state::ProductsState;
pub use update::{handle_products_event, handle_products_key, handle_products_paste, load};
