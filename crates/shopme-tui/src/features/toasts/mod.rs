//! Toast stack in the top-right corner.

mod render;

pub use render::render_toasts;
