//! Navigation bar shown on authenticated screens.

mod render;

pub use render::{NAVBAR_HEIGHT, render_navbar};
