//! Auth feature slice: sign-in and sign-up screens.
//!
//! ## Module Structure
//!
//! - `state.rs`: LoginState, RegisterState
//! - `update.rs`: key handling and auth result handling
//! - `render.rs`: centered form cards

mod render;
mod state;
mod update;

pub use render::{render_login, render_register};
pub use state::{LoginState, RegisterState};
pub use update::{handle_auth_event, handle_login_key, handle_register_key};
