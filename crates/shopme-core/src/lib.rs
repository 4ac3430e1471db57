//! Core library for the ShopMe storefront client.
//!
//! Everything here is UI-agnostic: the REST client, the session store, the
//! route guard, the notification channel, cart arithmetic and form validation.
//! The TUI and CLI crates build on top of it.

pub mod api;
pub mod cart;
pub mod config;
pub mod forms;
pub mod logging;
pub mod notify;
pub mod routes;
pub mod session;
