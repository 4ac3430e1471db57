//! CLI command handlers.

use std::sync::Arc;

use anyhow::Result;
use shopme_core::api::ApiClient;
use shopme_core::config::Config;
use shopme_core::session::{Session, SessionStore};

pub mod auth;
pub mod cart;
pub mod config;
pub mod products;
pub mod storefront;

/// Restores the saved session from `SHOPME_HOME`.
fn saved_session() -> Arc<Session> {
    Arc::new(Session::restore(SessionStore::default_location()))
}

/// An API client for commands that need a signed-in user.
fn authenticated_client(config: &Config) -> Result<ApiClient> {
    let session = saved_session();
    if !session.is_authenticated() {
        anyhow::bail!("Not logged in. Run `shopme login` first.");
    }
    ApiClient::new(config, session)
}
