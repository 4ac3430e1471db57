//! Full-screen storefront TUI for ShopMe.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};
use std::sync::Arc;

use anyhow::Result;
pub use features::{auth, cart, checkout, navbar, products, toasts};
pub use runtime::TuiRuntime;
use shopme_core::api::ApiClient;
use shopme_core::config::Config;
use shopme_core::notify::Notifier;
use shopme_core::session::Session;

/// Runs the interactive storefront until the user quits.
///
/// Must be called from within a tokio runtime; API calls are spawned on it.
///
/// # Errors
/// Returns an error if stderr is not a terminal, the API URL is invalid, or
/// terminal I/O fails.
pub async fn run_storefront(config: &Config, session: Arc<Session>) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The storefront requires a terminal.\n\
             Use `shopme products` or `shopme cart` for non-interactive output."
        );
    }

    let api = ApiClient::new(config, session)?;

    let mut err = stderr();
    writeln!(err, "ShopMe")?;
    writeln!(err, "API: {}", api.base_url())?;
    err.flush()?;

    tracing::info!(api = %api.base_url(), "starting storefront");
    let mut runtime = TuiRuntime::new(api, Notifier::new())?;
    runtime.run()?;
    drop(runtime);

    tracing::info!("storefront closed");
    Ok(())
}
