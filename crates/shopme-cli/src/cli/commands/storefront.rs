//! Interactive storefront (default command).

use anyhow::Result;
use shopme_core::config::Config;

#[cfg(feature = "tui")]
pub async fn run(config: &Config) -> Result<()> {
    shopme_tui::run_storefront(config, super::saved_session()).await
}

#[cfg(not(feature = "tui"))]
pub async fn run(_config: &Config) -> Result<()> {
    anyhow::bail!("This build has no interactive storefront. Rebuild with the `tui` feature.")
}
