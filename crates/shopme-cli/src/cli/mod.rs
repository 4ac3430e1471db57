//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use shopme_core::config::{self, paths};
use shopme_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "shopme")]
#[command(version = "0.1")]
#[command(about = "ShopMe terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the API base URL (e.g. http://localhost:5000/api)
    #[arg(long, global = true, env = config::API_URL_ENV, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Forget the saved session
    Logout,
    /// List the product catalog
    Products,
    /// Show the cart with totals
    Cart,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best-effort; a read-only home must not block the CLI.
    let _log_guard = match logging::init(&paths::logs_dir()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, api_url } = cli;
    let load_config = || -> Result<config::Config> {
        let config = config::Config::load()
            .context("load config")?
            .with_api_url_override(api_url.as_deref());
        tracing::debug!(api = %config.api_base_url, "config loaded");
        Ok(config)
    };

    match command {
        // default to the interactive storefront
        None => commands::storefront::run(&load_config()?).await,

        Some(Commands::Login { email, password }) => {
            commands::auth::login(&load_config()?, email, password).await
        }
        Some(Commands::Logout) => commands::auth::logout(),
        Some(Commands::Products) => commands::products::list(&load_config()?).await,
        Some(Commands::Cart) => commands::cart::show(&load_config()?).await,

        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
