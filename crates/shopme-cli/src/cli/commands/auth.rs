//! Login/logout command handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use shopme_core::api::ApiClient;
use shopme_core::config::Config;
use shopme_core::forms::LoginForm;

use super::saved_session;

pub async fn login(config: &Config, email: String, password: String) -> Result<()> {
    let request = LoginForm { email, password }.validate()?;
    let session = saved_session();
    let api = ApiClient::new(config, Arc::clone(&session))?;

    let token = api.login(&request).await.context("Login failed")?;
    session.login(token).context("Failed to save session")?;

    println!("Logged in as {}", request.email);
    Ok(())
}

pub fn logout() -> Result<()> {
    let session = saved_session();
    let was_authenticated = session.is_authenticated();
    session.logout().context("Failed to clear session")?;
    if was_authenticated {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}
