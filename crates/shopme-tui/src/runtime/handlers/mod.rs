//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime uses
//! `spawn_effect` to spawn them and send results to the inbox. They never
//! touch UI state.
//!
//! Each handler issues exactly one API call.

pub mod auth;
pub mod cart;
pub mod products;

pub use auth::*;
pub use cart::*;
pub use products::*;

/// Logs a failed call and flattens the error chain for the reducer.
fn report<T>(action: &str, result: anyhow::Result<T>) -> Result<T, String> {
    result.map_err(|e| {
        tracing::warn!(action, error = %format!("{e:#}"), "request failed");
        format!("{e:#}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_flattens_context_chain() {
        let err = anyhow::anyhow!("server returned 500").context("Failed to load cart");
        assert_eq!(
            report::<()>("load cart", Err(err)),
            Err("Failed to load cart: server returned 500".to_string())
        );
        assert_eq!(report("load cart", Ok(3)), Ok(3));
    }
}
