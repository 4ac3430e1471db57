//! REST client for the storefront API.
//!
//! One `ApiClient` is shared by every screen. It reads the token from the
//! shared [`Session`] on each request, so a login or logout takes effect for
//! the very next call.
//!
//! Failures are reported as `anyhow` errors with the endpoint in context.
//! Callers collapse them into one user-facing message per action.

pub mod types;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use reqwest::{Method, RequestBuilder, Response};
use url::Url;

pub use self::types::{
    CartItem, Category, LoginRequest, Product, ProductId, ProductPayload, RegisterRequest,
};
use self::types::{
    AddToCartRequest, CartResponse, LoginResponse, ProductListResponse, QuantityRequest,
};
use crate::config::Config;
use crate::session::Session;

/// Storefront API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<Session>,
}

impl ApiClient {
    /// Creates a client for the configured base URL.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &Config, session: Arc<Session>) -> Result<Self> {
        let base_url = Url::parse(config.api_base_url.trim())
            .with_context(|| format!("Invalid API base URL '{}'", config.api_base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Invalid API base URL '{}'", config.api_base_url);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// `POST /auth/login`. Returns the issued token; the caller decides
    /// whether to start a session with it.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status or a malformed body.
    pub async fn login(&self, request: &LoginRequest) -> Result<String> {
        let response = self
            .send(self.request(Method::POST, &["auth", "login"])?.json(request), "login")
            .await?;
        let body: LoginResponse = response
            .json()
            .await
            .context("Failed to parse login response")?;
        if body.token.is_empty() {
            anyhow::bail!("Login response did not include a token");
        }
        Ok(body.token)
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.send(
            self.request(Method::POST, &["auth", "register"])?.json(request),
            "register",
        )
        .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// `GET /product`.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status or a malformed body.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let response = self
            .send(self.request(Method::GET, &["product"])?, "list products")
            .await?;
        let body: ProductListResponse = response
            .json()
            .await
            .context("Failed to parse product list")?;
        Ok(body.into_products())
    }

    /// `POST /product`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<()> {
        self.send(
            self.request(Method::POST, &["product"])?.json(payload),
            "create product",
        )
        .await?;
        Ok(())
    }

    /// `PUT /product/:id`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn update_product(&self, id: &ProductId, payload: &ProductPayload) -> Result<()> {
        self.send(
            self.request(Method::PUT, &["product", id.as_str()])?
                .json(payload),
            "update product",
        )
        .await?;
        Ok(())
    }

    /// `DELETE /product/:id`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn delete_product(&self, id: &ProductId) -> Result<()> {
        self.send(
            self.request(Method::DELETE, &["product", id.as_str()])?,
            "delete product",
        )
        .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// `GET /cart`. Returns the raw items, including ones whose product is gone.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status or a malformed body.
    pub async fn fetch_cart(&self) -> Result<Vec<CartItem>> {
        let response = self
            .send(self.request(Method::GET, &["cart"])?, "fetch cart")
            .await?;
        let body: CartResponse = response.json().await.context("Failed to parse cart")?;
        Ok(body.cart.unwrap_or_default().items)
    }

    /// `POST /cart/add`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn add_to_cart(&self, product_id: &ProductId, quantity: u32) -> Result<()> {
        let body = AddToCartRequest {
            product_id: product_id.as_str(),
            quantity,
        };
        self.send(
            self.request(Method::POST, &["cart", "add"])?.json(&body),
            "add to cart",
        )
        .await?;
        Ok(())
    }

    /// `PUT /cart/update/:id`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn update_cart_item(&self, product_id: &ProductId, quantity: u32) -> Result<()> {
        self.send(
            self.request(Method::PUT, &["cart", "update", product_id.as_str()])?
                .json(&QuantityRequest { quantity }),
            "update cart item",
        )
        .await?;
        Ok(())
    }

    /// `DELETE /cart/remove/:id`.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn remove_cart_item(&self, product_id: &ProductId) -> Result<()> {
        self.send(
            self.request(Method::DELETE, &["cart", "remove", product_id.as_str()])?,
            "remove cart item",
        )
        .await?;
        Ok(())
    }

    /// `DELETE /cart/clear`. This is what "place order" does; no order
    /// record is created.
    ///
    /// # Errors
    /// Returns an error on transport failure or non-2xx status.
    pub async fn clear_cart(&self) -> Result<()> {
        self.send(
            self.request(Method::DELETE, &["cart", "clear"])?,
            "clear cart",
        )
        .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds a request with the session token attached, if any.
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, path = url.path(), "api request");
        let builder = self.http.request(method, url);
        Ok(match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder, action: &str) -> Result<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(action, error = %e, "api request failed");
            anyhow::Error::new(e).context(format!("{action}: request failed"))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(action, %status, "api request rejected");
            anyhow::bail!("{action}: server returned {status}");
        }
        Ok(response)
    }
}
