//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only (no direct UI mutations), which keeps the reducer
//! pure: it mutates state and returns effects, never performs I/O itself.
//!
//! Each network effect maps to exactly one API call. The reducer sets the
//! matching busy flag when it emits the effect.

use shopme_core::api::{LoginRequest, ProductId, ProductPayload, RegisterRequest};
use shopme_core::notify::Severity;

use crate::common::TaskId;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Publish a toast.
    Notify { message: String, severity: Severity },

    // Auth
    Login {
        visit: TaskId,
        request: LoginRequest,
    },
    Register {
        visit: TaskId,
        request: RegisterRequest,
    },
    /// Clear the session (memory and disk).
    Logout,

    // Catalog
    LoadProducts {
        visit: TaskId,
    },
    /// Create (`id: None`) or update a product.
    SaveProduct {
        visit: TaskId,
        id: Option<ProductId>,
        payload: ProductPayload,
    },
    DeleteProduct {
        visit: TaskId,
        id: ProductId,
    },
    AddToCart {
        visit: TaskId,
        id: ProductId,
    },

    // Cart
    LoadCart {
        visit: TaskId,
    },
    UpdateCartItem {
        visit: TaskId,
        id: ProductId,
        quantity: u32,
    },
    RemoveCartItem {
        visit: TaskId,
        id: ProductId,
    },

    // Checkout
    LoadCheckout {
        visit: TaskId,
    },
    PlaceOrder {
        visit: TaskId,
    },
}

impl UiEffect {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}
