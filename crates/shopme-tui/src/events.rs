//! UI event types.
//!
//! All external inputs (terminal, timer, async results) are converted to
//! `UiEvent` before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async handlers send their result events directly to the runtime's inbox.
//! Every result carries the [`TaskId`] of the screen visit that issued it;
//! the reducer ignores screen updates for visits that have ended.
//!
//! Errors are carried as strings for logging only. The reducer always shows
//! one fixed message per action.

use crossterm::event::Event as CrosstermEvent;
use shopme_core::api::{CartItem, Product, ProductId};
use shopme_core::routes::Route;

use crate::common::TaskId;

/// Login/registration results.
#[derive(Debug)]
pub enum AuthUiEvent {
    /// Login finished. On success the session already holds the token.
    LoginFinished {
        visit: TaskId,
        result: Result<(), String>,
    },
    RegisterFinished {
        visit: TaskId,
        result: Result<(), String>,
    },
    /// The session was cleared.
    LoggedOut,
}

/// Catalog results.
#[derive(Debug)]
pub enum ProductsUiEvent {
    Loaded {
        visit: TaskId,
        result: Result<Vec<Product>, String>,
    },
    Saved {
        visit: TaskId,
        /// True for an edit, false for a create.
        updated: bool,
        result: Result<(), String>,
    },
    Deleted {
        visit: TaskId,
        id: ProductId,
        result: Result<(), String>,
    },
    AddedToCart {
        visit: TaskId,
        id: ProductId,
        result: Result<(), String>,
    },
}

/// Cart results.
#[derive(Debug)]
pub enum CartUiEvent {
    Loaded {
        visit: TaskId,
        result: Result<Vec<CartItem>, String>,
    },
    QuantityUpdated {
        visit: TaskId,
        id: ProductId,
        quantity: u32,
        result: Result<(), String>,
    },
    Removed {
        visit: TaskId,
        id: ProductId,
        result: Result<(), String>,
    },
}

/// Checkout results.
#[derive(Debug)]
pub enum CheckoutUiEvent {
    Loaded {
        visit: TaskId,
        result: Result<Vec<CartItem>, String>,
    },
    OrderPlaced {
        visit: TaskId,
        result: Result<(), String>,
    },
}

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (toast expiry, guard re-evaluation, spinner).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// Request to show a route; the guard decides where we end up.
    Navigate(Route),

    Auth(AuthUiEvent),
    Products(ProductsUiEvent),
    Cart(CartUiEvent),
    Checkout(CheckoutUiEvent),
}
