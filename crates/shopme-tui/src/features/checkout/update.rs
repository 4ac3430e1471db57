//! Checkout reducer.

use crossterm::event::{KeyCode, KeyEvent};
use shopme_core::cart;
use shopme_core::forms::ValidationError;
use shopme_core::routes::Route;

use super::state::CheckoutState;
use crate::effects::UiEffect;
use crate::events::CheckoutUiEvent;
use crate::update::ScreenUpdate;

const LOAD_FAILED: &str = "Failed to load cart.";

pub fn load(state: &mut CheckoutState) -> UiEffect {
    state.loading = true;
    UiEffect::LoadCheckout { visit: state.visit }
}

pub fn handle_checkout_key(state: &mut CheckoutState, key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Esc if !state.placing.is_running() => ScreenUpdate::navigate(Route::Cart),
        KeyCode::Enter => place_order(state),
        _ => ScreenUpdate::none(),
    }
}

fn place_order(state: &mut CheckoutState) -> ScreenUpdate {
    if state.loading || state.placing.is_running() {
        return ScreenUpdate::none();
    }
    if state.lines.is_empty() {
        state.error = Some(ValidationError::EmptyCart.to_string());
        return ScreenUpdate::none();
    }
    state.error = None;
    state.placing.try_start();
    ScreenUpdate::effects(vec![UiEffect::PlaceOrder { visit: state.visit }])
}

pub fn handle_checkout_event(
    state: Option<&mut CheckoutState>,
    event: CheckoutUiEvent,
) -> ScreenUpdate {
    match event {
        CheckoutUiEvent::Loaded { visit, result } => {
            let Some(state) = state.filter(|s| s.visit == visit) else {
                return ScreenUpdate::none();
            };
            state.loading = false;
            match result {
                Ok(items) => {
                    state.lines = cart::valid_lines(items);
                    state.error = None;
                }
                Err(_) => state.error = Some(LOAD_FAILED.to_string()),
            }
            ScreenUpdate::none()
        }
        CheckoutUiEvent::OrderPlaced { visit, result } => {
            let live = state.filter(|s| s.visit == visit);
            let is_live = live.is_some();
            if let Some(state) = live {
                state.placing.finish();
            }
            match result {
                Ok(()) => {
                    let update =
                        ScreenUpdate::effects(vec![UiEffect::success("Your order has been placed")]);
                    if is_live {
                        update.and_navigate(Route::HOME)
                    } else {
                        update
                    }
                }
                Err(_) => ScreenUpdate::effects(vec![UiEffect::error("Failed to place order")]),
            }
        }
    }
}
