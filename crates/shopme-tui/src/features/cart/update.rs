//! Cart reducer.

use crossterm::event::{KeyCode, KeyEvent};
use shopme_core::cart::{self, validate_quantity};
use shopme_core::routes::Route;

use super::state::CartState;
use crate::effects::UiEffect;
use crate::events::CartUiEvent;
use crate::update::ScreenUpdate;

const LOAD_FAILED: &str = "Failed to load cart.";

pub fn load(state: &mut CartState) -> UiEffect {
    state.loading = true;
    UiEffect::LoadCart { visit: state.visit }
}

pub fn handle_cart_key(state: &mut CartState, key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            ScreenUpdate::none()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            ScreenUpdate::none()
        }
        KeyCode::Char('+' | '=') => change_quantity(state, 1),
        KeyCode::Char('-') => change_quantity(state, -1),
        KeyCode::Char('x') | KeyCode::Delete => remove_selected(state),
        KeyCode::Char('r') if !state.loading => ScreenUpdate::effects(vec![load(state)]),
        KeyCode::Enter => {
            if state.lines.is_empty() || state.loading || state.is_busy() {
                ScreenUpdate::none()
            } else {
                ScreenUpdate::navigate(Route::Checkout)
            }
        }
        _ => ScreenUpdate::none(),
    }
}

/// Requests `quantity + delta` for the selected line.
///
/// Quantities below one are rejected locally; no request is sent.
fn change_quantity(state: &mut CartState, delta: i32) -> ScreenUpdate {
    let Some(line) = state.selected_line() else {
        return ScreenUpdate::none();
    };
    let id = line.product.id.clone();
    let Some(Ok(quantity)) = line.quantity.checked_add_signed(delta).map(validate_quantity) else {
        return ScreenUpdate::none();
    };
    if state.is_line_busy(&id) || !state.updating.try_start(&id) {
        return ScreenUpdate::none();
    }
    ScreenUpdate::effects(vec![UiEffect::UpdateCartItem {
        visit: state.visit,
        id,
        quantity,
    }])
}

fn remove_selected(state: &mut CartState) -> ScreenUpdate {
    let Some(line) = state.selected_line() else {
        return ScreenUpdate::none();
    };
    let id = line.product.id.clone();
    if state.is_line_busy(&id) || !state.removing.try_start(&id) {
        return ScreenUpdate::none();
    }
    ScreenUpdate::effects(vec![UiEffect::RemoveCartItem {
        visit: state.visit,
        id,
    }])
}

/// Applies a cart result. `state` is the live cart screen, if any.
pub fn handle_cart_event(state: Option<&mut CartState>, event: CartUiEvent) -> ScreenUpdate {
    match event {
        CartUiEvent::Loaded { visit, result } => {
            let Some(state) = state.filter(|s| s.visit == visit) else {
                return ScreenUpdate::none();
            };
            state.loading = false;
            match result {
                Ok(items) => {
                    state.lines = cart::valid_lines(items);
                    state.error = None;
                    state.clamp_selection();
                }
                Err(_) => state.error = Some(LOAD_FAILED.to_string()),
            }
            ScreenUpdate::none()
        }
        CartUiEvent::QuantityUpdated {
            visit,
            id,
            quantity,
            result,
        } => {
            if let Some(state) = state.filter(|s| s.visit == visit) {
                state.updating.finish(&id);
                if result.is_ok() {
                    cart::set_quantity(&mut state.lines, &id, quantity);
                }
            }
            match result {
                Ok(()) => ScreenUpdate::none(),
                Err(_) => ScreenUpdate::effects(vec![UiEffect::error("Failed to update quantity")]),
            }
        }
        CartUiEvent::Removed { visit, id, result } => {
            if let Some(state) = state.filter(|s| s.visit == visit) {
                state.removing.finish(&id);
                if result.is_ok() {
                    cart::remove_line(&mut state.lines, &id);
                    state.clamp_selection();
                }
            }
            match result {
                Ok(()) => ScreenUpdate::effects(vec![UiEffect::info("Item removed from cart")]),
                Err(_) => ScreenUpdate::effects(vec![UiEffect::error("Failed to remove item")]),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use rust_decimal::Decimal;
    use shopme_core::api::{CartItem, Category, Product, ProductId};
    use shopme_core::cart::CartLine;

    use super::*;
    use crate::common::TaskId;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id: ProductId::from(id),
                name: format!("Item {id}"),
                price: Decimal::new(999, 2),
                image_url: String::new(),
                category: Category::Books,
                stock: 10,
            },
            quantity,
        }
    }

    fn loaded(lines: Vec<CartLine>) -> CartState {
        let mut state = CartState::new(TaskId(3));
        state.lines = lines;
        state.loading = false;
        state
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_decrement_at_one_sends_nothing() {
        let mut state = loaded(vec![line("a", 1)]);
        let update = handle_cart_key(&mut state, key('-'));
        assert!(update.effects.is_empty());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_increment_disables_line_until_done() {
        let mut state = loaded(vec![line("a", 2)]);
        let update = handle_cart_key(&mut state, key('+'));
        assert_eq!(
            update.effects,
            vec![UiEffect::UpdateCartItem {
                visit: TaskId(3),
                id: ProductId::from("a"),
                quantity: 3
            }]
        );
        assert!(handle_cart_key(&mut state, key('+')).effects.is_empty());
        assert!(handle_cart_key(&mut state, key('x')).effects.is_empty());

        handle_cart_event(
            Some(&mut state),
            CartUiEvent::QuantityUpdated {
                visit: TaskId(3),
                id: ProductId::from("a"),
                quantity: 3,
                result: Ok(()),
            },
        );
        assert_eq!(state.lines[0].quantity, 3);
        assert!(!state.is_busy());
        assert_eq!(state.summary().total, Decimal::new(2997, 2));
    }

    #[test]
    fn test_failed_update_keeps_quantity_and_toasts() {
        let mut state = loaded(vec![line("a", 2)]);
        handle_cart_key(&mut state, key('+'));
        let update = handle_cart_event(
            Some(&mut state),
            CartUiEvent::QuantityUpdated {
                visit: TaskId(3),
                id: ProductId::from("a"),
                quantity: 3,
                result: Err("500".into()),
            },
        );
        assert_eq!(state.lines[0].quantity, 2);
        assert_eq!(
            update.effects,
            vec![UiEffect::error("Failed to update quantity")]
        );
    }

    #[test]
    fn test_failed_remove_keeps_line_and_toasts() {
        let mut state = loaded(vec![line("a", 2), line("b", 1)]);
        let started = handle_cart_key(&mut state, key('x'));
        assert_eq!(
            started.effects,
            vec![UiEffect::RemoveCartItem {
                visit: TaskId(3),
                id: ProductId::from("a")
            }]
        );
        assert!(state.is_busy());

        let update = handle_cart_event(
            Some(&mut state),
            CartUiEvent::Removed {
                visit: TaskId(3),
                id: ProductId::from("a"),
                result: Err("500".into()),
            },
        );
        assert_eq!(update.effects, vec![UiEffect::error("Failed to remove item")]);
        assert!(!state.removing.contains(&ProductId::from("a")));
        assert!(!state.is_busy());
        assert_eq!(state.lines.len(), 2);
        assert_eq!(state.lines[0].product.id, ProductId::from("a"));
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = CartState::new(TaskId(7));
        let update = handle_cart_event(
            Some(&mut state),
            CartUiEvent::Loaded {
                visit: TaskId(6),
                result: Ok(vec![CartItem {
                    product: Some(line("a", 1).product),
                    quantity: 1,
                }]),
            },
        );
        assert!(update.effects.is_empty());
        assert!(state.loading);
        assert!(state.lines.is_empty());
    }

    #[test]
    fn test_load_drops_missing_products() {
        let mut state = CartState::new(TaskId(1));
        handle_cart_event(
            Some(&mut state),
            CartUiEvent::Loaded {
                visit: TaskId(1),
                result: Ok(vec![
                    CartItem {
                        product: None,
                        quantity: 4,
                    },
                    CartItem {
                        product: Some(line("b", 1).product),
                        quantity: 2,
                    },
                ]),
            },
        );
        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.summary().item_count, 2);
    }

    #[test]
    fn test_remove_success_drops_line() {
        let mut state = loaded(vec![line("a", 1), line("b", 1)]);
        state.selected = 1;
        let update = handle_cart_key(&mut state, key('x'));
        assert_eq!(update.effects.len(), 1);

        let done = handle_cart_event(
            Some(&mut state),
            CartUiEvent::Removed {
                visit: TaskId(3),
                id: ProductId::from("b"),
                result: Ok(()),
            },
        );
        assert_eq!(done.effects, vec![UiEffect::info("Item removed from cart")]);
        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_checkout_requires_items() {
        let mut empty = loaded(vec![]);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(handle_cart_key(&mut empty, enter).navigate.is_none());

        let mut state = loaded(vec![line("a", 1)]);
        assert_eq!(
            handle_cart_key(&mut state, enter).navigate,
            Some(Route::Checkout)
        );
    }
}
