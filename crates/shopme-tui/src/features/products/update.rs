//! Catalog reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::ProductsState;
use crate::common::{edit_field, paste_into};
use crate::effects::UiEffect;
use crate::events::ProductsUiEvent;
use crate::overlays::{ConfirmDeleteState, Overlay, ProductFormState};
use crate::update::ScreenUpdate;

const LOAD_FAILED: &str = "Failed to load products. Make sure the server is running.";
const SAVE_FAILED: &str = "Failed to save. Please try again.";

/// Effect that (re)loads the catalog for this visit.
pub fn load(state: &mut ProductsState) -> UiEffect {
    state.loading = true;
    UiEffect::LoadProducts { visit: state.visit }
}

pub fn handle_products_key(state: &mut ProductsState, key: KeyEvent) -> ScreenUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up => {
            state.select_prev();
            ScreenUpdate::none()
        }
        KeyCode::Down => {
            state.select_next();
            ScreenUpdate::none()
        }
        KeyCode::Left => {
            state.prev_category();
            ScreenUpdate::none()
        }
        KeyCode::Right => {
            state.next_category();
            ScreenUpdate::none()
        }
        KeyCode::Enter => add_selected_to_cart(state),
        KeyCode::Char('n') if ctrl => {
            ScreenUpdate::none().open(Overlay::ProductForm(ProductFormState::create(state.visit)))
        }
        KeyCode::Char('e') if ctrl => match state.selected_product() {
            Some(product) => ScreenUpdate::none().open(Overlay::ProductForm(
                ProductFormState::edit(state.visit, product),
            )),
            None => ScreenUpdate::none(),
        },
        KeyCode::Char('d') if ctrl => match state.selected_product() {
            Some(product) => ScreenUpdate::none().open(Overlay::ConfirmDelete(
                ConfirmDeleteState::open(state.visit, product),
            )),
            None => ScreenUpdate::none(),
        },
        KeyCode::Char('r') if ctrl => {
            if state.loading {
                ScreenUpdate::none()
            } else {
                ScreenUpdate::effects(vec![load(state)])
            }
        }
        KeyCode::Esc => {
            state.search.clear();
            state.clamp_selection();
            ScreenUpdate::none()
        }
        _ => {
            if edit_field(&mut state.search, key) {
                state.selected = 0;
            }
            ScreenUpdate::none()
        }
    }
}

pub fn handle_products_paste(state: &mut ProductsState, text: &str) {
    paste_into(&mut state.search, text);
    state.selected = 0;
}

/// Out-of-stock products and products already being added are skipped.
fn add_selected_to_cart(state: &mut ProductsState) -> ScreenUpdate {
    let Some(product) = state.selected_product() else {
        return ScreenUpdate::none();
    };
    if !product.in_stock() {
        return ScreenUpdate::none();
    }
    let id = product.id.clone();
    if !state.adding.try_start(&id) {
        return ScreenUpdate::none();
    }
    ScreenUpdate::effects(vec![UiEffect::AddToCart {
        visit: state.visit,
        id,
    }])
}

/// Applies a catalog result.
///
/// `state` is the live catalog screen, if any; `overlay` is the open modal.
pub fn handle_products_event(
    state: Option<&mut ProductsState>,
    overlay: Option<&mut Overlay>,
    event: ProductsUiEvent,
) -> ScreenUpdate {
    match event {
        ProductsUiEvent::Loaded { visit, result } => {
            let Some(state) = state.filter(|s| s.visit == visit) else {
                return ScreenUpdate::none();
            };
            state.loading = false;
            match result {
                Ok(products) => {
                    state.products = products;
                    state.error = None;
                    state.clamp_selection();
                }
                Err(_) => state.error = Some(LOAD_FAILED.to_string()),
            }
            ScreenUpdate::none()
        }
        ProductsUiEvent::AddedToCart { visit, id, result } => {
            if let Some(state) = state.filter(|s| s.visit == visit) {
                state.adding.finish(&id);
            }
            match result {
                Ok(()) => ScreenUpdate::effects(vec![UiEffect::success("Added to cart!")]),
                Err(_) => ScreenUpdate::effects(vec![UiEffect::error("Failed to add to cart")]),
            }
        }
        ProductsUiEvent::Saved {
            visit,
            updated,
            result,
        } => {
            let live = state.filter(|s| s.visit == visit);
            match result {
                Ok(()) => {
                    let message = if updated {
                        "Product updated successfully"
                    } else {
                        "Product added successfully"
                    };
                    let mut update = ScreenUpdate::effects(vec![UiEffect::success(message)]);
                    if let Some(state) = live {
                        update.effects.push(load(state));
                        update = update.closing_overlay();
                    }
                    update
                }
                Err(_) => {
                    if let Some(Overlay::ProductForm(form)) = overlay
                        && form.visit == visit
                    {
                        form.saving.finish();
                        form.error = Some(SAVE_FAILED.to_string());
                    }
                    ScreenUpdate::none()
                }
            }
        }
        ProductsUiEvent::Deleted { visit, id, result } => {
            let live = state.filter(|s| s.visit == visit);
            tracing::debug!(%id, deleted = result.is_ok(), "delete finished");
            match result {
                Ok(()) => {
                    let mut update =
                        ScreenUpdate::effects(vec![UiEffect::success("Product deleted")]);
                    if let Some(state) = live {
                        update.effects.push(load(state));
                        update = update.closing_overlay();
                    }
                    update
                }
                Err(_) => {
                    // Keep the confirmation open so the user can retry.
                    if let Some(Overlay::ConfirmDelete(confirm)) = overlay
                        && confirm.visit == visit
                        && confirm.id == id
                    {
                        confirm.deleting.finish();
                    }
                    ScreenUpdate::effects(vec![UiEffect::error("Failed to delete product")])
                }
            }
        }
    }
}
