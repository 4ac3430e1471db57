use shopme_core::api::{ApiClient, ProductId};

use super::report;
use crate::common::TaskId;
use crate::events::{CartUiEvent, CheckoutUiEvent, UiEvent};

pub async fn load_cart(api: ApiClient, visit: TaskId) -> UiEvent {
    let result = report("load cart", api.fetch_cart().await);
    UiEvent::Cart(CartUiEvent::Loaded { visit, result })
}

pub async fn update_cart_item(
    api: ApiClient,
    visit: TaskId,
    id: ProductId,
    quantity: u32,
) -> UiEvent {
    let result = report("update quantity", api.update_cart_item(&id, quantity).await);
    UiEvent::Cart(CartUiEvent::QuantityUpdated {
        visit,
        id,
        quantity,
        result,
    })
}

pub async fn remove_cart_item(api: ApiClient, visit: TaskId, id: ProductId) -> UiEvent {
    let result = report("remove item", api.remove_cart_item(&id).await);
    UiEvent::Cart(CartUiEvent::Removed { visit, id, result })
}

pub async fn load_checkout(api: ApiClient, visit: TaskId) -> UiEvent {
    let result = report("load checkout", api.fetch_cart().await);
    UiEvent::Checkout(CheckoutUiEvent::Loaded { visit, result })
}

/// Places the order by clearing the server-side cart.
pub async fn place_order(api: ApiClient, visit: TaskId) -> UiEvent {
    let result = report("place order", api.clear_cart().await);
    UiEvent::Checkout(CheckoutUiEvent::OrderPlaced { visit, result })
}
