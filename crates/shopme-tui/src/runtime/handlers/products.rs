use shopme_core::api::{ApiClient, ProductId, ProductPayload};

use super::report;
use crate::common::TaskId;
use crate::events::{ProductsUiEvent, UiEvent};

pub async fn load_products(api: ApiClient, visit: TaskId) -> UiEvent {
    let result = report("load products", api.list_products().await);
    UiEvent::Products(ProductsUiEvent::Loaded { visit, result })
}

/// Creates the product when `id` is `None`, updates it otherwise.
pub async fn save_product(
    api: ApiClient,
    visit: TaskId,
    id: Option<ProductId>,
    payload: ProductPayload,
) -> UiEvent {
    let updated = id.is_some();
    let result = match &id {
        Some(id) => api.update_product(id, &payload).await,
        None => api.create_product(&payload).await,
    };
    let result = report("save product", result);
    UiEvent::Products(ProductsUiEvent::Saved {
        visit,
        updated,
        result,
    })
}

pub async fn delete_product(api: ApiClient, visit: TaskId, id: ProductId) -> UiEvent {
    let result = report("delete product", api.delete_product(&id).await);
    UiEvent::Products(ProductsUiEvent::Deleted { visit, id, result })
}

/// Adds one unit of the product to the cart.
pub async fn add_to_cart(api: ApiClient, visit: TaskId, id: ProductId) -> UiEvent {
    let result = report("add to cart", api.add_to_cart(&id, 1).await);
    UiEvent::Products(ProductsUiEvent::AddedToCart { visit, id, result })
}
