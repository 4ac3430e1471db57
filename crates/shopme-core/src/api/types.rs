//! Wire types for the storefront REST API.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product category.
///
/// The catalog uses a fixed set. Any other name the server sends is kept
/// verbatim in `Other`, so one odd record neither fails the listing nor gets
/// rewritten when the product is saved again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Electronics,
    Fashion,
    Furniture,
    Books,
    Sports,
    Beauty,
    Other(String),
}

impl Category {
    /// Categories a user can pick, in display order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::Furniture,
        Category::Books,
        Category::Sports,
        Category::Beauty,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Furniture => "Furniture",
            Category::Books => "Books",
            Category::Sports => "Sports",
            Category::Beauty => "Beauty",
            Category::Other(name) => name,
        }
    }

    fn position(&self) -> Option<usize> {
        Self::ALL.iter().position(|c| c == self)
    }

    /// Next selectable category (wraps).
    #[must_use]
    pub fn next(&self) -> Self {
        let idx = self.position().map_or(0, |i| i + 1);
        Self::ALL[idx % Self::ALL.len()].clone()
    }

    /// Previous selectable category (wraps).
    #[must_use]
    pub fn prev(&self) -> Self {
        let idx = self
            .position()
            .unwrap_or(0)
            .checked_sub(1)
            .unwrap_or(Self::ALL.len() - 1);
        Self::ALL[idx].clone()
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == name)
            .cloned()
            .unwrap_or(Category::Other(name))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub category: Category,
    /// Cart payloads omit stock; it defaults to zero there.
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Body for product create/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: Category,
    pub stock: u32,
}

/// `GET /product` returns either a bare array or `{ products: [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProductListResponse {
    Bare(Vec<Product>),
    Wrapped {
        #[serde(default)]
        products: Vec<Product>,
    },
}

impl ProductListResponse {
    pub(crate) fn into_products(self) -> Vec<Product> {
        match self {
            ProductListResponse::Bare(products) | ProductListResponse::Wrapped { products } => {
                products
            }
        }
    }
}

/// A cart line as sent by the server. `product` is null when the product
/// was deleted after being added.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    pub product: Option<Product>,
    pub quantity: u32,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CartBody {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CartResponse {
    #[serde(default)]
    pub cart: Option<CartBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddToCartRequest<'a> {
    #[serde(rename = "productId")]
    pub product_id: &'a str,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuantityRequest {
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_product_reads_underscore_id_and_camel_case() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Lamp",
            "price": 19.99,
            "imageUrl": "http://img/lamp.png",
            "category": "Furniture",
            "stock": 4
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::from("p1"));
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.image_url, "http://img/lamp.png");
        assert_eq!(product.category, Category::Furniture);
        assert_eq!(product.stock, 4);
    }

    #[test]
    fn test_cart_product_without_stock_defaults_to_zero() {
        let item: CartItem = serde_json::from_value(json!({
            "product": { "id": "p2", "name": "Book", "price": 5, "category": "Books" },
            "quantity": 2
        }))
        .unwrap();

        let product = item.product.unwrap();
        assert_eq!(product.stock, 0);
        assert_eq!(product.price, Decimal::new(5, 0));
    }

    #[test]
    fn test_unknown_category_keeps_its_name() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p3", "name": "Thing", "price": 1, "category": "Garden"
        }))
        .unwrap();
        assert_eq!(product.category, Category::Other("Garden".into()));
        assert_eq!(product.category.as_str(), "Garden");
        assert_eq!(serde_json::to_value(&product).unwrap()["category"], "Garden");
    }

    #[test]
    fn test_product_list_accepts_both_shapes() {
        let bare: ProductListResponse =
            serde_json::from_value(json!([{ "_id": "a", "name": "A", "price": 1 }])).unwrap();
        assert_eq!(bare.into_products().len(), 1);

        let wrapped: ProductListResponse = serde_json::from_value(json!({
            "products": [{ "_id": "a", "name": "A", "price": 1 }, { "_id": "b", "name": "B", "price": 2 }]
        }))
        .unwrap();
        assert_eq!(wrapped.into_products().len(), 2);

        let empty: ProductListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_products().is_empty());
    }

    #[test]
    fn test_payload_serializes_wire_names() {
        let payload = ProductPayload {
            name: "Lamp".into(),
            price: Decimal::new(1250, 2),
            image_url: "http://img".into(),
            category: Category::Books,
            stock: 3,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["imageUrl"], "http://img");
        assert_eq!(value["category"], "Books");
        assert_eq!(value["price"], json!(12.5));
        assert_eq!(value["stock"], 3);
    }

    #[test]
    fn test_category_cycles() {
        assert_eq!(Category::Electronics.next(), Category::Fashion);
        assert_eq!(Category::Beauty.next(), Category::Electronics);
        assert_eq!(Category::Electronics.prev(), Category::Beauty);
        assert_eq!(Category::Other("Garden".into()).next(), Category::Electronics);
        assert_eq!(Category::Other("Garden".into()).prev(), Category::Beauty);
    }
}
