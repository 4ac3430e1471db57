//! Integration tests for the storefront API client.
//!
//! Runs the client against a wiremock server and checks paths, bodies,
//! the bearer header and response parsing.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;
use shopme_core::api::{ApiClient, Category, LoginRequest, ProductId, ProductPayload};
use shopme_core::cart;
use shopme_core::config::Config;
use shopme_core::session::{Session, SessionStore};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client(server: &MockServer, session: Arc<Session>) -> ApiClient {
    let config = Config {
        api_base_url: format!("{}/api", server.uri()),
        ..Config::default()
    };
    ApiClient::new(&config, session).unwrap()
}

#[tokio::test]
async fn test_login_returns_token_and_session_attaches_it() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cart": { "items": [] } })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(Session::restore(SessionStore::new(
        home.path().join("session.json"),
    )));
    let api = client(&server, session.clone());

    let token = api
        .login(&LoginRequest {
            email: "a@b.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(token, "abc");
    // The client never starts a session on its own.
    assert!(!session.is_authenticated());

    session.login(token).unwrap();
    assert!(api.fetch_cart().await.unwrap().is_empty());

    let restored = Session::restore(SessionStore::new(home.path().join("session.json")));
    assert_eq!(restored.token().as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_no_authorization_header_after_logout() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let session = Arc::new(Session::ephemeral());
    let api = client(&server, session.clone());

    session.login("abc").unwrap();
    api.list_products().await.unwrap();
    session.logout().unwrap();
    api.list_products().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0]
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer abc")
    );
    assert!(requests[1].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_list_products_accepts_wrapped_shape() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{
                "_id": "p1",
                "name": "Desk",
                "price": 120.5,
                "imageUrl": "http://img/desk.png",
                "category": "Furniture",
                "stock": 0
            }]
        })))
        .mount(&server)
        .await;

    let api = client(&server, Arc::new(Session::ephemeral()));
    let products = api.list_products().await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, ProductId::from("p1"));
    assert_eq!(products[0].price, Decimal::new(1205, 1));
    assert!(!products[0].in_stock());
}

#[tokio::test]
async fn test_cart_with_missing_product_is_filtered() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cart": { "items": [
                { "product": null, "quantity": 2 },
                { "product": { "_id": "p2", "name": "Novel", "price": 9.99 }, "quantity": 3 }
            ]}
        })))
        .mount(&server)
        .await;

    let api = client(&server, Arc::new(Session::ephemeral()));
    let lines = cart::valid_lines(api.fetch_cart().await.unwrap());

    assert_eq!(lines.len(), 1);
    assert_eq!(cart::item_count(&lines), 3);
    assert_eq!(cart::subtotal(&lines), Decimal::new(2997, 2));
}

#[tokio::test]
async fn test_missing_cart_is_empty() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cart": null })))
        .mount(&server)
        .await;

    let api = client(&server, Arc::new(Session::ephemeral()));
    assert!(api.fetch_cart().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "nope" })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/product/p1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = client(&server, Arc::new(Session::ephemeral()));
    let err = api
        .login(&LoginRequest {
            email: "a@b.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("401"));

    assert!(api.delete_product(&ProductId::from("p1")).await.is_err());
}

#[tokio::test]
async fn test_cart_mutations_hit_expected_paths() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cart/add"))
        .and(body_json(json!({ "productId": "p1", "quantity": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/cart/update/p1"))
        .and(body_json(json!({ "quantity": 4 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/cart/remove/p1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/cart/clear"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Arc::new(Session::ephemeral()));
    let id = ProductId::from("p1");
    api.add_to_cart(&id, 1).await.unwrap();
    api.update_cart_item(&id, 4).await.unwrap();
    api.remove_cart_item(&id).await.unwrap();
    api.clear_cart().await.unwrap();
}

#[tokio::test]
async fn test_product_writes_send_payload() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let expected = json!({
        "name": "Lamp",
        "price": 12.5,
        "imageUrl": "http://img/lamp.png",
        "category": "Furniture",
        "stock": 3
    });
    Mock::given(method("POST"))
        .and(path("/api/product"))
        .and(body_json(expected.clone()))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/product/p9"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Arc::new(Session::ephemeral()));
    let payload = ProductPayload {
        name: "Lamp".into(),
        price: Decimal::new(1250, 2),
        image_url: "http://img/lamp.png".into(),
        category: Category::Furniture,
        stock: 3,
    };
    api.create_product(&payload).await.unwrap();
    api.update_product(&ProductId::from("p9"), &payload)
        .await
        .unwrap();
}
