use shopme_core::api::{ApiClient, LoginRequest, RegisterRequest};

use super::report;
use crate::common::TaskId;
use crate::events::{AuthUiEvent, UiEvent};

/// Signs in and stores the token before reporting success, so the next
/// navigation already sees an authenticated session.
pub async fn login(api: ApiClient, visit: TaskId, request: LoginRequest) -> UiEvent {
    let result = report("login", api.login(&request).await).map(|token| {
        if let Err(e) = api.session().login(token) {
            // The in-memory session is still set.
            tracing::warn!(error = %e, "failed to persist session");
        }
    });
    UiEvent::Auth(AuthUiEvent::LoginFinished { visit, result })
}

pub async fn register(api: ApiClient, visit: TaskId, request: RegisterRequest) -> UiEvent {
    let result = report("register", api.register(&request).await);
    UiEvent::Auth(AuthUiEvent::RegisterFinished { visit, result })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shopme_core::config::Config;
    use shopme_core::session::Session;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn api(server: &MockServer) -> ApiClient {
        let config = Config {
            api_base_url: format!("{}/api", server.uri()),
            ..Config::default()
        };
        ApiClient::new(&config, Arc::new(Session::ephemeral())).unwrap()
    }

    fn request() -> LoginRequest {
        LoginRequest {
            email: "a@b.com".into(),
            password: "secret1".into(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_token_before_reporting() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"token":"abc"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server);
        let event = login(api.clone(), TaskId(1), request()).await;
        assert!(matches!(
            event,
            UiEvent::Auth(AuthUiEvent::LoginFinished {
                visit: TaskId(1),
                result: Ok(())
            })
        ));
        assert_eq!(api.session().token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_session_empty() {
        if !can_bind_localhost() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let api = api(&server);
        let event = login(api.clone(), TaskId(1), request()).await;
        assert!(matches!(
            event,
            UiEvent::Auth(AuthUiEvent::LoginFinished { result: Err(_), .. })
        ));
        assert!(!api.session().is_authenticated());
    }
}
