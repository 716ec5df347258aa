//! HTTP Client Wrapper
//!
//! Thin layer over `reqwest` shared by all services: base URL, timeout,
//! bearer token injection, request/response logging and global handling of
//! auth failures.

mod auth;

use std::rc::Rc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;

pub use auth::AuthSession;
use auth::BrowserSession;
#[cfg(test)]
pub use auth::MemorySession;

use crate::config::AppConfig;
use crate::error::ApiError;

/// Side effect triggered by a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorReaction {
    /// Drop the stored token and send the user to the login page
    Reauthenticate,
    Forbidden,
    ServerError,
    None,
}

impl ErrorReaction {
    pub fn for_error(err: &ApiError) -> Self {
        match err.status() {
            Some(401) => ErrorReaction::Reauthenticate,
            Some(403) => ErrorReaction::Forbidden,
            Some(500) => ErrorReaction::ServerError,
            _ => ErrorReaction::None,
        }
    }
}

/// Configured HTTP client
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_ms: u32,
    session: Rc<dyn AuthSession>,
}

impl ApiClient {
    /// Client whose token comes from browser local storage
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let session = BrowserSession::new(config.auth_token_key.as_str(), config.login_path.as_str());
        Self::with_session(config, Rc::new(session))
    }

    pub fn with_session(config: &AppConfig, session: Rc<dyn AuthSession>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
            session,
        })
    }

    /// Absolute URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let mut request = self.http.get(&url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        log::info!("API Request: GET {}", path);

        let result = self.execute(request, path).await;
        if let Err(err) = &result {
            self.handle_error(err, path);
        }
        result
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let response = self.send_with_timeout(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: path.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        log::info!("API Response: {} {} ({} bytes)", status.as_u16(), path, body.len());
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // reqwest has no timer on wasm32, so race the request against one
    #[cfg(target_arch = "wasm32")]
    async fn send_with_timeout(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        use futures::future::{select, Either};
        use gloo_timers::future::TimeoutFuture;

        let send = Box::pin(request.send());
        let timer = TimeoutFuture::new(self.timeout_ms);
        match select(send, timer).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
            Either::Right(_) => Err(ApiError::Timeout { after_ms: self.timeout_ms }),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send_with_timeout(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let timeout = std::time::Duration::from_millis(self.timeout_ms.into());
        request.timeout(timeout).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout { after_ms: self.timeout_ms }
            } else {
                ApiError::Network(e.to_string())
            }
        })
    }

    fn handle_error(&self, err: &ApiError, path: &str) {
        log::error!("API Error: {} ({})", err, path);
        match ErrorReaction::for_error(err) {
            ErrorReaction::Reauthenticate => {
                log::warn!("Session rejected, sending user to login");
                self.session.expire();
            }
            ErrorReaction::Forbidden => log::error!("Access forbidden"),
            ErrorReaction::ServerError => log::error!("Server error occurred"),
            ErrorReaction::None => {}
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.test", "/posts"), "https://api.test/posts");
        assert_eq!(join_url("https://api.test/", "posts/3"), "https://api.test/posts/3");
    }

    #[test]
    fn test_error_reaction() {
        let status = |status| ApiError::Status { status, url: "/posts".into() };
        assert_eq!(ErrorReaction::for_error(&status(401)), ErrorReaction::Reauthenticate);
        assert_eq!(ErrorReaction::for_error(&status(403)), ErrorReaction::Forbidden);
        assert_eq!(ErrorReaction::for_error(&status(500)), ErrorReaction::ServerError);
        assert_eq!(ErrorReaction::for_error(&status(404)), ErrorReaction::None);
        assert_eq!(
            ErrorReaction::for_error(&ApiError::Network("offline".into())),
            ErrorReaction::None
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use super::*;
    use crate::models::Post;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, session: &Rc<MemorySession>) -> ApiClient {
        let config = AppConfig {
            api_base_url: server.uri(),
            request_timeout_ms: 200,
            ..AppConfig::default()
        };
        ApiClient::with_session(&config, session.clone()).unwrap()
    }

    fn posts() -> serde_json::Value {
        json!([
            {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
            {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"}
        ])
    }

    #[tokio::test]
    async fn test_bearer_token_and_content_type_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(header("authorization", "Bearer t0k3n"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts()))
            .expect(1)
            .mount(&server)
            .await;

        let session = Rc::new(MemorySession::with_token("t0k3n"));
        let found: Vec<Post> = client(&server, &session).get_json("/posts").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].title, "qui est esse");
    }

    #[tokio::test]
    async fn test_no_token_no_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts()))
            .mount(&server)
            .await;

        let session = Rc::new(MemorySession::default());
        let _: Vec<Post> = client(&server, &session).get_json("/posts").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_error_status_mapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts/999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let session = Rc::new(MemorySession::with_token("t0k3n"));
        let err = client(&server, &session)
            .get_json::<Post>("/posts/999")
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Status { status: 404, url: "/posts/999".into() });
        assert!(!session.expired());
    }

    #[tokio::test]
    async fn test_unauthorized_expires_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let session = Rc::new(MemorySession::with_token("stale"));
        let err = client(&server, &session)
            .get_json::<Vec<Post>>("/posts")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(session.expired());
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn test_forbidden_keeps_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let session = Rc::new(MemorySession::with_token("t0k3n"));
        let err = client(&server, &session)
            .get_json::<Vec<Post>>("/posts")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(!session.expired());
        assert_eq!(session.token().as_deref(), Some("t0k3n"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let session = Rc::new(MemorySession::default());
        let err = client(&server, &session)
            .get_json::<Vec<Post>>("/posts")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(posts())
                    .set_delay(std::time::Duration::from_millis(1_000)),
            )
            .mount(&server)
            .await;

        let session = Rc::new(MemorySession::default());
        let err = client(&server, &session)
            .get_json::<Vec<Post>>("/posts")
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Timeout { after_ms: 200 });
    }
}
