// hr-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory transport
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{ClientError, ClientResult};

use super::http::{HttpClient, decode_body};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives an axum `Router` through Tower's `oneshot`, with no socket in
/// between. Used to embed a backend in-process and by integration tests.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use hr_client::OneshotHttpClient;
///
/// let router: Router = build_app().with_state(state);
/// let client = OneshotHttpClient::new(router);
///
/// let users: serde_json::Value = client.get("/api/users").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    fn build_request(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let uri = format!("/{}", path.trim_start_matches('/'));
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let body = match body {
            Some(bytes) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_request_with_body<B: serde::Serialize>(
        &self,
        method: http::Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let body_bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Some(body_bytes))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ClientError::from_status(status.as_u16(), text));
        }

        decode_body(&body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(http::Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(http::Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(http::Method::PATCH, path, body)?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::DELETE, path, None)?;
        self.execute(request).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_oneshot_roundtrip() {
        let router = Router::new().route("/ping", get(|| async { "{\"pong\":true}" }));
        let client = OneshotHttpClient::new(router);
        let value: serde_json::Value = client.get("ping").await.unwrap();
        assert_eq!(value["pong"], true);
    }

    #[tokio::test]
    async fn test_oneshot_maps_error_status() {
        let client = OneshotHttpClient::new(Router::new());
        let err = client.get::<serde_json::Value>("/missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
