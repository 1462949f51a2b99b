//! Reverse proxy to the HR backend
//!
//! Requests are replayed against `BACKEND_URL` with their method, query,
//! headers and body. Hop-by-hop headers and `host` are dropped in both
//! directions; the upstream status and body are passed through untouched.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, header},
    response::Response,
};

use crate::core::{Config, GatewayError, Result};

/// Largest request body forwarded upstream
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Login is served under `/auth` by the backend
const LOGIN_PATH: &str = "/api/login";
const UPSTREAM_LOGIN_PATH: &str = "/auth/login";

/// Shared proxy state
#[derive(Debug, Clone)]
pub struct ProxyState {
    inner: Arc<ProxyInner>,
}

#[derive(Debug)]
struct ProxyInner {
    client: reqwest::Client,
    backend_url: String,
    strip_api_prefix: bool,
}

impl ProxyState {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            // 3xx goes back to the browser with its Location intact
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            inner: Arc::new(ProxyInner {
                client,
                backend_url: config.backend_url.trim_end_matches('/').to_string(),
                strip_api_prefix: config.strip_api_prefix,
            }),
        })
    }

    /// Absolute upstream URL for a request path and query
    pub fn upstream_url(&self, path: &str, query: Option<&str>) -> String {
        let path = upstream_path(path, self.inner.strip_api_prefix);
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.inner.backend_url, path, q),
            _ => format!("{}{}", self.inner.backend_url, path),
        }
    }
}

/// Map an incoming path onto the backend's path
///
/// `/api/login` always becomes `/auth/login`. With `strip_api_prefix`
/// any other `/api/x` becomes `/x`.
pub fn upstream_path(path: &str, strip_api_prefix: bool) -> String {
    if path == LOGIN_PATH {
        return UPSTREAM_LOGIN_PATH.to_string();
    }
    if strip_api_prefix
        && let Some(rest) = path.strip_prefix("/api")
        && (rest.is_empty() || rest.starts_with('/'))
    {
        return if rest.is_empty() {
            "/".to_string()
        } else {
            rest.to_string()
        };
    }
    path.to_string()
}

/// Headers that describe one connection rather than the message
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "proxy-connection"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Copy end-to-end headers. `content-length` is recomputed by the sender.
fn copy_headers(from: &HeaderMap, to: &mut HeaderMap) {
    for (name, value) in from {
        if is_hop_by_hop(name) || name == header::HOST || name == header::CONTENT_LENGTH {
            continue;
        }
        to.append(name.clone(), value.clone());
    }
}

/// Proxy handler for every forwarded route
pub async fn forward(State(state): State<ProxyState>, req: Request) -> Result<Response> {
    let (parts, body) = req.into_parts();
    let url = state.upstream_url(parts.uri.path(), parts.uri.query());

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| GatewayError::Body(e.to_string()))?;

    let mut headers = HeaderMap::new();
    copy_headers(&parts.headers, &mut headers);

    tracing::debug!(method = %parts.method, %url, "Forwarding request");
    let upstream = state
        .inner
        .client
        .request(parts.method, &url)
        .headers(headers)
        .body(bytes)
        .send()
        .await?;

    let status = upstream.status();
    let upstream_headers = upstream.headers().clone();
    let body = upstream.bytes().await?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    copy_headers(&upstream_headers, response.headers_mut());
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rewrite() {
        assert_eq!(upstream_path("/api/login", false), "/auth/login");
        assert_eq!(upstream_path("/api/login", true), "/auth/login");
    }

    #[test]
    fn test_prefix_strip() {
        assert_eq!(upstream_path("/api/users", false), "/api/users");
        assert_eq!(upstream_path("/api/users/7", true), "/users/7");
        assert_eq!(upstream_path("/api", true), "/");
        assert_eq!(upstream_path("/apiary", true), "/apiary");
        assert_eq!(upstream_path("/auth/forgot-password", true), "/auth/forgot-password");
    }

    #[test]
    fn test_upstream_url_keeps_query() {
        let config = Config::with_overrides("http://backend:8000/", "dist");
        let state = ProxyState::new(&config).unwrap();
        assert_eq!(
            state.upstream_url("/auth/verify-reset-token", Some("token=abc")),
            "http://backend:8000/auth/verify-reset-token?token=abc"
        );
        assert_eq!(state.upstream_url("/health", None), "http://backend:8000/health");
    }

    #[test]
    fn test_copy_headers_drops_hop_by_hop() {
        let mut from = HeaderMap::new();
        from.insert(header::AUTHORIZATION, "Bearer t".parse().unwrap());
        from.insert(header::CONNECTION, "keep-alive".parse().unwrap());
        from.insert(header::HOST, "portal.local".parse().unwrap());
        from.insert(header::TRANSFER_ENCODING, "chunked".parse().unwrap());
        from.insert(header::CONTENT_LENGTH, "12".parse().unwrap());

        let mut to = HeaderMap::new();
        copy_headers(&from, &mut to);
        assert_eq!(to.len(), 1);
        assert_eq!(to[header::AUTHORIZATION], "Bearer t");
    }
}
