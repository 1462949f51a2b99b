use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::response::ErrorBody;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// Backend unreachable, timed out or cut the response short
    #[error("{0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Failed to read request body: {0}")]
    Body(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Proxy error");
        let body = ErrorBody {
            detail: None,
            error: Some("Proxy error".to_string()),
            message: Some(self.to_string()),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = GatewayError::Body("length limit exceeded".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "Proxy error");
        assert_eq!(
            value["message"],
            "Failed to read request body: length limit exceeded"
        );
        assert!(value.get("detail").is_none());
    }
}
