//! API Response types
//!
//! The backend answers with a `{ success, data }` envelope, a bare JSON
//! value, or (for list endpoints) one of three collection shapes. Errors
//! carry a FastAPI-style `detail` field or an `{ error, message }` pair.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Error bodies
// =============================================================================

/// Error body sent by the backend or the gateway
///
/// `detail` is either a string or a list of validation items with a `msg`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// Structured message in priority order: `detail`, `message`, `error`
    pub fn message(&self) -> Option<String> {
        self.detail_text()
            .or_else(|| non_empty(self.message.as_deref()))
            .or_else(|| non_empty(self.error.as_deref()))
    }

    fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) => non_empty(Some(s)),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// =============================================================================
// List envelopes
// =============================================================================

/// Why a list body could not be decoded
#[derive(Debug, thiserror::Error)]
pub enum ListShapeError {
    /// Body was none of: array, `{ <key>: [...] }`, `{ data: [...] }`
    #[error("Invalid {key} data format received from server: {found}")]
    UnexpectedShape { key: String, found: String },

    /// Envelope carried `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Shape was fine but an item did not match the model
    #[error("Invalid {key} item: {source}")]
    Item {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The three accepted list shapes, normalized into one sequence
#[derive(Debug, Clone, PartialEq)]
pub enum ListEnvelope<T> {
    /// `[...]`
    Bare(Vec<T>),
    /// `{ "users": [...] }` / `{ "employees": [...] }`
    Keyed(Vec<T>),
    /// `{ "data": [...] }`
    Data(Vec<T>),
}

impl<T: DeserializeOwned> ListEnvelope<T> {
    /// Decode a list body whose keyed form uses `key`
    pub fn decode(body: Value, key: &str) -> Result<Self, ListShapeError> {
        match body {
            Value::Array(items) => Ok(Self::Bare(decode_items(items, key)?)),
            Value::Object(mut map) => {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return Ok(Self::Keyed(decode_items(items, key)?));
                }
                if let Some(Value::Array(items)) = map.remove("data") {
                    return Ok(Self::Data(decode_items(items, key)?));
                }
                if map.get("success").and_then(Value::as_bool) == Some(false) {
                    let body = ErrorBody {
                        detail: map.get("detail").cloned(),
                        message: map.get("message").and_then(Value::as_str).map(String::from),
                        error: map.get("error").and_then(Value::as_str).map(String::from),
                    };
                    let message = body
                        .message()
                        .unwrap_or_else(|| format!("Failed to load {key}"));
                    return Err(ListShapeError::Rejected(message));
                }
                let mut fields: Vec<&str> = map.keys().map(String::as_str).collect();
                fields.sort_unstable();
                Err(ListShapeError::UnexpectedShape {
                    key: key.to_string(),
                    found: format!("object with fields [{}]", fields.join(", ")),
                })
            }
            other => Err(ListShapeError::UnexpectedShape {
                key: key.to_string(),
                found: describe(&other).to_string(),
            }),
        }
    }
}

impl<T> ListEnvelope<T> {
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Bare(_) => "array",
            Self::Keyed(_) => "keyed",
            Self::Data(_) => "data",
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Keyed(items) | Self::Data(items) => items,
        }
    }
}

fn decode_items<T: DeserializeOwned>(
    items: Vec<Value>,
    key: &str,
) -> Result<Vec<T>, ListShapeError> {
    serde_json::from_value(Value::Array(items)).map_err(|source| ListShapeError::Item {
        key: key.to_string(),
        source,
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_accepts_three_shapes() {
        let bare = ListEnvelope::<Item>::decode(json!([{ "id": 1 }]), "users").unwrap();
        assert_eq!(bare.shape(), "array");

        let keyed = ListEnvelope::<Item>::decode(json!({ "users": [{ "id": 2 }] }), "users").unwrap();
        assert_eq!(keyed.shape(), "keyed");
        assert_eq!(keyed.into_items(), vec![Item { id: 2 }]);

        let data = ListEnvelope::<Item>::decode(
            json!({ "success": true, "data": [{ "id": 3 }, { "id": 4 }] }),
            "users",
        )
        .unwrap();
        assert_eq!(data.into_items().len(), 2);
    }

    #[test]
    fn test_rejects_other_shapes() {
        let err = ListEnvelope::<Item>::decode(json!({ "items": [] }), "employees").unwrap_err();
        assert!(matches!(err, ListShapeError::UnexpectedShape { .. }));
        assert!(err.to_string().contains("items"));

        let err = ListEnvelope::<Item>::decode(json!("nope"), "employees").unwrap_err();
        assert!(err.to_string().contains("string"));

        let err = ListEnvelope::<Item>::decode(json!({ "data": { "id": 1 } }), "employees").unwrap_err();
        assert!(matches!(err, ListShapeError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_failed_envelope_surfaces_message() {
        let err = ListEnvelope::<Item>::decode(
            json!({ "success": false, "error": "database offline" }),
            "users",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "database offline");
    }

    #[test]
    fn test_error_body_priority() {
        let body = ErrorBody::parse(r#"{"detail":"cannot delete last admin","message":"x"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("cannot delete last admin"));

        let body = ErrorBody::parse(r#"{"detail":[{"msg":"field required"},{"msg":"bad email"}]}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("field required; bad email"));

        let body = ErrorBody::parse(r#"{"error":"Proxy error","message":"connection refused"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("connection refused"));

        assert!(ErrorBody::default().message().is_none());
    }
}
