//! Per-entity REST API
//!
//! One [`Resource`] marker per entity type describes its endpoint and
//! payload types; [`ResourceApi`] implements the CRUD verbs for any of
//! them on top of an [`HttpClient`].
//!
//! ```text
//! GET    /api/{entity}              list (three accepted shapes)
//! POST   /api/{entity}              create
//! PUT    /api/{entity}/{id}         update
//! DELETE /api/{entity}/{id}         delete
//! PATCH  /api/{entity}/{id}/status  set is_active
//! ```

mod employees;
mod users;

use std::fmt::{Debug, Display};
use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{Employee, EmployeeData, StatusUpdate, User, UserCreate, UserUpdate};
use shared::response::{ErrorBody, ListEnvelope};

use crate::{ClientError, ClientResult, HttpClient};

pub use employees::EmployeeApi;
pub use users::UserApi;

/// Entity type managed through a REST collection
pub trait Resource: Send + Sync + 'static {
    type Entity: DeserializeOwned + Clone + Debug + Send + Sync + 'static;
    type Id: Display + Debug + Clone + PartialEq + Send + Sync + 'static;
    type Create: Serialize + Debug + Send + Sync;
    type Update: Serialize + Debug + Send + Sync;

    /// Collection path, e.g. `api/users`
    const PATH: &'static str;
    /// Field name of the keyed list shape, e.g. `users`
    const COLLECTION_KEY: &'static str;
    /// Singular noun for messages, e.g. `user`
    const NOUN: &'static str;

    fn id(entity: &Self::Entity) -> Self::Id;
}

/// User accounts
#[derive(Debug, Clone, Copy)]
pub struct Users;

impl Resource for Users {
    type Entity = User;
    type Id = String;
    type Create = UserCreate;
    type Update = UserUpdate;

    const PATH: &'static str = "api/users";
    const COLLECTION_KEY: &'static str = "users";
    const NOUN: &'static str = "user";

    fn id(entity: &User) -> String {
        entity.id.clone()
    }
}

/// Employee records
#[derive(Debug, Clone, Copy)]
pub struct Employees;

impl Resource for Employees {
    type Entity = Employee;
    type Id = i64;
    type Create = EmployeeData;
    type Update = EmployeeData;

    const PATH: &'static str = "api/employees";
    const COLLECTION_KEY: &'static str = "employees";
    const NOUN: &'static str = "employee";

    fn id(entity: &Employee) -> i64 {
        entity.id
    }
}

/// CRUD verbs for one resource
///
/// Write verbs return the decoded response body; use [`decode_entity`]
/// when the caller needs the echoed record.
#[async_trait]
pub trait CrudApi<R: Resource>: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<R::Entity>>;
    async fn create(&self, data: &R::Create) -> ClientResult<Value>;
    async fn update(&self, id: &R::Id, data: &R::Update) -> ClientResult<Value>;
    async fn delete(&self, id: &R::Id) -> ClientResult<Value>;
    async fn set_active(&self, id: &R::Id, active: bool) -> ClientResult<Value>;
}

/// [`CrudApi`] over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ResourceApi<C, R> {
    http: C,
    _resource: PhantomData<fn() -> R>,
}

impl<C: HttpClient, R: Resource> ResourceApi<C, R> {
    pub fn new(http: C) -> Self {
        Self {
            http,
            _resource: PhantomData,
        }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    fn item_path(id: &R::Id) -> String {
        format!("{}/{}", R::PATH, id)
    }
}

#[async_trait]
impl<C, R> CrudApi<R> for ResourceApi<C, R>
where
    C: HttpClient,
    R: Resource,
{
    async fn list(&self) -> ClientResult<Vec<R::Entity>> {
        let body: Value = self.http.get(R::PATH).await?;
        let envelope = ListEnvelope::<R::Entity>::decode(body, R::COLLECTION_KEY)?;
        tracing::debug!(resource = R::NOUN, shape = envelope.shape(), "List decoded");
        Ok(envelope.into_items())
    }

    async fn create(&self, data: &R::Create) -> ClientResult<Value> {
        let body: Value = self.http.post(R::PATH, data).await?;
        check_envelope(body)
    }

    async fn update(&self, id: &R::Id, data: &R::Update) -> ClientResult<Value> {
        let body: Value = self.http.put(&Self::item_path(id), data).await?;
        check_envelope(body)
    }

    async fn delete(&self, id: &R::Id) -> ClientResult<Value> {
        let body: Value = self.http.delete(&Self::item_path(id)).await?;
        check_envelope(body)
    }

    async fn set_active(&self, id: &R::Id, active: bool) -> ClientResult<Value> {
        let path = format!("{}/status", Self::item_path(id));
        let body: Value = self
            .http
            .patch(&path, &StatusUpdate { is_active: active })
            .await?;
        check_envelope(body)
    }
}

/// Treat a 2xx `{ "success": false, ... }` envelope as a rejection
pub(crate) fn check_envelope(body: Value) -> ClientResult<Value> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let text = body.to_string();
        let detail = serde_json::from_value::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        return Err(ClientError::Api {
            status: 200,
            detail,
            body: text,
        });
    }
    Ok(body)
}

/// Extract an entity from a write response: `{ data: entity }` or the
/// bare entity. `None` when neither decodes.
pub fn decode_entity<T: DeserializeOwned>(body: &Value) -> Option<T> {
    if let Some(data) = body.get("data")
        && let Ok(entity) = T::deserialize(data)
    {
        return Some(entity);
    }
    T::deserialize(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_envelope() {
        assert!(check_envelope(json!({ "success": true, "data": 1 })).is_ok());
        assert!(check_envelope(Value::Null).is_ok());
        let err = check_envelope(json!({ "success": false, "error": "duplicate username" })).unwrap_err();
        assert_eq!(err.server_detail(), Some("duplicate username"));
    }

    #[test]
    fn test_decode_entity_shapes() {
        let wrapped = json!({ "success": true, "data": { "id": "u1", "username": "a", "role": "hr" } });
        let bare = json!({ "id": "u2", "username": "b", "role": "user" });
        assert_eq!(decode_entity::<User>(&wrapped).map(|u| u.id), Some("u1".to_string()));
        assert_eq!(decode_entity::<User>(&bare).map(|u| u.id), Some("u2".to_string()));
        assert!(decode_entity::<User>(&json!({ "message": "deleted" })).is_none());
    }

    #[test]
    fn test_item_paths() {
        assert_eq!(
            ResourceApi::<crate::NetworkHttpClient, Users>::item_path(&"abc".to_string()),
            "api/users/abc"
        );
        assert_eq!(
            ResourceApi::<crate::NetworkHttpClient, Employees>::item_path(&42),
            "api/employees/42"
        );
    }
}
