//! Entity store
//!
//! Owns the canonical in-memory list for one entity type and is its only
//! writer. Every mutation is followed by a full refetch rather than a
//! local patch, and every operation emits exactly one notification.
//!
//! ```text
//! Idle ──fetch_all──▶ Loading ──ok──▶ Loaded
//!                        │
//!                        └──err──▶ Failed(message)
//! ```
//!
//! `Loaded` and `Failed` are the resting states after a fetch and play
//! the role of idle; `Idle` itself only precedes the first fetch or
//! follows a denied one.
//!
//! `submitting` is tracked separately so writes can run while a list is
//! already loaded. Both are published over `watch` channels so a view can
//! hold a receiver while an operation borrows the store.

mod assignment;
mod resource;

use std::sync::Arc;

use hr_client::{AuthService, ClientResult, CrudApi, HttpClient, ResourceApi, Session};
use serde_json::Value;
use shared::permissions;
use tokio::sync::watch;

use crate::error::{PortalError, PortalResult};
use crate::notify::{Notification, Notifier};

pub use assignment::{Assignments, partition_employees};
pub use resource::{ManagedResource, Operation};

/// Load state of the list
///
/// There is no transition back to `Idle` after a fetch: `Loaded` and
/// `Failed` are themselves idle, see [`LoadState::is_settled`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; the list was cleared
    Failed(String),
}

impl LoadState {
    /// No fetch in flight
    pub fn is_settled(&self) -> bool {
        *self != LoadState::Loading
    }
}

/// Clears the submitting flag when dropped, including when the owning
/// future is cancelled mid-request
struct SubmitGuard(Arc<watch::Sender<bool>>);

impl SubmitGuard {
    fn engage(flag: &Arc<watch::Sender<bool>>) -> Self {
        flag.send_replace(true);
        Self(flag.clone())
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

/// List state plus the CRUD operations for one [`ManagedResource`]
pub struct EntityStore<C, R: ManagedResource> {
    api: ResourceApi<C, R>,
    session: Arc<Session>,
    notifier: Arc<dyn Notifier>,
    items: Vec<R::Entity>,
    state: watch::Sender<LoadState>,
    submitting: Arc<watch::Sender<bool>>,
}

impl<C, R> EntityStore<C, R>
where
    C: HttpClient + Clone,
    R: ManagedResource,
{
    pub fn new(api: ResourceApi<C, R>, session: Arc<Session>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            session,
            notifier,
            items: Vec::new(),
            state: watch::Sender::new(LoadState::Idle),
            submitting: Arc::new(watch::Sender::new(false)),
        }
    }

    /// Store whose requests carry `session`'s token
    pub fn connect(
        auth: &AuthService<C>,
        session: Arc<Session>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let api = ResourceApi::new(auth.authorized(&session));
        Self::new(api, session, notifier)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    pub fn find(&self, id: &R::Id) -> Option<&R::Entity> {
        self.items.iter().find(|e| R::id(e) == *id)
    }

    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.state.borrow() == LoadState::Loading
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    /// Receiver that follows the load state across operations
    pub fn watch_state(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Receiver that is `true` while a write is in flight
    pub fn watch_submitting(&self) -> watch::Receiver<bool> {
        self.submitting.subscribe()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Replace the list with the server's current contents
    ///
    /// A caller without manage rights gets an empty list and a
    /// permission-denied notification; no request is sent.
    pub async fn fetch_all(&mut self) -> PortalResult<()> {
        let role = self.session.role().to_string();
        if !R::can_manage(&role) {
            tracing::warn!(resource = R::NOUN, role = %role, "Fetch denied");
            self.items.clear();
            self.state.send_replace(LoadState::Idle);
            let message = R::permission_denied_message();
            self.notifier.notify(Notification::error(message.clone()));
            return Err(PortalError::PermissionDenied(message));
        }

        self.state.send_replace(LoadState::Loading);
        match self.api.list().await {
            Ok(items) => {
                tracing::debug!(resource = R::NOUN, count = items.len(), "Fetched");
                self.items = items;
                self.state.send_replace(LoadState::Loaded);
                Ok(())
            }
            Err(e) => {
                let err = PortalError::request(e, &R::failure_message(Operation::Fetch));
                tracing::error!(resource = R::NOUN, error = %err, "Fetch failed");
                self.items.clear();
                self.state.send_replace(LoadState::Failed(err.to_string()));
                self.notifier.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    pub async fn create(&mut self, data: &R::Create) -> PortalResult<Value> {
        if !R::can_manage(self.session.role()) {
            self.deny(Operation::Create, R::permission_denied_message())?;
        }
        if let Some(role) = R::created_role(data) {
            self.check_role_target(role, Operation::Create)?;
        }
        let _guard = SubmitGuard::engage(&self.submitting);
        let result = self.api.create(data).await;
        self.finish(Operation::Create, result, R::created_message(data))
            .await
    }

    pub async fn update(&mut self, id: &R::Id, data: &R::Update) -> PortalResult<Value> {
        self.check_existing(id, Operation::Update)?;
        if let Some(role) = R::updated_role(data) {
            self.check_role_target(role, Operation::Update)?;
        }
        let _guard = SubmitGuard::engage(&self.submitting);
        let result = self.api.update(id, data).await;
        self.finish(
            Operation::Update,
            result,
            R::success_message(Operation::Update, true),
        )
        .await
    }

    pub async fn delete(&mut self, id: &R::Id) -> PortalResult<()> {
        self.check_existing(id, Operation::Delete)?;
        let _guard = SubmitGuard::engage(&self.submitting);
        let result = self.api.delete(id).await;
        self.finish(
            Operation::Delete,
            result,
            R::success_message(Operation::Delete, true),
        )
        .await
        .map(|_| ())
    }

    pub async fn set_active(&mut self, id: &R::Id, active: bool) -> PortalResult<Value> {
        self.check_existing(id, Operation::SetActive)?;
        let _guard = SubmitGuard::engage(&self.submitting);
        let result = self.api.set_active(id, active).await;
        self.finish(
            Operation::SetActive,
            result,
            R::success_message(Operation::SetActive, active),
        )
        .await
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Notify once, then refetch on success
    pub(crate) async fn finish<T>(
        &mut self,
        op: Operation,
        result: ClientResult<T>,
        success: String,
    ) -> PortalResult<T> {
        match result {
            Ok(value) => {
                tracing::info!(resource = R::NOUN, op = ?op, "Mutation succeeded");
                self.notifier.notify(Notification::success(success));
                // fetch_all reports its own failure
                let _ = self.fetch_all().await;
                Ok(value)
            }
            Err(e) => {
                let err = PortalError::request(e, &R::failure_message(op));
                tracing::error!(resource = R::NOUN, op = ?op, error = %err, "Mutation failed");
                self.notifier.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Reject writes that would grant a role above the caller's own
    fn check_role_target(&self, target: &str, op: Operation) -> PortalResult<()> {
        let caller = self.session.role();
        if permissions::can_edit_role(caller, target) {
            return Ok(());
        }
        let message = format!(
            "Insufficient permissions to assign the {} role",
            permissions::role_display_name(target)
        );
        self.deny(op, message)
    }

    /// Reject writes against an entity whose role outranks the caller, and
    /// writes from callers without manage rights
    fn check_existing(&self, id: &R::Id, op: Operation) -> PortalResult<()> {
        let caller = self.session.role();
        if !R::can_manage(caller) {
            return self.deny(op, R::permission_denied_message());
        }
        if let Some(role) = self.find(id).and_then(R::entity_role)
            && !permissions::can_edit_role(caller, role)
        {
            let message = format!("Insufficient permissions to modify this {}", R::NOUN);
            return self.deny(op, message);
        }
        Ok(())
    }

    fn deny(&self, op: Operation, message: String) -> PortalResult<()> {
        tracing::warn!(resource = R::NOUN, op = ?op, role = %self.session.role(), "Write denied");
        self.notifier.notify(Notification::error(message.clone()));
        Err(PortalError::PermissionDenied(message))
    }
}
