//! Create/edit/delete dialog state
//!
//! ```text
//! Closed ──open_create──▶ Create ─┐
//!        ──open_edit────▶ Edit(e) ├─ cancel / successful submit ─▶ Closed
//!        ──open_delete──▶ Delete(e)┘
//! ```
//!
//! A failed submit leaves the dialog open so the input can be corrected.

use hr_client::HttpClient;
use tokio::sync::oneshot;

use crate::error::{PortalError, PortalResult};
use crate::store::{EntityStore, ManagedResource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState<E> {
    #[default]
    Closed,
    Create,
    Edit(E),
    Delete(E),
}

impl<E> ModalState<E> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn mode(&self) -> Option<ModalMode> {
        match self {
            ModalState::Closed => None,
            ModalState::Create => Some(ModalMode::Create),
            ModalState::Edit(_) => Some(ModalMode::Edit),
            ModalState::Delete(_) => Some(ModalMode::Delete),
        }
    }

    pub fn entity(&self) -> Option<&E> {
        match self {
            ModalState::Edit(e) | ModalState::Delete(e) => Some(e),
            _ => None,
        }
    }
}

/// What the dialog's form hands back on submit
#[derive(Debug)]
pub enum ModalSubmission<R: ManagedResource> {
    Create(R::Create),
    Update(R::Update),
    Delete,
}

impl<R: ManagedResource> ModalSubmission<R> {
    fn mode(&self) -> ModalMode {
        match self {
            ModalSubmission::Create(_) => ModalMode::Create,
            ModalSubmission::Update(_) => ModalMode::Edit,
            ModalSubmission::Delete => ModalMode::Delete,
        }
    }
}

/// Dialog bound to one entity type
#[derive(Debug, Clone)]
pub struct Modal<R: ManagedResource> {
    state: ModalState<R::Entity>,
}

impl<R: ManagedResource> Default for Modal<R> {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }
}

impl<R: ManagedResource> Modal<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState<R::Entity> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn open_create(&mut self) {
        self.state = ModalState::Create;
    }

    pub fn open_edit(&mut self, entity: R::Entity) {
        self.state = ModalState::Edit(entity);
    }

    pub fn open_delete(&mut self, entity: R::Entity) {
        self.state = ModalState::Delete(entity);
    }

    pub fn cancel(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Dispatch `submission` to the store operation matching the open mode.
    /// Closes on success; stays open on failure.
    pub async fn submit<C>(
        &mut self,
        store: &mut EntityStore<C, R>,
        submission: ModalSubmission<R>,
    ) -> PortalResult<()>
    where
        C: HttpClient + Clone,
    {
        let result = match (&self.state, submission) {
            (ModalState::Create, ModalSubmission::Create(data)) => {
                store.create(&data).await.map(|_| ())
            }
            (ModalState::Edit(entity), ModalSubmission::Update(data)) => {
                let id = R::id(entity);
                store.update(&id, &data).await.map(|_| ())
            }
            (ModalState::Delete(entity), ModalSubmission::Delete) => {
                let id = R::id(entity);
                store.delete(&id).await
            }
            (state, submission) => {
                return Err(PortalError::InvalidTransition(format!(
                    "{:?} submission in {:?} dialog",
                    submission.mode(),
                    state.mode()
                )));
            }
        };

        if result.is_ok() {
            self.state = ModalState::Closed;
        }
        result
    }

    /// Ask for confirmation, then delete. A rejected confirmation closes the
    /// dialog without a request.
    pub async fn confirm_delete<C>(
        &mut self,
        store: &mut EntityStore<C, R>,
        decision: Decision,
    ) -> PortalResult<bool>
    where
        C: HttpClient + Clone,
    {
        if !decision.wait().await? {
            self.cancel();
            return Ok(false);
        }
        self.submit(store, ModalSubmission::Delete).await.map(|_| true)
    }
}

// ============================================================================
// Non-blocking confirmation
// ============================================================================

/// Prompt side of a confirmation: shown by the UI, answered once
#[derive(Debug)]
pub struct ConfirmPrompt {
    message: String,
    tx: oneshot::Sender<bool>,
}

impl ConfirmPrompt {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn accept(self) {
        let _ = self.tx.send(true);
    }

    pub fn reject(self) {
        let _ = self.tx.send(false);
    }
}

/// Waiting side of a confirmation
#[derive(Debug)]
pub struct Decision {
    rx: oneshot::Receiver<bool>,
}

impl Decision {
    /// Resolves once the prompt is answered; a dropped prompt is
    /// [`PortalError::Cancelled`]
    pub async fn wait(self) -> PortalResult<bool> {
        self.rx.await.map_err(|_| PortalError::Cancelled)
    }
}

/// Create a linked prompt/decision pair
pub fn confirm(message: impl Into<String>) -> (ConfirmPrompt, Decision) {
    let (tx, rx) = oneshot::channel();
    (
        ConfirmPrompt {
            message: message.into(),
            tx,
        },
        Decision { rx },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_client::Users;

    #[test]
    fn test_state_transitions() {
        let mut modal = Modal::<Users>::new();
        assert!(!modal.is_open());
        modal.open_create();
        assert_eq!(modal.state().mode(), Some(ModalMode::Create));
        assert!(modal.state().entity().is_none());
        modal.cancel();
        assert_eq!(modal.state().mode(), None);
    }

    #[tokio::test]
    async fn test_confirmation_answers() {
        let (prompt, decision) = confirm("Delete alice?");
        assert_eq!(prompt.message(), "Delete alice?");
        prompt.accept();
        assert!(decision.wait().await.unwrap());

        let (prompt, decision) = confirm("Delete bob?");
        prompt.reject();
        assert!(!decision.wait().await.unwrap());

        let (prompt, decision) = confirm("Delete carol?");
        drop(prompt);
        assert!(matches!(decision.wait().await, Err(PortalError::Cancelled)));
    }
}
