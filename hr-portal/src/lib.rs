//! HR Portal - client-side data and permission layer
//!
//! Everything a CRUD screen of the admin front ends needs below the view:
//!
//! - [`store`]: canonical entity lists with refetch-after-mutation
//! - [`list`]: search, filters, sort and view mode over a loaded list
//! - [`modal`]: create/edit/delete dialog state and confirmation
//! - [`form`]: client-side validation producing request bodies
//! - [`notify`]: one user-facing notification per operation
//!
//! Role checks route through [`shared::permissions`].

pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod modal;
pub mod nav;
pub mod notify;
pub mod profile;
pub mod store;

pub use config::{DashboardVariant, PortalConfig};
pub use error::{FieldErrors, PortalError, PortalResult};
pub use modal::{ConfirmPrompt, Decision, Modal, ModalMode, ModalState, ModalSubmission, confirm};
pub use notify::{Notification, NotificationLevel, NotificationLog, Notifier};
pub use store::{EntityStore, LoadState, ManagedResource, Operation};

use hr_client::{Employees, Users};

/// Store of user accounts
pub type UserStore<C> = EntityStore<C, Users>;
/// Store of employee records
pub type EmployeeStore<C> = EntityStore<C, Employees>;
