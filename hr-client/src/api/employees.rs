//! Employee endpoints beyond CRUD

use serde_json::Value;
use shared::models::Employee;
use shared::response::ListEnvelope;

use super::{Employees, Resource, ResourceApi};
use crate::{ClientResult, HttpClient};

pub type EmployeeApi<C> = ResourceApi<C, Employees>;

impl<C: HttpClient> ResourceApi<C, Employees> {
    /// Employees not linked to any user account
    pub async fn unassigned(&self) -> ClientResult<Vec<Employee>> {
        let body: Value = self.http().get("api/employees/unassigned").await?;
        let envelope = ListEnvelope::<Employee>::decode(body, Employees::COLLECTION_KEY)?;
        Ok(envelope.into_items())
    }
}
