//! Clients, employees, materials and fixed services endpoints.
//!
//! Plain CRUD. Deletion failures (referenced client, referenced category)
//! come back as the server's rejection reason in [`ApiError::Api`] and are
//! surfaced verbatim; nothing is checked locally.

use atelier_core::directory::{Client, Employee, Material};
use atelier_core::forms::{ClientForm, EmployeeForm};
use atelier_core::services::FixedService;
use atelier_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    // ---- clients ----

    /// GET /clients
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get_json("/clients").await
    }

    /// POST /clients
    pub async fn create_client(&self, form: &ClientForm) -> Result<Client, ApiError> {
        self.post_json("/clients", form).await
    }

    /// PUT /clients/{id}
    pub async fn update_client(&self, id: DbId, form: &ClientForm) -> Result<Client, ApiError> {
        self.put_json(&format!("/clients/{id}"), form).await
    }

    /// DELETE /clients/{id}
    pub async fn delete_client(&self, id: DbId) -> Result<(), ApiError> {
        self.delete(&format!("/clients/{id}")).await
    }

    // ---- employees ----

    /// GET /employees
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees").await
    }

    /// POST /employees
    pub async fn create_employee(&self, form: &EmployeeForm) -> Result<Employee, ApiError> {
        self.post_json("/employees", form).await
    }

    /// PUT /employees/{id}
    pub async fn update_employee(
        &self,
        id: DbId,
        form: &EmployeeForm,
    ) -> Result<Employee, ApiError> {
        self.put_json(&format!("/employees/{id}"), form).await
    }

    /// DELETE /employees/{id}
    pub async fn delete_employee(&self, id: DbId) -> Result<(), ApiError> {
        self.delete(&format!("/employees/{id}")).await
    }

    // ---- materials and fixed services (read-only reference data) ----

    /// GET /materials
    pub async fn list_materials(&self) -> Result<Vec<Material>, ApiError> {
        self.get_json("/materials").await
    }

    /// GET /services
    pub async fn list_services(&self) -> Result<Vec<FixedService>, ApiError> {
        self.get_json("/services").await
    }
}
