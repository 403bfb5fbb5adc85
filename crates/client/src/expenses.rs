//! Expense ledger endpoints: categories and entries.

use atelier_core::expense::{Expense, ExpenseCategory};
use atelier_core::forms::ExpenseForm;
use atelier_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// GET /expense-categories
    pub async fn list_expense_categories(&self) -> Result<Vec<ExpenseCategory>, ApiError> {
        self.get_json("/expense-categories").await
    }

    /// POST /expense-categories
    pub async fn create_expense_category(&self, name: &str) -> Result<ExpenseCategory, ApiError> {
        self.post_json("/expense-categories", &serde_json::json!({ "name": name }))
            .await
    }

    /// DELETE /expense-categories/{id}
    ///
    /// Rejected server-side while expenses still reference the category.
    pub async fn delete_expense_category(&self, id: DbId) -> Result<(), ApiError> {
        self.delete(&format!("/expense-categories/{id}")).await
    }

    /// GET /expenses
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get_json("/expenses").await
    }

    /// POST /expenses
    pub async fn create_expense(&self, form: &ExpenseForm) -> Result<Expense, ApiError> {
        self.post_json("/expenses", form).await
    }

    /// PUT /expenses/{id}
    pub async fn update_expense(&self, id: DbId, form: &ExpenseForm) -> Result<Expense, ApiError> {
        self.put_json(&format!("/expenses/{id}"), form).await
    }

    /// DELETE /expenses/{id}
    pub async fn delete_expense(&self, id: DbId) -> Result<(), ApiError> {
        self.delete(&format!("/expenses/{id}")).await
    }
}
