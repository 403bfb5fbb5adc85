//! Expense ledger entries and their categories.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A user-managed expense category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub id: DbId,
    pub name: String,
}

/// A categorized expense entry.
///
/// Independent of the devis/invoice graph; it only joins them inside the
/// backend's aggregate financial stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: DbId,
    pub category_id: DbId,
    #[serde(default)]
    pub category: Option<ExpenseCategory>,
    pub label: String,
    pub amount: f64,
    pub date: Timestamp,
    #[serde(default)]
    pub notes: Option<String>,
}
