//! Financial closures: append-only period snapshots.
//!
//! A closure freezes the income/expense totals of a period into an audit
//! record. Closures are created by an explicit admin action and are never
//! mutated or deleted from the client.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// What a closure covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClosureScope {
    /// All income and expenses of the period.
    Global,
    /// The till ledger only.
    Caisse,
}

impl ClosureScope {
    pub fn label(self) -> &'static str {
        match self {
            ClosureScope::Global => "Global",
            ClosureScope::Caisse => "Caisse",
        }
    }
}

/// A period-close audit snapshot, computed and stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialClosure {
    pub id: DbId,
    pub period_start: Timestamp,
    pub period_end: Timestamp,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub scope: ClosureScope,
}

/// Request body for creating a closure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClosurePayload {
    pub period_start: Timestamp,
    pub period_end: Timestamp,
    pub scope: ClosureScope,
}
