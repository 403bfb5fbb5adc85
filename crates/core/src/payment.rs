//! Payments and the caisse aggregates.
//!
//! Payments attach to an invoice or, in the caisse flow, directly to a
//! devis. Every aggregate here (`PaymentStats`, `CaisseSummary`) is computed
//! server-side and merely displayed.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// How a payment was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
    Cheque,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Espèces",
            PaymentMethod::Card => "Carte",
            PaymentMethod::Transfer => "Virement",
            PaymentMethod::Cheque => "Chèque",
        }
    }
}

/// A recorded payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: DbId,
    pub amount: f64,
    pub date: Timestamp,
    pub method: PaymentMethod,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Per-invoice payment aggregates, computed by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStats {
    pub total_paid: f64,
    pub remaining: f64,
    pub percent_paid: f64,
    pub is_paid: bool,
}

/// Caisse-wide totals for a period, computed by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaisseSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_round_trips_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Transfer).unwrap(),
            "\"TRANSFER\""
        );
        let m: PaymentMethod = serde_json::from_str("\"CHEQUE\"").unwrap();
        assert_eq!(m, PaymentMethod::Cheque);
    }

    #[test]
    fn every_method_has_a_label() {
        for m in [
            PaymentMethod::Cash,
            PaymentMethod::Card,
            PaymentMethod::Transfer,
            PaymentMethod::Cheque,
        ] {
            assert!(!m.label().is_empty());
        }
    }

    #[test]
    fn stats_deserialize_from_backend_shape() {
        let stats: PaymentStats = serde_json::from_str(
            r#"{"totalPaid":80.0,"remaining":20.0,"percentPaid":80.0,"isPaid":false}"#,
        )
        .unwrap();
        assert_eq!(stats.remaining, 20.0);
        assert!(!stats.is_paid);
    }
}
