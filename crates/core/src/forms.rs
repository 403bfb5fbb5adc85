//! Input forms and their shape checks.
//!
//! Validation here is strictly "field is required / well-formed": the one
//! domain invariant checked client-side lives in the invoice composer
//! ([`crate::invoicing`]). Amounts, totals and referential rules belong to
//! the backend.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::payment::PaymentMethod;
use crate::types::{DbId, Timestamp};

/// Create/edit form for a client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientForm {
    #[validate(length(min = 1, message = "Le nom est requis"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(email(message = "Adresse e-mail invalide"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Create/edit form for an employee.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    #[validate(length(min = 1, message = "Le nom est requis"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Create/edit form for an expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    pub category_id: DbId,
    #[validate(length(min = 1, message = "Le libellé est requis"))]
    pub label: String,
    #[validate(range(min = 0.0, message = "Le montant doit être positif"))]
    pub amount: f64,
    pub date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Form for recording a payment against an invoice or a devis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    #[validate(range(min = 0.01, message = "Le montant doit être positif"))]
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Adresse e-mail invalide"))]
    pub email: String,
    #[validate(length(min = 1, message = "Le mot de passe est requis"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_form_requires_a_name() {
        let form = ClientForm {
            name: String::new(),
            phone: None,
            email: None,
            address: None,
            notes: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn client_form_rejects_malformed_email() {
        let form = ClientForm {
            name: "Atelier Dupont".to_string(),
            phone: None,
            email: Some("not-an-email".to_string()),
            address: None,
            notes: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn client_form_accepts_missing_optionals() {
        let form = ClientForm {
            name: "Atelier Dupont".to_string(),
            phone: None,
            email: None,
            address: None,
            notes: None,
        };
        assert!(form.validate().is_ok());
        // Unset optionals are omitted from the payload entirely.
        let json = serde_json::to_string(&form).unwrap();
        assert_eq!(json, r#"{"name":"Atelier Dupont"}"#);
    }

    #[test]
    fn payment_form_rejects_zero_amount() {
        let form = PaymentForm {
            amount: 0.0,
            method: PaymentMethod::Cash,
            date: None,
            reference: None,
            notes: None,
        };
        assert!(form.validate().is_err());
    }
}
