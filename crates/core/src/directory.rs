//! Reference data: clients, employees and materials.
//!
//! Plain CRUD resources owned by the backend. Deletion of a referenced
//! client is rejected server-side; the client surfaces the rejection reason
//! verbatim and performs no local referential checks.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A customer of the workshop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A workshop employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A material referenced by devis lines.
///
/// Pricing fields are display-only; the backend applies them when pricing a
/// line, the client never multiplies anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub price_per_square_meter: Option<f64>,
    #[serde(default)]
    pub price_per_meter: Option<f64>,
    #[serde(default)]
    pub price_per_unit: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_deserializes_with_missing_optionals() {
        let c: Client = serde_json::from_str(r#"{"id":1,"name":"Atelier Dupont"}"#).unwrap();
        assert_eq!(c.name, "Atelier Dupont");
        assert!(c.email.is_none());
    }

    #[test]
    fn material_pricing_fields_are_optional() {
        let m: Material =
            serde_json::from_str(r#"{"id":2,"name":"Plexiglas 3mm","pricePerSquareMeter":42.0}"#)
                .unwrap();
        assert_eq!(m.price_per_square_meter, Some(42.0));
        assert!(m.price_per_meter.is_none());
    }
}
