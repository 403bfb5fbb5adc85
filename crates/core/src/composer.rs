//! Devis line composition: form state to request payload.
//!
//! The line form collects a superset of inputs; which of them end up in the
//! `addLine` payload is a closed function of the selected [`MachineType`]:
//!
//! | machine type        | populated fields                                   |
//! |---------------------|----------------------------------------------------|
//! | CNC, LASER          | minutes, width, height, dimensionUnit, materialId? |
//! | CHAMPS              | meters                                             |
//! | PLIAGE              | materialId, meters, quantity                       |
//! | PANNEAUX            | quantity                                           |
//! | SERVICE_MAINTENANCE | manual: unitPrice / material: materialId+quantity / service: serviceId+quantity |
//! | VENTE_MATERIAU      | materialId, width, height, dimensionUnit           |
//! | CUSTOM              | quantity, unitPrice, custom fields in description  |
//!
//! `machineType` and `description` are always present; every other field is
//! omitted from the serialized payload when unset. The backend owns pricing
//! and totals; nothing here computes an amount.

use serde::Serialize;

use crate::error::CoreError;
use crate::machine::{DimensionUnit, MachineType, MaintenanceMode};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// One ad-hoc (name, value) pair on a CUSTOM line.
///
/// `id` is a purely local ordinal used by the form to address entries; it is
/// never sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomField {
    pub id: u32,
    pub name: String,
    pub value: String,
}

/// In-memory state of the "add line" form.
///
/// Holds every input the form can collect regardless of the selected machine
/// type; [`build_payload`] picks the relevant subset.
#[derive(Debug, Clone, PartialEq)]
pub struct LineForm {
    pub machine_type: MachineType,
    pub description: String,
    pub minutes: Option<f64>,
    pub meters: Option<f64>,
    pub quantity: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dimension_unit: DimensionUnit,
    pub material_id: Option<DbId>,
    pub service_id: Option<DbId>,
    pub unit_price: Option<f64>,
    pub maintenance_mode: MaintenanceMode,
    pub custom_fields: Vec<CustomField>,
}

impl Default for LineForm {
    fn default() -> Self {
        Self {
            machine_type: MachineType::Cnc,
            description: String::new(),
            minutes: None,
            meters: None,
            quantity: None,
            width: None,
            height: None,
            dimension_unit: DimensionUnit::M,
            material_id: None,
            service_id: None,
            unit_price: None,
            maintenance_mode: MaintenanceMode::Manual,
            custom_fields: Vec::new(),
        }
    }
}

impl LineForm {
    /// Reset to defaults after a successful submission.
    ///
    /// Keeps nothing: the sub-panel closes and the next line starts from a
    /// clean form with `dimension_unit` back to metres.
    pub fn reset(&mut self) {
        *self = LineForm::default();
    }

    /// Append a new empty custom field, assigning the next local ordinal.
    pub fn add_custom_field(&mut self) {
        let id = self.custom_fields.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        self.custom_fields.push(CustomField {
            id,
            name: String::new(),
            value: String::new(),
        });
    }

    /// Remove a custom field by its local ordinal.
    pub fn remove_custom_field(&mut self, id: u32) {
        self.custom_fields.retain(|f| f.id != id);
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Request body for the backend `addLine` endpoint.
///
/// Serialization skips every unset optional, so the wire payload contains
/// exactly the keys the machine-type table allows plus the always-present
/// `machineType` and `description`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDevisLinePayload {
    pub machine_type: MachineType,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_unit: Option<DimensionUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

impl AddDevisLinePayload {
    fn bare(machine_type: MachineType, description: String) -> Self {
        Self {
            machine_type,
            description,
            minutes: None,
            meters: None,
            quantity: None,
            width: None,
            height: None,
            dimension_unit: None,
            material_id: None,
            service_id: None,
            unit_price: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Flatten custom fields into the free-text description.
///
/// Entries with an empty value are skipped; the rest join as `"name: value"`
/// pairs separated by `" | "`. When a base description exists the joined
/// pairs are appended in parentheses, otherwise they stand alone. Stored
/// descriptions already use this exact shape, so the separator and
/// parenthesization must not change.
pub fn compose_description(base: &str, fields: &[CustomField]) -> String {
    let joined = fields
        .iter()
        .filter(|f| !f.value.trim().is_empty())
        .map(|f| format!("{}: {}", f.name, f.value))
        .collect::<Vec<_>>()
        .join(" | ");

    if joined.is_empty() {
        base.to_string()
    } else if base.trim().is_empty() {
        joined
    } else {
        format!("{base} ({joined})")
    }
}

fn require<T: Copy>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Le champ « {field} » est requis")))
}

/// Build the `addLine` payload for the form's machine type.
///
/// Performs required-field checks only; no pricing, no range validation
/// beyond presence. Returns a [`CoreError::Validation`] naming the missing
/// field, in which case nothing was sent and the form state is untouched.
pub fn build_payload(form: &LineForm) -> Result<AddDevisLinePayload, CoreError> {
    let mut payload = AddDevisLinePayload::bare(form.machine_type, form.description.clone());

    match form.machine_type {
        // Machining time plus the dimensions of the worked piece. The
        // material reference is optional (bare machining is priced too).
        MachineType::Cnc | MachineType::Laser => {
            payload.minutes = Some(require(form.minutes, "minutes")?);
            payload.width = Some(require(form.width, "largeur")?);
            payload.height = Some(require(form.height, "hauteur")?);
            payload.dimension_unit = Some(form.dimension_unit);
            payload.material_id = form.material_id;
        }

        MachineType::Champs => {
            payload.meters = Some(require(form.meters, "mètres")?);
        }

        // Folding: machine metres plus the material consumed, as a quantity
        // of material metres.
        MachineType::Pliage => {
            payload.material_id = Some(require(form.material_id, "matériau")?);
            payload.meters = Some(require(form.meters, "mètres")?);
            payload.quantity = Some(require(form.quantity, "quantité")?);
        }

        MachineType::Panneaux => {
            payload.quantity = Some(require(form.quantity, "quantité")?);
        }

        MachineType::ServiceMaintenance => match form.maintenance_mode {
            MaintenanceMode::Manual => {
                payload.unit_price = Some(require(form.unit_price, "prix unitaire")?);
            }
            MaintenanceMode::Material => {
                payload.material_id = Some(require(form.material_id, "matériau")?);
                payload.quantity = Some(require(form.quantity, "quantité")?);
            }
            MaintenanceMode::Service => {
                payload.service_id = Some(require(form.service_id, "service")?);
                payload.quantity = Some(require(form.quantity, "quantité")?);
            }
        },

        MachineType::VenteMateriau => {
            payload.material_id = Some(require(form.material_id, "matériau")?);
            payload.width = Some(require(form.width, "largeur")?);
            payload.height = Some(require(form.height, "hauteur")?);
            payload.dimension_unit = Some(form.dimension_unit);
        }

        MachineType::Custom => {
            payload.quantity = Some(require(form.quantity, "quantité")?);
            payload.unit_price = Some(require(form.unit_price, "prix unitaire")?);
            payload.description = compose_description(&form.description, &form.custom_fields);
        }
    }

    Ok(payload)
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn field(name: &str, value: &str) -> CustomField {
        CustomField {
            id: 0,
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Serialize a payload and collect its JSON keys.
    fn keys(payload: &AddDevisLinePayload) -> Vec<String> {
        let value = serde_json::to_value(payload).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn cnc_payload_contains_exactly_the_table_keys() {
        let form = LineForm {
            machine_type: MachineType::Cnc,
            minutes: Some(45.0),
            width: Some(1.2),
            height: Some(0.8),
            material_id: Some(3),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(
            keys(&payload),
            vec![
                "description",
                "dimensionUnit",
                "height",
                "machineType",
                "materialId",
                "minutes",
                "width",
            ]
        );
    }

    #[test]
    fn laser_material_is_optional() {
        let form = LineForm {
            machine_type: MachineType::Laser,
            minutes: Some(10.0),
            width: Some(0.3),
            height: Some(0.2),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(payload.material_id, None);
        assert_eq!(
            keys(&payload),
            vec![
                "description",
                "dimensionUnit",
                "height",
                "machineType",
                "minutes",
                "width",
            ]
        );
    }

    #[test]
    fn champs_payload_is_meters_only() {
        let form = LineForm {
            machine_type: MachineType::Champs,
            meters: Some(12.5),
            // Stale inputs from a previously selected type must not leak.
            minutes: Some(99.0),
            quantity: Some(4.0),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(keys(&payload), vec!["description", "machineType", "meters"]);
    }

    #[test]
    fn pliage_requires_material_meters_and_quantity() {
        let form = LineForm {
            machine_type: MachineType::Pliage,
            material_id: Some(7),
            meters: Some(3.0),
            quantity: Some(6.0),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(
            keys(&payload),
            vec![
                "description",
                "machineType",
                "materialId",
                "meters",
                "quantity",
            ]
        );
    }

    #[test]
    fn panneaux_payload_is_quantity_only() {
        let form = LineForm {
            machine_type: MachineType::Panneaux,
            quantity: Some(8.0),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(
            keys(&payload),
            vec!["description", "machineType", "quantity"]
        );
    }

    #[test]
    fn maintenance_manual_mode_sends_unit_price() {
        let form = LineForm {
            machine_type: MachineType::ServiceMaintenance,
            maintenance_mode: MaintenanceMode::Manual,
            unit_price: Some(50.0),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(
            keys(&payload),
            vec!["description", "machineType", "unitPrice"]
        );
    }

    #[test]
    fn maintenance_material_mode_sends_material_and_quantity() {
        let form = LineForm {
            machine_type: MachineType::ServiceMaintenance,
            maintenance_mode: MaintenanceMode::Material,
            material_id: Some(2),
            quantity: Some(3.0),
            // unit_price belongs to manual mode and must not leak.
            unit_price: Some(10.0),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(
            keys(&payload),
            vec!["description", "machineType", "materialId", "quantity"]
        );
    }

    #[test]
    fn maintenance_service_mode_sends_service_and_quantity() {
        let form = LineForm {
            machine_type: MachineType::ServiceMaintenance,
            maintenance_mode: MaintenanceMode::Service,
            service_id: Some(5),
            quantity: Some(1.0),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(
            keys(&payload),
            vec!["description", "machineType", "quantity", "serviceId"]
        );
    }

    #[test]
    fn vente_materiau_sends_material_and_dimensions() {
        let form = LineForm {
            machine_type: MachineType::VenteMateriau,
            material_id: Some(4),
            width: Some(2.0),
            height: Some(1.0),
            dimension_unit: DimensionUnit::Cm,
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(
            keys(&payload),
            vec![
                "description",
                "dimensionUnit",
                "height",
                "machineType",
                "materialId",
                "width",
            ]
        );
        assert_eq!(payload.dimension_unit, Some(DimensionUnit::Cm));
    }

    #[test]
    fn custom_sends_quantity_and_unit_price() {
        let form = LineForm {
            machine_type: MachineType::Custom,
            quantity: Some(2.0),
            unit_price: Some(15.0),
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(
            keys(&payload),
            vec!["description", "machineType", "quantity", "unitPrice"]
        );
    }

    #[test]
    fn missing_required_field_is_a_validation_error() {
        let form = LineForm {
            machine_type: MachineType::Cnc,
            width: Some(1.0),
            height: Some(1.0),
            ..Default::default()
        };
        let err = build_payload(&form).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("minutes"));
    }

    #[test]
    fn maintenance_manual_missing_price_is_rejected() {
        let form = LineForm {
            machine_type: MachineType::ServiceMaintenance,
            maintenance_mode: MaintenanceMode::Manual,
            ..Default::default()
        };
        assert_matches!(build_payload(&form), Err(CoreError::Validation(_)));
    }

    // ---- custom field flattening ----

    #[test]
    fn custom_fields_append_to_base_description_in_parentheses() {
        let fields = vec![field("Couleur", "Rouge"), field("Taille", "")];
        assert_eq!(
            compose_description("Gravure", &fields),
            "Gravure (Couleur: Rouge)"
        );
    }

    #[test]
    fn custom_fields_stand_alone_without_base_description() {
        let fields = vec![field("Couleur", "Rouge"), field("Taille", "")];
        assert_eq!(compose_description("", &fields), "Couleur: Rouge");
    }

    #[test]
    fn multiple_custom_fields_join_with_pipe_separator() {
        let fields = vec![field("Couleur", "Rouge"), field("Taille", "XL")];
        assert_eq!(
            compose_description("Gravure", &fields),
            "Gravure (Couleur: Rouge | Taille: XL)"
        );
    }

    #[test]
    fn all_empty_custom_fields_leave_description_untouched() {
        let fields = vec![field("Couleur", ""), field("Taille", "  ")];
        assert_eq!(compose_description("Gravure", &fields), "Gravure");
        assert_eq!(compose_description("", &fields), "");
    }

    #[test]
    fn custom_payload_carries_flattened_description() {
        let form = LineForm {
            machine_type: MachineType::Custom,
            description: "Gravure".to_string(),
            quantity: Some(1.0),
            unit_price: Some(20.0),
            custom_fields: vec![field("Couleur", "Rouge"), field("Taille", "")],
            ..Default::default()
        };
        let payload = build_payload(&form).unwrap();
        assert_eq!(payload.description, "Gravure (Couleur: Rouge)");
    }

    // ---- form state ----

    #[test]
    fn reset_returns_the_form_to_defaults() {
        let mut form = LineForm {
            machine_type: MachineType::Pliage,
            dimension_unit: DimensionUnit::Cm,
            meters: Some(5.0),
            ..Default::default()
        };
        form.add_custom_field();
        form.reset();
        assert_eq!(form, LineForm::default());
        assert_eq!(form.dimension_unit, DimensionUnit::M);
    }

    #[test]
    fn custom_field_ordinals_are_unique_and_stable() {
        let mut form = LineForm::default();
        form.add_custom_field();
        form.add_custom_field();
        form.add_custom_field();
        let ids: Vec<u32> = form.custom_fields.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        form.remove_custom_field(2);
        form.add_custom_field();
        let ids: Vec<u32> = form.custom_fields.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }
}
