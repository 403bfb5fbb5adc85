//! Machine types and the input dimensions they price against.
//!
//! Every devis line is tagged with a [`MachineType`] that selects which
//! pricing formula the backend applies and which inputs the line form
//! collects. The per-type input schema is closed; see
//! [`composer`](crate::composer) for the mapping.

use serde::{Deserialize, Serialize};

/// Pricing family of a devis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineType {
    #[serde(rename = "CNC")]
    Cnc,
    #[serde(rename = "LASER")]
    Laser,
    #[serde(rename = "CHAMPS")]
    Champs,
    #[serde(rename = "PANNEAUX")]
    Panneaux,
    #[serde(rename = "SERVICE_MAINTENANCE")]
    ServiceMaintenance,
    #[serde(rename = "VENTE_MATERIAU")]
    VenteMateriau,
    #[serde(rename = "PLIAGE")]
    Pliage,
    #[serde(rename = "CUSTOM")]
    Custom,
}

impl MachineType {
    /// All machine types, in the order the line form offers them.
    pub const ALL: [MachineType; 8] = [
        MachineType::Cnc,
        MachineType::Laser,
        MachineType::Champs,
        MachineType::Panneaux,
        MachineType::ServiceMaintenance,
        MachineType::VenteMateriau,
        MachineType::Pliage,
        MachineType::Custom,
    ];

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            MachineType::Cnc => "CNC",
            MachineType::Laser => "Laser",
            MachineType::Champs => "Champs",
            MachineType::Panneaux => "Panneaux",
            MachineType::ServiceMaintenance => "Service / Maintenance",
            MachineType::VenteMateriau => "Vente matériau",
            MachineType::Pliage => "Pliage",
            MachineType::Custom => "Personnalisé",
        }
    }
}

/// Unit for the width/height dimension inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionUnit {
    /// Metres (form default).
    #[default]
    #[serde(rename = "m")]
    M,
    /// Centimetres.
    #[serde(rename = "cm")]
    Cm,
}

/// Input sub-mode of the SERVICE_MAINTENANCE line form.
///
/// Selects which of the three pricing inputs the form collects; the mode
/// itself is never sent to the backend, only the fields it selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaintenanceMode {
    /// Free-form price entered by hand.
    #[default]
    Manual,
    /// Priced from a material reference and a quantity.
    Material,
    /// Priced from a fixed service reference and a quantity.
    Service,
}
