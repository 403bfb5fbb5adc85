//! Devis (quote) entities as returned by the backend.
//!
//! All fields are server truth: totals, references and statuses are computed
//! and assigned by the backend, the client only displays them and derives UI
//! affordances from them.

use serde::{Deserialize, Serialize};

use crate::directory::Client;
use crate::invoicing::InvoiceSummary;
use crate::machine::{DimensionUnit, MachineType};
use crate::status::{available_actions, DevisAction, DevisStatus};
use crate::types::{DbId, Timestamp};

/// A quote, the primary workflow document prior to invoicing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Devis {
    pub id: DbId,
    /// Human-readable reference assigned by the backend (e.g. `DEV-2026-0042`).
    pub reference: String,
    pub status: DevisStatus,
    /// Computed by the backend; never derived from lines client-side.
    pub total_amount: f64,
    pub client_id: DbId,
    #[serde(default)]
    pub client: Option<Client>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub lines: Vec<DevisLine>,
    #[serde(default)]
    pub services: Vec<DevisServiceItem>,
    /// Present once the devis has been rolled into an invoice.
    #[serde(default)]
    pub invoice: Option<InvoiceSummary>,
}

impl Devis {
    /// Whether the line/service editing affordances should be offered.
    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }

    /// The action set the detail view renders for this devis.
    pub fn actions(&self) -> Vec<DevisAction> {
        available_actions(self.status, self.invoice.is_some())
    }

    /// Whether this devis can still be picked up by the invoice composer.
    pub fn is_invoiceable(&self) -> bool {
        self.status == DevisStatus::Validated && self.invoice.is_none()
    }
}

/// One priced line on a devis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevisLine {
    pub id: DbId,
    pub machine_type: MachineType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub minutes: Option<f64>,
    #[serde(default)]
    pub meters: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub dimension_unit: Option<DimensionUnit>,
    #[serde(default)]
    pub material_id: Option<DbId>,
    #[serde(default)]
    pub service_id: Option<DbId>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    /// Computed by the backend from the machine type's pricing formula.
    pub line_total: f64,
}

/// A fixed-price service attached to a devis, with the price captured at
/// the time it was added.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevisServiceItem {
    pub id: DbId,
    pub service_id: DbId,
    #[serde(default)]
    pub name: Option<String>,
    pub price: f64,
}
