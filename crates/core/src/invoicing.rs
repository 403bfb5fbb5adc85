//! Invoices and the batch invoice composer.
//!
//! An invoice is created from one or more validated, not-yet-invoiced devis
//! belonging to a single client. The composer groups eligible devis by
//! client, tracks a multi-selection with per-client tri-state checkboxes,
//! and produces the batch creation payload. The single-client rule is the
//! one real domain invariant checked client-side; the backend re-enforces
//! it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::devis::Devis;
use crate::directory::Client;
use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// An invoice generated from one or more devis of a single client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: DbId,
    /// Human-readable reference assigned by the backend (e.g. `FAC-2026-0007`).
    pub reference: String,
    pub total_amount: f64,
    #[serde(default)]
    pub client: Option<Client>,
    /// The devis this invoice was generated from.
    #[serde(default)]
    pub devis: Vec<Devis>,
}

/// The invoice fields embedded in a devis payload once it is invoiced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub id: DbId,
    pub reference: String,
    pub total_amount: f64,
}

/// Request body for the batch "create invoice from devis" endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoicePayload {
    pub devis_ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Eligible devis of one client, in listing order.
#[derive(Debug)]
pub struct ClientGroup<'a> {
    pub client_id: DbId,
    pub client_name: String,
    pub devis: Vec<&'a Devis>,
}

/// Group the invoiceable devis (VALIDATED, no invoice) by client.
///
/// Groups appear in first-encounter order so the composer renders stably
/// across refetches that preserve backend ordering.
pub fn group_invoiceable(devis: &[Devis]) -> Vec<ClientGroup<'_>> {
    let mut groups: Vec<ClientGroup<'_>> = Vec::new();

    for d in devis.iter().filter(|d| d.is_invoiceable()) {
        match groups.iter().position(|g| g.client_id == d.client_id) {
            Some(i) => groups[i].devis.push(d),
            None => groups.push(ClientGroup {
                client_id: d.client_id,
                client_name: d
                    .client
                    .as_ref()
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| format!("Client {}", d.client_id)),
                devis: vec![d],
            }),
        }
    }

    groups
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// State of a per-client "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Unchecked,
    /// Some but not all of the client's devis are selected.
    Indeterminate,
    Checked,
}

/// Multi-selection of devis ids in the invoice composer.
#[derive(Debug, Default)]
pub struct InvoiceSelection {
    ids: BTreeSet<DbId>,
}

impl InvoiceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_selected(&self, devis_id: DbId) -> bool {
        self.ids.contains(&devis_id)
    }

    /// Toggle a single devis checkbox.
    pub fn toggle(&mut self, devis_id: DbId) {
        if !self.ids.remove(&devis_id) {
            self.ids.insert(devis_id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Tri-state of the group checkbox for one client.
    pub fn client_state(&self, group: &ClientGroup<'_>) -> SelectionState {
        let selected = group
            .devis
            .iter()
            .filter(|d| self.ids.contains(&d.id))
            .count();

        if selected == 0 {
            SelectionState::Unchecked
        } else if selected == group.devis.len() {
            SelectionState::Checked
        } else {
            SelectionState::Indeterminate
        }
    }

    /// Click the group checkbox.
    ///
    /// A partially selected group always completes to fully selected (the
    /// click never deselects the already-chosen devis); only a fully
    /// selected group clears.
    pub fn toggle_client(&mut self, group: &ClientGroup<'_>) {
        match self.client_state(group) {
            SelectionState::Checked => {
                for d in &group.devis {
                    self.ids.remove(&d.id);
                }
            }
            SelectionState::Unchecked | SelectionState::Indeterminate => {
                for d in &group.devis {
                    self.ids.insert(d.id);
                }
            }
        }
    }

    /// Build the batch creation payload from the current selection.
    ///
    /// Fails without any API call if the selection is empty or spans more
    /// than one client.
    pub fn build_payload(&self, all: &[Devis]) -> Result<CreateInvoicePayload, CoreError> {
        if self.ids.is_empty() {
            return Err(CoreError::Validation(
                "Sélectionnez au moins un devis".to_string(),
            ));
        }

        let selected: Vec<&Devis> = all.iter().filter(|d| self.ids.contains(&d.id)).collect();

        let clients: BTreeSet<DbId> = selected.iter().map(|d| d.client_id).collect();
        if clients.len() != 1 {
            return Err(CoreError::Validation(
                "Les devis sélectionnés doivent appartenir au même client".to_string(),
            ));
        }

        Ok(CreateInvoicePayload {
            devis_ids: selected.iter().map(|d| d.id).collect(),
        })
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
