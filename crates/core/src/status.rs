//! Devis lifecycle statuses and the permitted transition set.
//!
//! The lifecycle is a strict forward machine with one branch point:
//!
//! ```text
//! DRAFT --validate--> VALIDATED --(invoice creation)--> INVOICED
//! DRAFT --cancel----> CANCELLED
//! ```
//!
//! `INVOICED` is only ever reached as a side effect of creating an invoice
//! from one or more validated devis; there is no direct transition call for
//! it. `VALIDATED` and `CANCELLED` have no further client-triggered
//! transitions (no un-cancel, no revert to draft). The backend re-enforces
//! all of this independently; everything here only drives which affordances
//! the client offers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// DevisStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a devis, as stored and enforced by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DevisStatus {
    Draft,
    Validated,
    Invoiced,
    Cancelled,
}

impl DevisStatus {
    /// Wire name, as the backend serializes it.
    pub fn as_str(self) -> &'static str {
        match self {
            DevisStatus::Draft => "DRAFT",
            DevisStatus::Validated => "VALIDATED",
            DevisStatus::Invoiced => "INVOICED",
            DevisStatus::Cancelled => "CANCELLED",
        }
    }

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            DevisStatus::Draft => "Brouillon",
            DevisStatus::Validated => "Validé",
            DevisStatus::Invoiced => "Facturé",
            DevisStatus::Cancelled => "Annulé",
        }
    }

    /// Badge color for status chips.
    pub fn badge_color(self) -> &'static str {
        match self {
            DevisStatus::Draft => "gray",
            DevisStatus::Validated => "green",
            DevisStatus::Invoiced => "blue",
            DevisStatus::Cancelled => "red",
        }
    }

    /// Whether `self -> next` is in the permitted transition set.
    pub fn can_transition_to(self, next: DevisStatus) -> bool {
        matches!(
            (self, next),
            (DevisStatus::Draft, DevisStatus::Validated)
                | (DevisStatus::Draft, DevisStatus::Cancelled)
                | (DevisStatus::Validated, DevisStatus::Invoiced)
        )
    }

    /// Lines and services are mutable only while the devis is a draft.
    pub fn is_editable(self) -> bool {
        matches!(self, DevisStatus::Draft)
    }
}

impl fmt::Display for DevisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transitions and affordances
// ---------------------------------------------------------------------------

/// The two transitions a user can trigger directly from the devis view.
///
/// Invoicing is deliberately absent: it happens through the batch invoice
/// composer, never as a direct status call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevisTransition {
    Validate,
    Cancel,
}

impl DevisTransition {
    /// The status this transition moves a devis into.
    pub fn target(self) -> DevisStatus {
        match self {
            DevisTransition::Validate => DevisStatus::Validated,
            DevisTransition::Cancel => DevisStatus::Cancelled,
        }
    }
}

/// Check that `transition` may be applied to a devis currently in `from`.
///
/// Returns the target status on success. The backend performs the actual
/// state change; this gate only prevents the client from issuing calls that
/// are known to be invalid.
pub fn check_transition(
    from: DevisStatus,
    transition: DevisTransition,
) -> Result<DevisStatus, CoreError> {
    let to = transition.target();
    if from.can_transition_to(to) {
        Ok(to)
    } else {
        Err(CoreError::Transition { from, to })
    }
}

/// UI affordances available on a devis detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevisAction {
    Validate,
    Cancel,
    AddLine,
    RemoveLine,
    ToggleService,
    Delete,
    DownloadInvoicePdf,
}

/// Derive the action set from the current status and invoice presence.
///
/// Exhaustive over [`DevisStatus`] so a new status cannot silently fall
/// through to an empty affordance set.
pub fn available_actions(status: DevisStatus, has_invoice: bool) -> Vec<DevisAction> {
    let mut actions = match status {
        DevisStatus::Draft => vec![
            DevisAction::Validate,
            DevisAction::Cancel,
            DevisAction::AddLine,
            DevisAction::RemoveLine,
            DevisAction::ToggleService,
            DevisAction::Delete,
        ],
        DevisStatus::Validated => Vec::new(),
        DevisStatus::Invoiced => Vec::new(),
        DevisStatus::Cancelled => Vec::new(),
    };

    if has_invoice {
        actions.push(DevisAction::DownloadInvoicePdf);
    }

    actions
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn draft_can_validate_and_cancel() {
        assert!(DevisStatus::Draft.can_transition_to(DevisStatus::Validated));
        assert!(DevisStatus::Draft.can_transition_to(DevisStatus::Cancelled));
    }

    #[test]
    fn validated_can_only_become_invoiced() {
        assert!(DevisStatus::Validated.can_transition_to(DevisStatus::Invoiced));
        assert!(!DevisStatus::Validated.can_transition_to(DevisStatus::Draft));
        assert!(!DevisStatus::Validated.can_transition_to(DevisStatus::Cancelled));
    }

    #[test]
    fn terminal_statuses_have_no_transitions() {
        for next in [
            DevisStatus::Draft,
            DevisStatus::Validated,
            DevisStatus::Invoiced,
            DevisStatus::Cancelled,
        ] {
            assert!(!DevisStatus::Invoiced.can_transition_to(next));
            assert!(!DevisStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn check_transition_accepts_draft_validate() {
        let to = check_transition(DevisStatus::Draft, DevisTransition::Validate).unwrap();
        assert_eq!(to, DevisStatus::Validated);
    }

    #[test]
    fn check_transition_rejects_validated_cancel() {
        let err = check_transition(DevisStatus::Validated, DevisTransition::Cancel).unwrap_err();
        assert_matches!(
            err,
            CoreError::Transition {
                from: DevisStatus::Validated,
                to: DevisStatus::Cancelled,
            }
        );
    }

    #[test]
    fn only_draft_is_editable() {
        assert!(DevisStatus::Draft.is_editable());
        assert!(!DevisStatus::Validated.is_editable());
        assert!(!DevisStatus::Invoiced.is_editable());
        assert!(!DevisStatus::Cancelled.is_editable());
    }

    #[test]
    fn draft_shows_transition_actions_and_no_invoice_panel() {
        let actions = available_actions(DevisStatus::Draft, false);
        assert!(actions.contains(&DevisAction::Validate));
        assert!(actions.contains(&DevisAction::Cancel));
        assert!(actions.contains(&DevisAction::AddLine));
        assert!(!actions.contains(&DevisAction::DownloadInvoicePdf));
    }

    #[test]
    fn validated_without_invoice_shows_nothing() {
        let actions = available_actions(DevisStatus::Validated, false);
        assert!(actions.is_empty());
    }

    #[test]
    fn invoiced_with_invoice_shows_pdf_download_only() {
        let actions = available_actions(DevisStatus::Invoiced, true);
        assert_eq!(actions, vec![DevisAction::DownloadInvoicePdf]);
    }

    #[test]
    fn status_serializes_to_wire_names() {
        let json = serde_json::to_string(&DevisStatus::Validated).unwrap();
        assert_eq!(json, "\"VALIDATED\"");
        let back: DevisStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(back, DevisStatus::Cancelled);
    }

    #[test]
    fn every_status_has_a_label_and_badge() {
        for status in [
            DevisStatus::Draft,
            DevisStatus::Validated,
            DevisStatus::Invoiced,
            DevisStatus::Cancelled,
        ] {
            assert!(!status.label().is_empty());
            assert!(!status.badge_color().is_empty());
        }
    }
}
