//! Notification entities shared by the REST snapshot and the live socket.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Kind of a notification, driving its icon and accent color.
///
/// The backend may grow new kinds ahead of this client; unknown values fall
/// back to [`NotificationKind::Other`] instead of failing the whole feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    DevisCreated,
    DevisValidated,
    InvoiceCreated,
    PaymentReceived,
    ClosureCreated,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::DevisCreated => "Devis créé",
            NotificationKind::DevisValidated => "Devis validé",
            NotificationKind::InvoiceCreated => "Facture créée",
            NotificationKind::PaymentReceived => "Paiement reçu",
            NotificationKind::ClosureCreated => "Clôture créée",
            NotificationKind::Other => "Notification",
        }
    }

    /// Icon name for the notification dropdown.
    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::DevisCreated => "file-plus",
            NotificationKind::DevisValidated => "check-circle",
            NotificationKind::InvoiceCreated => "file-text",
            NotificationKind::PaymentReceived => "credit-card",
            NotificationKind::ClosureCreated => "archive",
            NotificationKind::Other => "bell",
        }
    }
}

/// A single notification entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: Timestamp,
    pub is_read: bool,
    #[serde(default)]
    pub triggered_by: Option<String>,
}
