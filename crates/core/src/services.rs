//! Fixed-price services and the devis service toggle.
//!
//! Services attach to a devis as a whole (one per service, price captured at
//! attach time). The toggle is a pure membership decision; the backend owns
//! the actual association.

use crate::devis::Devis;
use crate::error::CoreError;
use crate::types::DbId;

use serde::{Deserialize, Serialize};

/// A fixed-price service offered by the workshop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedService {
    pub id: DbId,
    pub name: String,
    pub price: f64,
    pub is_active: bool,
}

/// The request the toggle resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceToggle {
    /// The service is not on the devis yet: add it.
    Add(DbId),
    /// The service is already on the devis: remove it.
    Remove(DbId),
}

/// Only active services are offered for toggling.
pub fn offered_services(services: &[FixedService]) -> impl Iterator<Item = &FixedService> {
    services.iter().filter(|s| s.is_active)
}

/// Whether the devis currently carries the given service.
pub fn is_selected(devis: &Devis, service_id: DbId) -> bool {
    devis.services.iter().any(|s| s.service_id == service_id)
}

/// Decide whether toggling `service` on `devis` means adding or removing it.
///
/// Rejected once the devis has left DRAFT; the backend re-checks this
/// independently.
pub fn resolve_toggle(devis: &Devis, service: &FixedService) -> Result<ServiceToggle, CoreError> {
    if !devis.is_editable() {
        return Err(CoreError::Validation(
            "Le devis n'est plus modifiable".to_string(),
        ));
    }

    if is_selected(devis, service.id) {
        Ok(ServiceToggle::Remove(service.id))
    } else {
        Ok(ServiceToggle::Add(service.id))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::devis::DevisServiceItem;
    use crate::status::DevisStatus;

    fn service(id: DbId, active: bool) -> FixedService {
        FixedService {
            id,
            name: format!("Service {id}"),
            price: 10.0,
            is_active: active,
        }
    }

    fn devis_with_services(status: DevisStatus, service_ids: &[DbId]) -> Devis {
        Devis {
            id: 1,
            reference: "DEV-2026-0001".to_string(),
            status,
            total_amount: 0.0,
            client_id: 1,
            client: None,
            created_by: None,
            created_at: None,
            lines: Vec::new(),
            services: service_ids
                .iter()
                .map(|&service_id| DevisServiceItem {
                    id: service_id * 100,
                    service_id,
                    name: None,
                    price: 10.0,
                })
                .collect(),
            invoice: None,
        }
    }

    #[test]
    fn inactive_services_are_not_offered() {
        let services = vec![service(1, true), service(2, false), service(3, true)];
        let offered: Vec<DbId> = offered_services(&services).map(|s| s.id).collect();
        assert_eq!(offered, vec![1, 3]);
    }

    #[test]
    fn toggle_adds_when_absent() {
        let devis = devis_with_services(DevisStatus::Draft, &[2]);
        let toggle = resolve_toggle(&devis, &service(1, true)).unwrap();
        assert_eq!(toggle, ServiceToggle::Add(1));
    }

    #[test]
    fn toggle_removes_when_present() {
        let devis = devis_with_services(DevisStatus::Draft, &[1, 2]);
        let toggle = resolve_toggle(&devis, &service(2, true)).unwrap();
        assert_eq!(toggle, ServiceToggle::Remove(2));
    }

    #[test]
    fn toggle_is_rejected_outside_draft() {
        for status in [
            DevisStatus::Validated,
            DevisStatus::Invoiced,
            DevisStatus::Cancelled,
        ] {
            let devis = devis_with_services(status, &[]);
            assert_matches!(
                resolve_toggle(&devis, &service(1, true)),
                Err(CoreError::Validation(_))
            );
        }
    }
}
