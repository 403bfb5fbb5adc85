//! Devis endpoints.
//!
//! Mutations return the affected entity where the backend provides it, but
//! the UI treats every mutation as fire-and-forget and refetches the parent
//! devis with [`get_devis`](ApiClient::get_devis) afterwards: the backend's
//! recomputed totals are the only truth worth rendering.

use atelier_core::composer::AddDevisLinePayload;
use atelier_core::devis::{Devis, DevisLine};
use atelier_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// GET /devis
    pub async fn list_devis(&self) -> Result<Vec<Devis>, ApiError> {
        self.get_json("/devis").await
    }

    /// GET /devis/{id}
    pub async fn get_devis(&self, id: DbId) -> Result<Devis, ApiError> {
        self.get_json(&format!("/devis/{id}")).await
    }

    /// POST /devis — create an empty draft for a client.
    pub async fn create_devis(&self, client_id: DbId) -> Result<Devis, ApiError> {
        self.post_json("/devis", &serde_json::json!({ "clientId": client_id }))
            .await
    }

    /// DELETE /devis/{id}
    pub async fn delete_devis(&self, id: DbId) -> Result<(), ApiError> {
        self.delete(&format!("/devis/{id}")).await
    }

    /// POST /devis/{id}/lines — add a composed line.
    ///
    /// The payload is produced by
    /// [`composer::build_payload`](atelier_core::composer::build_payload);
    /// the server prices the line and recomputes the devis total.
    pub async fn add_devis_line(
        &self,
        devis_id: DbId,
        payload: &AddDevisLinePayload,
    ) -> Result<DevisLine, ApiError> {
        self.post_json(&format!("/devis/{devis_id}/lines"), payload)
            .await
    }

    /// DELETE /devis/{id}/lines/{line_id}
    pub async fn remove_devis_line(&self, devis_id: DbId, line_id: DbId) -> Result<(), ApiError> {
        self.delete(&format!("/devis/{devis_id}/lines/{line_id}"))
            .await
    }

    /// POST /devis/{id}/services — attach a fixed service.
    pub async fn add_devis_service(&self, devis_id: DbId, service_id: DbId) -> Result<(), ApiError> {
        self.post_ok(
            &format!("/devis/{devis_id}/services"),
            &serde_json::json!({ "serviceId": service_id }),
        )
        .await
    }

    /// DELETE /devis/{id}/services/{service_id}
    pub async fn remove_devis_service(
        &self,
        devis_id: DbId,
        service_id: DbId,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/devis/{devis_id}/services/{service_id}"))
            .await
    }

    /// POST /devis/{id}/validate — DRAFT -> VALIDATED.
    pub async fn validate_devis(&self, id: DbId) -> Result<Devis, ApiError> {
        self.post_empty(&format!("/devis/{id}/validate")).await
    }

    /// POST /devis/{id}/cancel — DRAFT -> CANCELLED.
    pub async fn cancel_devis(&self, id: DbId) -> Result<Devis, ApiError> {
        self.post_empty(&format!("/devis/{id}/cancel")).await
    }
}
