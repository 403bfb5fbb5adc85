//! Notification snapshot endpoints.
//!
//! The REST snapshot is the only gap-filling mechanism: socket delivery is
//! at-most-once, so anything missed while offline only reappears through
//! [`list_notifications`](ApiClient::list_notifications).

use atelier_core::notification::Notification;
use atelier_core::types::DbId;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Deserialize)]
struct UnreadCount {
    count: i64,
}

impl ApiClient {
    /// GET /notifications — newest first.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get_json("/notifications").await
    }

    /// POST /notifications/{id}/read
    pub async fn mark_notification_read(&self, id: DbId) -> Result<(), ApiError> {
        self.post_ok(
            &format!("/notifications/{id}/read"),
            &serde_json::json!({}),
        )
        .await
    }

    /// POST /notifications/read-all
    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.post_ok("/notifications/read-all", &serde_json::json!({}))
            .await
    }

    /// GET /notifications/unread-count
    pub async fn unread_notification_count(&self) -> Result<i64, ApiError> {
        let data: UnreadCount = self.get_json("/notifications/unread-count").await?;
        Ok(data.count)
    }
}
