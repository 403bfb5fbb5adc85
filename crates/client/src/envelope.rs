//! The backend's uniform response envelope.
//!
//! Every JSON endpoint answers `{ "success": bool, "data"?: T, "error"?:
//! string }`, on error statuses included. [`ApiEnvelope::into_result`]
//! collapses that into a `Result`, preferring the server's `error` message
//! over the generic fallback.

use serde::Deserialize;

use crate::error::{ApiError, GENERIC_ERROR};

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// `status` is the HTTP status of the response, used only to label the
    /// resulting [`ApiError::Api`].
    pub fn into_result(self, status: u16) -> Result<T, ApiError> {
        if self.success {
            if let Some(data) = self.data {
                return Ok(data);
            }
        }

        Err(ApiError::Api {
            status,
            message: self.error.unwrap_or_else(|| GENERIC_ERROR.to_string()),
        })
    }

    /// Like [`into_result`](Self::into_result) for endpoints whose success
    /// response carries no `data`.
    pub fn into_ok(self, status: u16) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }

        Err(ApiError::Api {
            status,
            message: self.error.unwrap_or_else(|| GENERIC_ERROR.to_string()),
        })
    }
}
