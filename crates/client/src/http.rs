//! HTTP plumbing for the backend REST API.
//!
//! One [`ApiClient`] per backend, holding a pooled [`reqwest::Client`] with
//! a fixed overall timeout and the shared [`Session`]. Per-resource endpoint
//! methods live in their own modules as further `impl ApiClient` blocks.
//!
//! Requests are not retried and cannot be cancelled individually; a failure
//! is terminal for that user action. The duplicate-submission guard lives in
//! the UI (buttons disabled while a request is in flight), not here.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::ApiEnvelope;
use crate::error::{ApiError, GENERIC_ERROR};
use crate::session::Session;

/// Fixed overall timeout applied to every request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the back-office REST API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (e.g.
    /// `http://host:3000/api`).
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, send, and intercept 401s.
    ///
    /// On 401 the session is invalidated (firing the forced-logout hook
    /// once process-wide) before the error is returned to the caller.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.session.invalidate();
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }

    /// Read the body as an [`ApiEnvelope`] and unwrap its `data`.
    ///
    /// Error statuses also carry an envelope; when the body is not an
    /// envelope at all (reverse proxy error page, empty body) the result is
    /// an [`ApiError::Api`] with the generic message.
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<ApiEnvelope<T>>(&bytes) {
            Ok(envelope) => envelope.into_result(status.as_u16()),
            Err(e) if status.is_success() => Err(ApiError::Decode(e)),
            Err(_) => Err(ApiError::Api {
                status: status.as_u16(),
                message: GENERIC_ERROR.to_string(),
            }),
        }
    }

    /// Like [`read_envelope`](Self::read_envelope) for endpoints whose
    /// success response has no `data`.
    async fn read_ok(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&bytes) {
            Ok(envelope) => envelope.into_ok(status.as_u16()),
            Err(_) if status.is_success() => Ok(()),
            Err(_) => Err(ApiError::Api {
                status: status.as_u16(),
                message: GENERIC_ERROR.to_string(),
            }),
        }
    }

    // ---- verb helpers used by the resource modules ----

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Self::read_envelope(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http.post(self.url(path)).json(body))
            .await?;
        Self::read_envelope(response).await
    }

    /// POST without a body, for transition-style endpoints.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path))).await?;
        Self::read_envelope(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::read_envelope(response).await
    }

    pub(crate) async fn post_ok<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .send(self.http.post(self.url(path)).json(body))
            .await?;
        Self::read_ok(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(self.http.delete(self.url(path))).await?;
        Self::read_ok(response).await
    }

    /// GET a raw binary body (PDF download). Not an envelope endpoint, but
    /// error statuses may still answer with one, in which case its message
    /// is surfaced.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        let message = serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&bytes)
            .ok()
            .and_then(|envelope| envelope.error)
            .unwrap_or_else(|| GENERIC_ERROR.to_string());

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let session = Session::new(None);
        let client = ApiClient::new("http://localhost:3000/api/", session).unwrap();
        assert_eq!(client.url("/devis"), "http://localhost:3000/api/devis");
    }

    #[test]
    fn paths_join_without_double_slashes() {
        let session = Session::new(None);
        let client = ApiClient::new("http://localhost:3000/api", session).unwrap();
        assert_eq!(
            client.url("/devis/12/lines"),
            "http://localhost:3000/api/devis/12/lines"
        );
    }
}
