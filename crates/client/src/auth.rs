//! Authentication endpoints.

use atelier_core::directory::Employee;
use atelier_core::forms::LoginForm;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Payload of a successful login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    #[serde(default)]
    pub user: Option<Employee>,
}

impl ApiClient {
    /// POST /auth/login — exchange credentials for a bearer token.
    ///
    /// On success the token is stored in the shared session, re-arming the
    /// forced-logout hook.
    pub async fn login(&self, form: &LoginForm) -> Result<LoginData, ApiError> {
        let data: LoginData = self.post_json("/auth/login", form).await?;
        self.session().log_in(data.token.clone());
        Ok(data)
    }

    /// GET /auth/me — the authenticated employee.
    pub async fn current_user(&self) -> Result<Employee, ApiError> {
        self.get_json("/auth/me").await
    }
}
