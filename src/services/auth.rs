//! Authentication service implementation
//!
//! This service exchanges credentials for a session at the attendance API
//! and threads the issued bearer token through the shared API client.

use tracing::{info, warn};
use crate::models::{LoginRequest, LoginResponse, Role};
use crate::state::session::Session;
use crate::utils::errors::{AttendanceError, Result};
use super::api::ApiClient;

#[derive(Clone, Debug)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session.
    ///
    /// A transport failure and an application-level rejection both surface
    /// as errors; the latter carries the API's message. The issued token is
    /// not installed here; call [`AuthService::activate`] once the session
    /// has been stored.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AttendanceError::InvalidInput("Email and password are required".to_string()));
        }

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            user_type: role,
        };

        let response: LoginResponse = self.api.post("/auth/login", &request).await?;
        let session = Session::from_login(response).map_err(|e| {
            warn!(email = %request.email, role = %role, error = %e, "Login rejected");
            e
        })?;

        if session.role != role {
            warn!(requested = %role, granted = %session.role, "Login granted a different role than requested");
        }

        info!(user_id = session.user_id, role = %session.role, "Logged in");
        Ok(session)
    }

    /// Send the session's token with every subsequent request
    pub async fn activate(&self, session: &Session) {
        self.api.set_token(session.token.clone()).await;
    }

    pub async fn logout(&self) {
        self.api.set_token(None).await;
        info!("Logged out");
    }
}
