//! Session store
//!
//! Holds the signed-in user's identity, role and bearer token. The session
//! lives in memory and, when a persist path is configured, is mirrored to a
//! JSON file so a restarted console can resume it.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::models::{LoginResponse, Role};
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::logging::log_session_event;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    pub token: Option<String>,
}

impl Session {
    /// Build a session from a login response, rejecting unsuccessful or
    /// incomplete responses
    pub fn from_login(response: LoginResponse) -> Result<Self> {
        if !response.success {
            return Err(AttendanceError::Authentication(
                response.message.unwrap_or_else(|| "Login failed".to_string()),
            ));
        }

        let (user_id, role) = match (response.user_id, response.user_type) {
            (Some(user_id), Some(role)) => (user_id, role),
            _ => {
                return Err(AttendanceError::Authentication(
                    "Login response is missing the user id or type".to_string(),
                ))
            }
        };

        Ok(Self {
            user_id,
            name: response.name.unwrap_or_default(),
            email: response.email,
            role,
            token: response.token,
        })
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Session>,
    persist_path: Option<PathBuf>,
}

impl SessionStore {
    pub fn new(persist_path: Option<PathBuf>) -> Self {
        Self {
            current: None,
            persist_path,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|s| s.role)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.current.as_ref().map(|s| s.user_id)
    }

    /// Load a persisted session, if any. A corrupt file is removed.
    pub async fn restore(&mut self) -> Result<Option<&Session>> {
        let Some(path) = self.persist_path.clone() else {
            return Ok(None);
        };

        let data = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Session>(&data) {
            Ok(session) => {
                log_session_event(Some(session.user_id), "restored");
                self.current = Some(session);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Discarding unreadable session file");
                tokio::fs::remove_file(&path).await?;
            }
        }

        Ok(self.current.as_ref())
    }

    pub async fn sign_in(&mut self, session: Session) -> Result<()> {
        if let Some(path) = &self.persist_path {
            let data = serde_json::to_string(&session)?;
            tokio::fs::write(path, data).await?;
            debug!(path = %path.display(), "Session persisted");
        }

        log_session_event(Some(session.user_id), "signed_in");
        self.current = Some(session);
        Ok(())
    }

    /// Forget the session. The persisted file goes first; when it cannot be
    /// removed the in-memory session is kept.
    pub async fn sign_out(&mut self) -> Result<()> {
        if let Some(path) = &self.persist_path {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Could not remove persisted session");
                    return Err(e.into());
                }
            }
        }

        let previous = self.current.take();
        log_session_event(previous.map(|s| s.user_id), "signed_out");
        Ok(())
    }
}
