//! Admin model

use serde::{Deserialize, Serialize};
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::helpers::{is_valid_email, non_blank};

/// An administrator account. The API also echoes the stored credential,
/// which is deliberately not modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AdminForm {
    pub fn new(name: &str, email: &str, password: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: non_blank(password),
        }
    }

    /// Creates and updates both require a password
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(AttendanceError::InvalidInput("Name is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(AttendanceError::InvalidInput(format!("Invalid email format: {}", self.email)));
        }
        if self.password.is_none() {
            return Err(AttendanceError::InvalidInput("Password is required".to_string()));
        }
        Ok(())
    }
}
