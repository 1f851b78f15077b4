//! Student model

use serde::{Deserialize, Serialize};
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::helpers::{is_valid_email, non_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub roll_no: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Create/update payload for a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub roll_no: String,
    /// Required on create and update alike; a blank value is `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl StudentForm {
    pub fn new(name: &str, email: &str, roll_no: &str, password: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            roll_no: roll_no.trim().to_string(),
            password: non_blank(password),
        }
    }

    /// The API validates creates and updates alike: every field is
    /// required, including the password.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(AttendanceError::InvalidInput("Name is required".to_string()));
        }
        if self.email.is_empty() {
            return Err(AttendanceError::InvalidInput("Email is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(AttendanceError::InvalidInput(format!("Invalid email format: {}", self.email)));
        }
        if self.roll_no.is_empty() {
            return Err(AttendanceError::InvalidInput("Roll number is required".to_string()));
        }
        if self.password.is_none() {
            return Err(AttendanceError::InvalidInput("Password is required".to_string()));
        }
        Ok(())
    }
}
