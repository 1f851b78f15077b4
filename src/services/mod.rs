//! Services module
//!
//! This module contains the typed clients for the attendance API

pub mod api;
pub mod admin;
pub mod auth;
pub mod student;

// Re-export commonly used services
pub use api::ApiClient;
pub use admin::AdminService;
pub use auth::AuthService;
pub use student::StudentService;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services.
///
/// Every service shares one [`ApiClient`], so the token set at login is seen
/// by all of them.
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub api: ApiClient,
    pub auth_service: AuthService,
    pub admin_service: AdminService,
    pub student_service: StudentService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = ApiClient::new(&settings.api)?;

        Ok(Self {
            auth_service: AuthService::new(api.clone()),
            admin_service: AdminService::new(api.clone()),
            student_service: StudentService::new(api.clone()),
            api,
        })
    }
}
