//! Club Attendance
//!
//! Client for a club attendance API: admins manage lectures, students and
//! admins and mark attendance per lecture; students see their upcoming
//! lectures and attendance statistics. Attendance edits are staged locally
//! and committed to the server in one pass.

pub mod config;
pub mod dashboard;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ApiError, AttendanceError, Result};

// Re-export main components for easy access
pub use dashboard::{AdminDashboard, StudentDashboard};
pub use services::ServiceFactory;
pub use state::{AppContext, AttendanceSheet, RouteGuard, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
