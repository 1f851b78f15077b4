//! Dashboard views
//!
//! View state for the admin and student dashboards plus their text rendering

pub mod admin;
pub mod report;
pub mod student;

pub use admin::AdminDashboard;
pub use student::{AttendanceBreakdown, StudentDashboard};
