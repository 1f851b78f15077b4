//! Data models module
//!
//! This module contains the wire types exchanged with the attendance API

pub mod lecture;
pub mod student;
pub mod admin;
pub mod attendance;
pub mod auth;

// Re-export commonly used models
pub use lecture::{Lecture, LectureForm};
pub use student::{Student, StudentForm};
pub use admin::{Admin, AdminForm};
pub use attendance::{AttendanceRecord, AttendanceStatus, LectureAttendanceStats, MarkAttendanceRequest, StudentAttendanceStats};
pub use auth::{LoginRequest, LoginResponse, Role};
