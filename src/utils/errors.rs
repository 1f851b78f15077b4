//! Error handling for the attendance client
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the attendance client
#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("Attendance API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("An admin cannot delete their own account (admin {admin_id})")]
    SelfDeletion { admin_id: i64 },

    #[error("No lecture selected")]
    NoLectureSelected,

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Attendance commit for lecture {lecture_id} failed after {submitted} submission(s), {remaining} not attempted: {source}")]
    CommitFailed {
        lecture_id: i64,
        submitted: usize,
        remaining: usize,
        #[source]
        source: Box<AttendanceError>,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Attendance API transport and application errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("request timed out")]
    Timeout,

    #[error("API responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for attendance client operations
pub type Result<T> = std::result::Result<T, AttendanceError>;

impl AttendanceError {
    /// Check if retrying the same operation could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            AttendanceError::Api(api) => match api {
                ApiError::Status { status, .. } => *status >= 500,
                ApiError::InvalidResponse(_) => false,
                _ => true,
            },
            AttendanceError::Config(_) => false,
            AttendanceError::Authentication(_) => false,
            AttendanceError::PermissionDenied(_) => false,
            AttendanceError::SelfDeletion { .. } => false,
            AttendanceError::NoLectureSelected => false,
            AttendanceError::NotFound { .. } => false,
            AttendanceError::InvalidInput(_) => false,
            AttendanceError::CommitFailed { source, .. } => source.is_recoverable(),
            AttendanceError::Http(_) => true,
            AttendanceError::Serialization(_) => false,
            AttendanceError::Io(_) => true,
            AttendanceError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AttendanceError::Config(_) => ErrorSeverity::Critical,
            AttendanceError::Authentication(_) => ErrorSeverity::Warning,
            AttendanceError::PermissionDenied(_) => ErrorSeverity::Warning,
            AttendanceError::SelfDeletion { .. } => ErrorSeverity::Warning,
            AttendanceError::NoLectureSelected => ErrorSeverity::Info,
            AttendanceError::NotFound { .. } => ErrorSeverity::Info,
            AttendanceError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
