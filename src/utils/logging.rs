//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the attendance client.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{AttendanceError, Result};

/// Initialize logging based on configuration.
///
/// Console output goes to stderr so it does not interleave with dashboard
/// output on stdout. The returned guard must be held for the lifetime of the
/// program when file logging is enabled.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AttendanceError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let console = if config.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "club-attendance.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| AttendanceError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log admin actions
pub fn log_admin_action(admin_id: i64, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(operation: &str, error: &AttendanceError, context: Option<&str>) {
    error!(
        operation = operation,
        error = %error,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        context = context,
        "API error occurred"
    );
}

/// Log the outcome of an attendance commit
pub fn log_attendance_commit(lecture_id: i64, submitted: usize, remaining: usize, success: bool) {
    if success {
        info!(
            lecture_id = lecture_id,
            submitted = submitted,
            "Attendance commit completed"
        );
    } else {
        error!(
            lecture_id = lecture_id,
            submitted = submitted,
            remaining = remaining,
            "Attendance commit aborted"
        );
    }
}

/// Log session transitions
pub fn log_session_event(user_id: Option<i64>, event: &str) {
    debug!(user_id = user_id, event = event, "Session event");
}
