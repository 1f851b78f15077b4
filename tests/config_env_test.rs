//! Environment overrides for settings
//!
//! These tests mutate process environment variables and must not run
//! concurrently with each other.

use serial_test::serial;

use club_attendance::config::Settings;
use club_attendance::AttendanceError;

const BASE_URL: &str = "CLUB_ATTENDANCE__API__BASE_URL";
const LOG_LEVEL: &str = "CLUB_ATTENDANCE__LOGGING__LEVEL";

fn clear_env() {
    std::env::remove_var(BASE_URL);
    std::env::remove_var(LOG_LEVEL);
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    clear_env();
    let settings = Settings::new().unwrap();

    assert_eq!(settings.api.base_url, "http://localhost:8080/api");
    assert_eq!(settings.dashboard.upcoming_limit, 6);
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_environment_overrides_defaults() {
    clear_env();
    std::env::set_var(BASE_URL, "https://attendance.example.org/api");
    std::env::set_var(LOG_LEVEL, "debug");

    let settings = Settings::new().unwrap();
    clear_env();

    assert_eq!(settings.api.base_url, "https://attendance.example.org/api");
    assert_eq!(settings.logging.level, "debug");
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_invalid_override_fails_validation() {
    clear_env();
    std::env::set_var(BASE_URL, "ftp://attendance.example.org");

    let settings = Settings::new().unwrap();
    clear_env();

    assert!(matches!(settings.validate(), Err(AttendanceError::Config(_))));
}
