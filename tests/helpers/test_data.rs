//! Test data helpers
//!
//! JSON payloads shaped like the attendance API's responses, plus the typed
//! models the client deserializes them into.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use club_attendance::models::{Lecture, Student};

/// A fixed instant used as "now" wherever a test needs one
pub fn reference_now() -> NaiveDateTime {
    at(2025, 3, 1, 12, 0)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn lecture_json(id: i64, title: &str, date_time: NaiveDateTime) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "dateTime": date_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
    })
}

pub fn student_json(id: i64, name: &str, roll_no: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@club.org", name.to_lowercase().replace(' ', ".")),
        "rollNo": roll_no,
        "imageUrl": null,
    })
}

pub fn admin_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@club.org", name.to_lowercase()),
    })
}

pub fn record_json(id: i64, student_name: &str, roll_no: &str, lecture_title: &str, present: bool) -> Value {
    json!({
        "id": id,
        "studentName": student_name,
        "studentRollNo": roll_no,
        "lectureTitle": lecture_title,
        "present": present,
    })
}

pub fn lecture_stats_json(lecture_id: i64, total: u64, present: u64) -> Value {
    let percentage = if total == 0 { 0.0 } else { present as f64 * 100.0 / total as f64 };
    json!({
        "lectureId": lecture_id,
        "totalStudents": total,
        "presentCount": present,
        "absentCount": total - present,
        "attendancePercentage": percentage,
        "attendanceDetails": [],
    })
}

pub fn student_stats_json(total: u64, present: u64) -> Value {
    let percentage = if total == 0 { 0.0 } else { present as f64 * 100.0 / total as f64 };
    json!({
        "totalLectures": total,
        "presentCount": present,
        "absentCount": total - present,
        "attendancePercentage": percentage,
    })
}

pub fn login_success_json(role: &str, user_id: i64, name: &str, token: Option<&str>) -> Value {
    json!({
        "success": true,
        "message": "Login successful",
        "userType": role,
        "userId": user_id,
        "name": name,
        "email": format!("{}@club.org", name.to_lowercase()),
        "token": token,
    })
}

pub fn login_failure_json(message: &str) -> Value {
    json!({
        "success": false,
        "message": message,
        "userType": null,
        "userId": null,
        "name": null,
        "email": null,
    })
}

/// Three students and one lecture, the roster most tests mark against
pub fn default_students() -> Vec<Value> {
    vec![
        student_json(1, "Ada Lovelace", "R-001"),
        student_json(2, "Alan Turing", "R-002"),
        student_json(3, "Grace Hopper", "R-003"),
    ]
}

pub fn test_lecture(id: i64) -> Lecture {
    Lecture {
        id,
        title: format!("Lecture {}", id),
        description: None,
        date_time: at(2025, 3, 10, 18, 0),
    }
}

pub fn test_student(id: i64, roll_no: &str) -> Student {
    Student {
        id,
        name: format!("Student {}", id),
        email: format!("student{}@club.org", id),
        roll_no: roll_no.to_string(),
        image_url: None,
    }
}
