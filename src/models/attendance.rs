//! Attendance models

use std::fmt;
use serde::{Deserialize, Serialize};

/// Server-side attendance fact for one (student, lecture) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_name: String,
    pub student_roll_no: String,
    pub lecture_title: String,
    pub present: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub student_id: i64,
    pub lecture_id: i64,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureAttendanceStats {
    #[serde(default)]
    pub lecture_id: Option<i64>,
    #[serde(default)]
    pub lecture_title: Option<String>,
    #[serde(default)]
    pub lecture_date: Option<String>,
    pub total_students: u64,
    pub present_count: u64,
    pub absent_count: u64,
    pub attendance_percentage: f64,
    #[serde(default)]
    pub attendance_details: Vec<AttendanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendanceStats {
    pub total_lectures: u64,
    pub present_count: u64,
    pub absent_count: u64,
    pub attendance_percentage: f64,
}

/// Attendance status as shown to an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Undecided,
}

impl From<bool> for AttendanceStatus {
    fn from(present: bool) -> Self {
        if present {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Undecided => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lecture_stats_minimal_payload() {
        let json = r#"{"totalStudents": 4, "presentCount": 3, "absentCount": 1, "attendancePercentage": 75.0}"#;
        let stats: LectureAttendanceStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.present_count, 3);
        assert!(stats.attendance_details.is_empty());
        assert_eq!(stats.lecture_id, None);
    }

    #[test]
    fn test_mark_request_wire_format() {
        let req = MarkAttendanceRequest { student_id: 2, lecture_id: 9, present: true };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            serde_json::json!({"studentId": 2, "lectureId": 9, "present": true})
        );
    }
}
