//! Text rendering for dashboard views and the printable attendance report

use crate::models::{
    Admin, AttendanceRecord, AttendanceStatus, Lecture, LectureAttendanceStats, Student, StudentAttendanceStats,
};
use crate::utils::helpers::{format_lecture_date, format_lecture_time, format_percentage, truncate_text};

const DESCRIPTION_WIDTH: usize = 60;

pub fn render_lectures<'a>(lectures: impl IntoIterator<Item = &'a Lecture>, empty: &str) -> String {
    let out: String = lectures
        .into_iter()
        .map(|lecture| {
            let mut line = format!("#{:<4} {}  {}\n", lecture.id, format_lecture_time(lecture.date_time), lecture.title);
            if let Some(description) = &lecture.description {
                line.push_str(&format!("       {}\n", truncate_text(description, DESCRIPTION_WIDTH)));
            }
            line
        })
        .collect();

    if out.is_empty() {
        format!("{}\n", empty)
    } else {
        out
    }
}

pub fn render_students(students: &[Student]) -> String {
    if students.is_empty() {
        return "No students found\n".to_string();
    }
    students
        .iter()
        .map(|s| format!("#{:<4} {:<24} roll {:<10} {}\n", s.id, s.name, s.roll_no, s.email))
        .collect()
}

pub fn render_admins(admins: &[Admin], current_admin_id: i64) -> String {
    if admins.is_empty() {
        return "No admins found\n".to_string();
    }
    admins
        .iter()
        .map(|a| {
            let you = if a.id == current_admin_id { " (you)" } else { "" };
            format!("#{:<4} {:<24} {}{}\n", a.id, a.name, a.email, you)
        })
        .collect()
}

/// Marking view: one line per student with its effective status
pub fn render_sheet(
    lecture: Option<&Lecture>,
    rows: &[(&Student, AttendanceStatus)],
    pending: usize,
) -> String {
    let Some(lecture) = lecture else {
        return "No lecture selected\n".to_string();
    };

    let mut out = format!("{} - {}\n", lecture.title, format_lecture_time(lecture.date_time));
    out.extend(rows.iter().map(|(student, status)| {
        format!("#{:<4} {:<24} {:<10} {}\n", student.id, student.name, student.roll_no, status)
    }));
    out.push_str(&format!("{} unsaved change(s)\n", pending));
    out
}

/// Printable attendance report for one lecture
pub fn render_attendance_report(
    lecture: &Lecture,
    stats: Option<&LectureAttendanceStats>,
    records: &[AttendanceRecord],
) -> String {
    let mut lines = vec![
        format!("Attendance Report - {}", lecture.title),
        format!("Date: {}", format_lecture_date(lecture.date_time.date())),
    ];

    if let Some(stats) = stats {
        lines.push(format!("Total Students: {}", stats.total_students));
        lines.push(format!("Present: {}", stats.present_count));
        lines.push(format!("Absent: {}", stats.absent_count));
        lines.push(format!("Attendance Percentage: {}", format_percentage(stats.attendance_percentage)));
    }

    lines.push(String::new());
    lines.push(format!("{:<24} | {:<10} | Status", "Student Name", "Roll No"));
    lines.push("-".repeat(48));
    lines.extend(records.iter().map(|record| {
        let status = if record.present { "Present" } else { "Absent" };
        format!("{:<24} | {:<10} | {}", record.student_name, record.student_roll_no, status)
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_student_stats(stats: Option<&StudentAttendanceStats>) -> String {
    match stats {
        Some(stats) => format!(
            "Total lectures: {}\nPresent: {}\nAbsent: {}\nAttendance: {}\n",
            stats.total_lectures,
            stats.present_count,
            stats.absent_count,
            format_percentage(stats.attendance_percentage)
        ),
        None => "No attendance data available\n".to_string(),
    }
}
