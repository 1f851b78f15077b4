//! Student dashboard

use tracing::debug;
use crate::models::{Lecture, StudentAttendanceStats};
use crate::services::StudentService;
use crate::utils::logging::log_api_error;

/// Present/absent/total counts for charting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceBreakdown {
    pub present: u64,
    pub absent: u64,
    pub total: u64,
}

#[derive(Debug)]
pub struct StudentDashboard {
    service: StudentService,
    student_id: i64,
    upcoming: Vec<Lecture>,
    stats: Option<StudentAttendanceStats>,
}

impl StudentDashboard {
    pub fn new(service: StudentService, student_id: i64) -> Self {
        Self {
            service,
            student_id,
            upcoming: Vec::new(),
            stats: None,
        }
    }

    pub fn student_id(&self) -> i64 {
        self.student_id
    }

    pub fn upcoming(&self) -> &[Lecture] {
        &self.upcoming
    }

    pub fn stats(&self) -> Option<&StudentAttendanceStats> {
        self.stats.as_ref()
    }

    /// Fetch upcoming lectures and personal statistics concurrently
    pub async fn load(&mut self) {
        let (upcoming, stats) = futures::join!(
            self.service.upcoming_lectures(),
            self.service.attendance_stats(self.student_id)
        );

        match upcoming {
            Ok(mut lectures) => {
                lectures.sort_by_key(|l| l.date_time);
                self.upcoming = lectures;
            }
            Err(e) => log_api_error("upcoming_lectures", &e, None),
        }
        match stats {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => log_api_error("attendance_stats", &e, Some(&self.student_id.to_string())),
        }

        debug!(student_id = self.student_id, upcoming = self.upcoming.len(), "Student dashboard loaded");
    }

    pub fn breakdown(&self) -> Option<AttendanceBreakdown> {
        self.stats.as_ref().map(|s| AttendanceBreakdown {
            present: s.present_count,
            absent: s.absent_count,
            total: s.total_lectures,
        })
    }
}
