//! Pending-attendance reconciliation
//!
//! [`AttendanceSheet`] holds the lecture an administrator is marking, the
//! attendance the server already knows for it, and the decisions staged
//! locally but not yet submitted. The effective status of a student is the
//! staged value if there is one, else the server value, else undecided.
//!
//! Every selection bumps a generation counter. Fetch results are tagged with
//! the [`SelectionTicket`] they were issued for and are dropped when the
//! selection has moved on, so a slow response for an old lecture can never
//! overwrite the current one.

use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use uuid::Uuid;
use crate::models::{
    AttendanceRecord, AttendanceStatus, Lecture, LectureAttendanceStats, MarkAttendanceRequest, Student,
};
use crate::services::AdminService;
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::logging::{log_api_error, log_attendance_commit};

/// Identifies the selection a fetch was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    lecture_id: i64,
}

/// Summary of a successful commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReport {
    pub lecture_id: i64,
    pub submitted: usize,
}

#[derive(Debug, Default)]
pub struct AttendanceSheet {
    selected: Option<Lecture>,
    records: Vec<AttendanceRecord>,
    stats: Option<LectureAttendanceStats>,
    pending: BTreeMap<i64, bool>,
    generation: u64,
}

impl AttendanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&Lecture> {
        self.selected.as_ref()
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn stats(&self) -> Option<&LectureAttendanceStats> {
        self.stats.as_ref()
    }

    /// Staged decisions in ascending student id order
    pub fn pending(&self) -> &BTreeMap<i64, bool> {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Replace the selection without fetching.
    ///
    /// Staged edits are always cleared, even when the same lecture is chosen
    /// again. Server data is cleared too and must be refetched for the
    /// returned ticket; `None` clears everything and yields no ticket.
    pub fn set_selection(&mut self, lecture: Option<Lecture>) -> Option<SelectionTicket> {
        self.generation += 1;
        self.pending.clear();
        self.records.clear();
        self.stats = None;
        self.selected = lecture;

        debug!(
            generation = self.generation,
            lecture_id = self.selected.as_ref().map(|l| l.id),
            "Attendance selection changed"
        );
        self.ticket()
    }

    /// Select a lecture and fetch its attendance and statistics
    pub async fn select_lecture(&mut self, lecture: Option<Lecture>, admin: &AdminService) -> Option<SelectionTicket> {
        let ticket = self.set_selection(lecture)?;
        self.refresh(admin).await;
        Some(ticket)
    }

    /// Ticket for the current selection
    pub fn ticket(&self) -> Option<SelectionTicket> {
        self.selected.as_ref().map(|lecture| SelectionTicket {
            generation: self.generation,
            lecture_id: lecture.id,
        })
    }

    fn is_current(&self, ticket: SelectionTicket) -> bool {
        ticket.generation == self.generation
            && self.selected.as_ref().map(|l| l.id) == Some(ticket.lecture_id)
    }

    /// Apply fetched records; returns false when the ticket is stale
    pub fn apply_records(&mut self, ticket: SelectionTicket, records: Vec<AttendanceRecord>) -> bool {
        if !self.is_current(ticket) {
            debug!(lecture_id = ticket.lecture_id, "Discarding stale attendance records");
            return false;
        }
        self.records = records;
        true
    }

    /// Apply fetched statistics; returns false when the ticket is stale
    pub fn apply_stats(&mut self, ticket: SelectionTicket, stats: LectureAttendanceStats) -> bool {
        if !self.is_current(ticket) {
            debug!(lecture_id = ticket.lecture_id, "Discarding stale attendance statistics");
            return false;
        }
        self.stats = Some(stats);
        true
    }

    /// Refetch records and statistics for the current selection.
    ///
    /// Both requests run concurrently. Failures are logged and leave the
    /// previous values in place.
    pub async fn refresh(&mut self, admin: &AdminService) {
        let Some(ticket) = self.ticket() else {
            return;
        };

        let (records, stats) = futures::join!(
            admin.attendance_for_lecture(ticket.lecture_id),
            admin.lecture_stats(ticket.lecture_id)
        );

        match records {
            Ok(records) => {
                self.apply_records(ticket, records);
            }
            Err(e) => log_api_error("attendance_for_lecture", &e, None),
        }
        match stats {
            Ok(stats) => {
                self.apply_stats(ticket, stats);
            }
            Err(e) => log_api_error("lecture_stats", &e, None),
        }
    }

    /// Stage a decision for one student, overwriting any earlier one
    pub fn stage(&mut self, student_id: i64, present: bool) {
        self.pending.insert(student_id, present);
    }

    /// Stage the same decision for every given student
    pub fn stage_all<'a>(&mut self, students: impl IntoIterator<Item = &'a Student>, present: bool) {
        for student in students {
            self.pending.insert(student.id, present);
        }
    }

    /// Drop all staged decisions
    pub fn discard(&mut self) {
        self.pending.clear();
    }

    /// Staged value, else the server record matched by roll number, else undecided
    pub fn effective_status(&self, student: &Student) -> AttendanceStatus {
        if let Some(&present) = self.pending.get(&student.id) {
            return present.into();
        }

        self.records
            .iter()
            .find(|record| record.student_roll_no == student.roll_no)
            .map(|record| AttendanceStatus::from(record.present))
            .unwrap_or(AttendanceStatus::Undecided)
    }

    /// Submit every staged decision, one request at a time.
    ///
    /// On success the staged map is cleared and server data refreshed. On the
    /// first failure the remaining submissions are abandoned and the staged
    /// map is left intact so the whole batch can be retried; writes that
    /// already went through are not rolled back.
    pub async fn commit(&mut self, admin: &AdminService) -> Result<CommitReport> {
        let lecture_id = self
            .selected
            .as_ref()
            .map(|l| l.id)
            .ok_or(AttendanceError::NoLectureSelected)?;

        let batch_id = Uuid::new_v4();
        let total = self.pending.len();
        info!(batch_id = %batch_id, lecture_id = lecture_id, staged = total, "Committing staged attendance");

        for (index, (&student_id, &present)) in self.pending.iter().enumerate() {
            let request = MarkAttendanceRequest {
                student_id,
                lecture_id,
                present,
            };

            if let Err(e) = admin.mark_attendance(request).await {
                warn!(batch_id = %batch_id, student_id = student_id, error = %e, "Attendance submission failed");
                log_attendance_commit(lecture_id, index, total - index - 1, false);
                return Err(AttendanceError::CommitFailed {
                    lecture_id,
                    submitted: index,
                    remaining: total - index - 1,
                    source: Box::new(e),
                });
            }
        }

        self.pending.clear();
        log_attendance_commit(lecture_id, total, 0, true);
        self.refresh(admin).await;

        Ok(CommitReport {
            lecture_id,
            submitted: total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn lecture(id: i64) -> Lecture {
        Lecture {
            id,
            title: format!("Lecture {}", id),
            description: None,
            date_time: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(18, 0, 0).unwrap(),
        }
    }

    fn student(id: i64, roll_no: &str) -> Student {
        Student {
            id,
            name: format!("Student {}", id),
            email: format!("s{}@club.org", id),
            roll_no: roll_no.to_string(),
            image_url: None,
        }
    }

    fn record(roll_no: &str, present: bool) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            student_name: String::new(),
            student_roll_no: roll_no.to_string(),
            lecture_title: String::new(),
            present,
        }
    }

    #[test]
    fn test_effective_status_falls_back_to_server_then_undecided() {
        let mut sheet = AttendanceSheet::new();
        let ticket = sheet.set_selection(Some(lecture(1))).unwrap();
        assert!(sheet.apply_records(ticket, vec![record("R1", true), record("R2", false)]));

        assert_eq!(sheet.effective_status(&student(1, "R1")), AttendanceStatus::Present);
        assert_eq!(sheet.effective_status(&student(2, "R2")), AttendanceStatus::Absent);
        assert_eq!(sheet.effective_status(&student(3, "R3")), AttendanceStatus::Undecided);
    }

    #[test]
    fn test_staged_value_overrides_server_and_last_write_wins() {
        let mut sheet = AttendanceSheet::new();
        let ticket = sheet.set_selection(Some(lecture(1))).unwrap();
        sheet.apply_records(ticket, vec![record("R2", false)]);

        let b = student(2, "R2");
        sheet.stage(b.id, true);
        assert_eq!(sheet.effective_status(&b), AttendanceStatus::Present);

        sheet.stage(b.id, false);
        assert_eq!(sheet.effective_status(&b), AttendanceStatus::Absent);
        assert_eq!(sheet.pending_count(), 1);
    }

    #[test]
    fn test_stage_all_marks_every_student() {
        let mut sheet = AttendanceSheet::new();
        let ticket = sheet.set_selection(Some(lecture(1))).unwrap();
        sheet.apply_records(ticket, vec![record("R1", false), record("R2", false)]);

        let students = vec![student(1, "R1"), student(2, "R2"), student(3, "R3")];
        sheet.stage_all(&students, true);

        for s in &students {
            assert_eq!(sheet.effective_status(s), AttendanceStatus::Present);
        }
    }

    #[test]
    fn test_reselecting_clears_pending() {
        let mut sheet = AttendanceSheet::new();
        sheet.set_selection(Some(lecture(1)));
        sheet.stage(1, true);

        sheet.set_selection(Some(lecture(2)));
        assert_eq!(sheet.pending_count(), 0);

        sheet.stage(1, true);
        sheet.set_selection(Some(lecture(2)));
        assert_eq!(sheet.pending_count(), 0);
    }

    #[test]
    fn test_selecting_none_clears_everything() {
        let mut sheet = AttendanceSheet::new();
        let ticket = sheet.set_selection(Some(lecture(1))).unwrap();
        sheet.apply_records(ticket, vec![record("R1", true)]);
        sheet.stage(1, false);

        assert!(sheet.set_selection(None).is_none());
        assert!(sheet.selected().is_none());
        assert!(sheet.records().is_empty());
        assert!(sheet.stats().is_none());
        assert_eq!(sheet.pending_count(), 0);
    }

    #[test]
    fn test_stale_responses_are_discarded() {
        let mut sheet = AttendanceSheet::new();
        let old = sheet.set_selection(Some(lecture(1))).unwrap();
        let current = sheet.set_selection(Some(lecture(2))).unwrap();

        assert!(!sheet.apply_records(old, vec![record("R1", true)]));
        assert!(sheet.records().is_empty());

        // same lecture selected again still invalidates older tickets
        let again = sheet.set_selection(Some(lecture(2))).unwrap();
        assert!(!sheet.apply_records(current, vec![record("R1", true)]));
        assert!(sheet.apply_records(again, vec![record("R1", true)]));
        assert_eq!(sheet.records().len(), 1);
    }

    #[test]
    fn test_discard_drops_staged_edits() {
        let mut sheet = AttendanceSheet::new();
        sheet.set_selection(Some(lecture(1)));
        sheet.stage(1, true);
        sheet.stage(2, false);
        sheet.discard();
        assert_eq!(sheet.pending_count(), 0);
        assert!(sheet.selected().is_some());
    }
}
