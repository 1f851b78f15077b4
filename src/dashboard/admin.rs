//! Admin dashboard
//!
//! Fetch-on-mount view over lectures, the student and admin rosters, and the
//! attendance sheet. List fetches are best effort: failures are logged and
//! the previous contents are kept. Mutations propagate their errors and
//! reload the affected list on success.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::models::{
    Admin, AdminForm, AttendanceStatus, Lecture, LectureForm, Student, StudentForm,
};
use crate::services::AdminService;
use crate::state::attendance::{AttendanceSheet, CommitReport};
use crate::utils::errors::{AttendanceError, Result};
use crate::utils::logging::{log_admin_action, log_api_error};

#[derive(Debug)]
pub struct AdminDashboard {
    service: AdminService,
    admin_id: i64,
    upcoming_limit: usize,
    lectures: Vec<Lecture>,
    students: Vec<Student>,
    admins: Vec<Admin>,
    sheet: AttendanceSheet,
}

impl AdminDashboard {
    pub fn new(service: AdminService, admin_id: i64, upcoming_limit: usize) -> Self {
        Self {
            service,
            admin_id,
            upcoming_limit,
            lectures: Vec::new(),
            students: Vec::new(),
            admins: Vec::new(),
            sheet: AttendanceSheet::new(),
        }
    }

    pub fn admin_id(&self) -> i64 {
        self.admin_id
    }

    pub fn lectures(&self) -> &[Lecture] {
        &self.lectures
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn admins(&self) -> &[Admin] {
        &self.admins
    }

    pub fn sheet(&self) -> &AttendanceSheet {
        &self.sheet
    }

    /// Fetch all three lists concurrently
    pub async fn load(&mut self) {
        let (lectures, students, admins) = futures::join!(
            self.service.list_lectures(),
            self.service.list_students(),
            self.service.list_admins()
        );

        match lectures {
            Ok(list) => self.lectures = list,
            Err(e) => log_api_error("list_lectures", &e, None),
        }
        match students {
            Ok(list) => self.students = list,
            Err(e) => log_api_error("list_students", &e, None),
        }
        match admins {
            Ok(list) => self.admins = list,
            Err(e) => log_api_error("list_admins", &e, None),
        }

        debug!(
            lectures = self.lectures.len(),
            students = self.students.len(),
            admins = self.admins.len(),
            "Admin dashboard loaded"
        );
    }

    async fn reload_lectures(&mut self) {
        match self.service.list_lectures().await {
            Ok(list) => self.lectures = list,
            Err(e) => log_api_error("list_lectures", &e, None),
        }
    }

    async fn reload_students(&mut self) {
        match self.service.list_students().await {
            Ok(list) => self.students = list,
            Err(e) => log_api_error("list_students", &e, None),
        }
    }

    async fn reload_admins(&mut self) {
        match self.service.list_admins().await {
            Ok(list) => self.admins = list,
            Err(e) => log_api_error("list_admins", &e, None),
        }
    }

    /// Lectures strictly after `now`, soonest first, capped at the configured limit
    pub fn upcoming_schedule(&self, now: NaiveDateTime) -> Vec<&Lecture> {
        let mut upcoming: Vec<&Lecture> = self.lectures.iter().filter(|l| l.is_upcoming(now)).collect();
        upcoming.sort_by_key(|l| l.date_time);
        upcoming.truncate(self.upcoming_limit);
        upcoming
    }

    pub fn find_lecture(&self, id: i64) -> Result<&Lecture> {
        self.lectures
            .iter()
            .find(|l| l.id == id)
            .ok_or(AttendanceError::NotFound { kind: "Lecture", id })
    }

    pub fn find_student(&self, id: i64) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(AttendanceError::NotFound { kind: "Student", id })
    }

    // Lectures

    pub async fn create_lecture(&mut self, form: LectureForm) -> Result<Lecture> {
        form.validate()?;
        let lecture = self.service.create_lecture(&form).await?;
        log_admin_action(self.admin_id, "create_lecture", Some(&lecture.title), None);
        self.reload_lectures().await;
        Ok(lecture)
    }

    pub async fn update_lecture(&mut self, id: i64, form: LectureForm) -> Result<Lecture> {
        form.validate()?;
        let lecture = self.service.update_lecture(id, &form).await?;
        log_admin_action(self.admin_id, "update_lecture", Some(&lecture.title), None);
        self.reload_lectures().await;
        Ok(lecture)
    }

    /// Delete a lecture; if it is the one being marked, the sheet is cleared
    pub async fn delete_lecture(&mut self, id: i64) -> Result<()> {
        self.service.delete_lecture(id).await?;
        log_admin_action(self.admin_id, "delete_lecture", Some(&id.to_string()), None);

        if self.sheet.selected().map(|l| l.id) == Some(id) {
            self.sheet.set_selection(None);
        }
        self.reload_lectures().await;
        Ok(())
    }

    // Students

    pub async fn get_student(&self, id: i64) -> Result<Student> {
        self.service.get_student(id).await
    }

    pub async fn create_student(&mut self, form: StudentForm) -> Result<Student> {
        form.validate()?;
        let student = self.service.create_student(&form).await?;
        log_admin_action(self.admin_id, "create_student", Some(&student.roll_no), None);
        self.reload_students().await;
        Ok(student)
    }

    pub async fn update_student(&mut self, id: i64, form: StudentForm) -> Result<Student> {
        form.validate()?;
        let student = self.service.update_student(id, &form).await?;
        log_admin_action(self.admin_id, "update_student", Some(&student.roll_no), None);
        self.reload_students().await;
        Ok(student)
    }

    pub async fn delete_student(&mut self, id: i64) -> Result<()> {
        self.service.delete_student(id).await?;
        log_admin_action(self.admin_id, "delete_student", Some(&id.to_string()), None);
        self.reload_students().await;
        Ok(())
    }

    // Admins

    pub async fn get_admin(&self, id: i64) -> Result<Admin> {
        self.service.get_admin(id).await
    }

    pub async fn create_admin(&mut self, form: AdminForm) -> Result<Admin> {
        form.validate()?;
        let admin = self.service.create_admin(&form).await?;
        log_admin_action(self.admin_id, "create_admin", Some(&admin.email), None);
        self.reload_admins().await;
        Ok(admin)
    }

    pub async fn update_admin(&mut self, id: i64, form: AdminForm) -> Result<Admin> {
        form.validate()?;
        let admin = self.service.update_admin(id, &form).await?;
        log_admin_action(self.admin_id, "update_admin", Some(&admin.email), None);
        self.reload_admins().await;
        Ok(admin)
    }

    /// Delete another admin. Deleting the signed-in account is refused
    /// before any request is made.
    pub async fn delete_admin(&mut self, id: i64) -> Result<()> {
        if id == self.admin_id {
            return Err(AttendanceError::SelfDeletion { admin_id: id });
        }

        self.service.delete_admin(id).await?;
        log_admin_action(self.admin_id, "delete_admin", Some(&id.to_string()), None);
        self.reload_admins().await;
        Ok(())
    }

    // Attendance

    /// Select a lecture by id (or none) and fetch its attendance
    pub async fn select_lecture(&mut self, id: Option<i64>) -> Result<()> {
        let lecture = match id {
            Some(id) => Some(self.find_lecture(id)?.clone()),
            None => None,
        };
        self.sheet.select_lecture(lecture, &self.service).await;
        Ok(())
    }

    pub fn stage(&mut self, student_id: i64, present: bool) -> Result<()> {
        if self.sheet.selected().is_none() {
            return Err(AttendanceError::NoLectureSelected);
        }
        self.find_student(student_id)?;
        self.sheet.stage(student_id, present);
        Ok(())
    }

    /// Stage the same decision for every loaded student
    pub fn stage_all(&mut self, present: bool) -> Result<()> {
        if self.sheet.selected().is_none() {
            return Err(AttendanceError::NoLectureSelected);
        }
        self.sheet.stage_all(&self.students, present);
        Ok(())
    }

    pub fn discard(&mut self) {
        self.sheet.discard();
    }

    pub async fn commit(&mut self) -> Result<CommitReport> {
        let report = self.sheet.commit(&self.service).await?;
        info!(lecture_id = report.lecture_id, submitted = report.submitted, "Attendance saved");
        Ok(report)
    }

    /// Every loaded student paired with its effective status
    pub fn attendance_rows(&self) -> Vec<(&Student, AttendanceStatus)> {
        self.students
            .iter()
            .map(|s| (s, self.sheet.effective_status(s)))
            .collect()
    }
}
