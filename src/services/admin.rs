//! Administrator operations against the attendance API

use tracing::debug;
use crate::models::{
    Admin, AdminForm, AttendanceRecord, Lecture, LectureAttendanceStats, LectureForm,
    MarkAttendanceRequest, Student, StudentForm,
};
use crate::utils::errors::Result;
use super::api::ApiClient;

#[derive(Clone, Debug)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    // Lectures

    pub async fn list_lectures(&self) -> Result<Vec<Lecture>> {
        self.api.get("/admin/lectures").await
    }

    pub async fn create_lecture(&self, form: &LectureForm) -> Result<Lecture> {
        self.api.post("/admin/lectures", form).await
    }

    pub async fn update_lecture(&self, id: i64, form: &LectureForm) -> Result<Lecture> {
        self.api.put(&format!("/admin/lectures/{}", id), form).await
    }

    pub async fn delete_lecture(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/admin/lectures/{}", id)).await
    }

    // Students

    pub async fn list_students(&self) -> Result<Vec<Student>> {
        self.api.get("/admin/students").await
    }

    pub async fn get_student(&self, id: i64) -> Result<Student> {
        self.api.get(&format!("/admin/students/{}", id)).await
    }

    pub async fn create_student(&self, form: &StudentForm) -> Result<Student> {
        self.api.post("/admin/students", form).await
    }

    pub async fn update_student(&self, id: i64, form: &StudentForm) -> Result<Student> {
        self.api.put(&format!("/admin/students/{}", id), form).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/admin/students/{}", id)).await
    }

    // Admins

    pub async fn list_admins(&self) -> Result<Vec<Admin>> {
        self.api.get("/admin/admins").await
    }

    pub async fn get_admin(&self, id: i64) -> Result<Admin> {
        self.api.get(&format!("/admin/admins/{}", id)).await
    }

    pub async fn create_admin(&self, form: &AdminForm) -> Result<Admin> {
        self.api.post("/admin/admins", form).await
    }

    pub async fn update_admin(&self, id: i64, form: &AdminForm) -> Result<Admin> {
        self.api.put(&format!("/admin/admins/{}", id), form).await
    }

    /// Delete an admin account. Callers are responsible for the self-deletion
    /// guard; see `AdminDashboard::delete_admin`.
    pub async fn delete_admin(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/admin/admins/{}", id)).await
    }

    // Attendance

    pub async fn mark_attendance(&self, request: MarkAttendanceRequest) -> Result<AttendanceRecord> {
        debug!(
            student_id = request.student_id,
            lecture_id = request.lecture_id,
            present = request.present,
            "Marking attendance"
        );
        self.api.post("/admin/attendance", &request).await
    }

    pub async fn attendance_for_lecture(&self, lecture_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.api.get(&format!("/admin/lectures/{}/attendance", lecture_id)).await
    }

    pub async fn lecture_stats(&self, lecture_id: i64) -> Result<LectureAttendanceStats> {
        self.api.get(&format!("/admin/lectures/{}/attendance-stats", lecture_id)).await
    }
}
