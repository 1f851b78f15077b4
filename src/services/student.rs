//! Student-facing operations against the attendance API

use crate::models::{Lecture, StudentAttendanceStats};
use crate::utils::errors::Result;
use super::api::ApiClient;

#[derive(Clone, Debug)]
pub struct StudentService {
    api: ApiClient,
}

impl StudentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Future-dated lectures, as filtered by the API
    pub async fn upcoming_lectures(&self) -> Result<Vec<Lecture>> {
        self.api.get("/student/lectures/upcoming").await
    }

    pub async fn attendance_stats(&self, student_id: i64) -> Result<StudentAttendanceStats> {
        self.api.get(&format!("/student/{}/attendance-stats", student_id)).await
    }
}
