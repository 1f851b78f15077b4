//! Mock attendance API server for testing
//!
//! Wraps a wiremock server and knows the attendance API's routes, so tests
//! can stand up exactly the endpoints they exercise.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use club_attendance::config::Settings;
use club_attendance::models::Role;
use club_attendance::services::{AdminService, ApiClient, StudentService};
use club_attendance::state::AppContext;

use super::test_data::*;

/// Mock attendance API; every route lives under `/api`
pub struct AttendanceApiMock {
    pub server: MockServer,
    pub base_url: String,
}

impl AttendanceApiMock {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = format!("{}/api", server.uri());
        Self { server, base_url }
    }

    /// Default settings pointed at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.base_url.clone();
        settings.api.timeout_seconds = 5;
        settings
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(&self.settings().api).expect("valid mock base url")
    }

    pub fn admin_service(&self) -> AdminService {
        AdminService::new(self.api_client())
    }

    pub fn student_service(&self) -> StudentService {
        StudentService::new(self.api_client())
    }

    async fn mock_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", route)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_login(&self, role: Role, user_id: i64, name: &str, token: Option<&str>) {
        self.mock_json("POST", "/auth/login", 200, login_success_json(&role.to_string(), user_id, name, token))
            .await;
    }

    pub async fn mock_login_failure(&self, message: &str) {
        self.mock_json("POST", "/auth/login", 200, login_failure_json(message)).await;
    }

    pub async fn mock_lectures(&self, lectures: Vec<Value>) {
        self.mock_json("GET", "/admin/lectures", 200, Value::Array(lectures)).await;
    }

    pub async fn mock_students(&self, students: Vec<Value>) {
        self.mock_json("GET", "/admin/students", 200, Value::Array(students)).await;
    }

    pub async fn mock_admins(&self, admins: Vec<Value>) {
        self.mock_json("GET", "/admin/admins", 200, Value::Array(admins)).await;
    }

    pub async fn mock_lecture_attendance(&self, lecture_id: i64, records: Vec<Value>) {
        self.mock_json(
            "GET",
            &format!("/admin/lectures/{}/attendance", lecture_id),
            200,
            Value::Array(records),
        )
        .await;
    }

    pub async fn mock_lecture_stats(&self, lecture_id: i64, stats: Value) {
        self.mock_json("GET", &format!("/admin/lectures/{}/attendance-stats", lecture_id), 200, stats)
            .await;
    }

    pub async fn mock_upcoming(&self, lectures: Vec<Value>) {
        self.mock_json("GET", "/student/lectures/upcoming", 200, Value::Array(lectures)).await;
    }

    pub async fn mock_student_stats(&self, student_id: i64, stats: Value) {
        self.mock_json("GET", &format!("/student/{}/attendance-stats", student_id), 200, stats)
            .await;
    }

    /// Admin dashboard lists: one lecture (#10), the default roster, two admins
    pub async fn mock_admin_dashboard(&self) {
        self.mock_lectures(vec![lecture_json(10, "Ownership", at(2025, 3, 10, 18, 0))]).await;
        self.mock_students(default_students()).await;
        self.mock_admins(vec![admin_json(1, "Root"), admin_json(2, "Helper")]).await;
    }

    /// POST bodies sent to the mark-attendance endpoint, in arrival order
    pub async fn marked(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == "POST" && r.url.path() == "/api/admin/attendance")
            .map(|r| serde_json::from_slice(&r.body).expect("mark request body is json"))
            .collect()
    }
}

/// Started context signed in as admin #1 with the dashboard lists mocked
pub async fn admin_context(mock: &AttendanceApiMock) -> AppContext {
    mock.mock_login(Role::Admin, 1, "Root", Some("admin-token")).await;
    mock.mock_admin_dashboard().await;

    let mut ctx = AppContext::new(mock.settings()).expect("context");
    ctx.start().await.expect("start");
    ctx.login(Role::Admin, "root@club.org", "secret").await.expect("admin login");
    ctx
}

/// Started context signed in as student #7
pub async fn student_context(mock: &AttendanceApiMock) -> AppContext {
    mock.mock_login(Role::Student, 7, "Ada", Some("student-token")).await;
    mock.mock_upcoming(vec![]).await;
    mock.mock_student_stats(7, student_stats_json(4, 3)).await;

    let mut ctx = AppContext::new(mock.settings()).expect("context");
    ctx.start().await.expect("start");
    ctx.login(Role::Student, "ada@club.org", "secret").await.expect("student login");
    ctx
}
