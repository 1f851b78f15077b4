//! Application context
//!
//! Owns everything the console front end works with: settings, services,
//! the session store, the route guard and the currently mounted view.

use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Settings;
use crate::dashboard::{AdminDashboard, StudentDashboard};
use crate::models::Role;
use crate::services::ServiceFactory;
use crate::state::guard::{Navigation, Route, RouteGuard};
use crate::state::session::{Session, SessionStore};
use crate::utils::errors::{AttendanceError, Result};

/// The view mounted for the signed-in user
#[derive(Debug)]
pub enum View {
    Admin(AdminDashboard),
    Student(StudentDashboard),
}

#[derive(Debug)]
pub struct AppContext {
    pub settings: Settings,
    pub services: ServiceFactory,
    pub session: SessionStore,
    pub guard: RouteGuard,
    view: Option<View>,
}

impl AppContext {
    /// Create a new AppContext from settings; the guard starts out loading
    pub fn new(settings: Settings) -> Result<Self> {
        let services = ServiceFactory::new(&settings)?;
        let session = SessionStore::new(settings.session.persist_path.as_ref().map(PathBuf::from));

        Ok(Self {
            settings,
            services,
            session,
            guard: RouteGuard::new(),
            view: None,
        })
    }

    /// Resolve the loading state from any persisted session and mount its view
    pub async fn start(&mut self) -> Result<()> {
        let restored = match self.session.restore().await {
            Ok(session) => session.cloned(),
            Err(e) => {
                warn!(error = %e, "Could not restore session");
                None
            }
        };

        if let Some(session) = &restored {
            self.services.auth_service.activate(session).await;
        }
        self.guard.finish_loading(restored.as_ref().map(|s| s.role));

        if let Some(session) = restored {
            info!(user_id = session.user_id, role = %session.role, "Resumed session");
            self.mount(&session).await;
        }
        Ok(())
    }

    /// Log in and mount the new view. Nothing changes, including the token
    /// in use, unless the session could be stored.
    pub async fn login(&mut self, role: Role, email: &str, password: &str) -> Result<Session> {
        let session = self.services.auth_service.login(email, password, role).await?;
        self.session.sign_in(session.clone()).await?;
        self.services.auth_service.activate(&session).await;
        self.guard.on_login(session.role);
        self.mount(&session).await;
        Ok(session)
    }

    /// Log out. If the persisted session cannot be removed the user stays
    /// signed in, so a restart does not resume a session that looked closed.
    pub async fn logout(&mut self) -> Result<()> {
        self.session.sign_out().await?;
        self.services.auth_service.logout().await;
        self.view = None;
        self.guard.on_logout();
        Ok(())
    }

    /// Build the dashboard for the session's role and fetch its data
    async fn mount(&mut self, session: &Session) {
        let view = match session.role {
            Role::Admin => {
                let mut dashboard = AdminDashboard::new(
                    self.services.admin_service.clone(),
                    session.user_id,
                    self.settings.dashboard.upcoming_limit,
                );
                dashboard.load().await;
                View::Admin(dashboard)
            }
            Role::Student => {
                let mut dashboard = StudentDashboard::new(
                    self.services.student_service.clone(),
                    session.user_id,
                );
                dashboard.load().await;
                View::Student(dashboard)
            }
        };
        self.view = Some(view);
    }

    /// Ask the guard for a route, turning redirects into errors
    pub fn require(&self, route: Route) -> Result<()> {
        match self.guard.navigate(route) {
            Navigation::Render(_) => Ok(()),
            Navigation::Wait => Err(AttendanceError::PermissionDenied("Session is still loading".to_string())),
            Navigation::Redirect(Route::Login) => Err(AttendanceError::PermissionDenied(
                "Please log in first".to_string(),
            )),
            Navigation::Redirect(target) => Err(AttendanceError::PermissionDenied(format!(
                "{} is not available for this account (redirected to {})",
                route, target
            ))),
        }
    }

    pub fn admin_view(&mut self) -> Result<&mut AdminDashboard> {
        self.require(Route::Admin)?;
        match self.view.as_mut() {
            Some(View::Admin(dashboard)) => Ok(dashboard),
            _ => Err(AttendanceError::PermissionDenied("Admin dashboard is not mounted".to_string())),
        }
    }

    pub fn student_view(&mut self) -> Result<&mut StudentDashboard> {
        self.require(Route::Student)?;
        match self.view.as_mut() {
            Some(View::Student(dashboard)) => Ok(dashboard),
            _ => Err(AttendanceError::PermissionDenied("Student dashboard is not mounted".to_string())),
        }
    }
}
