//! State management module
//!
//! This module handles the session, route guard, attendance staging and the
//! application context that ties them together

pub mod attendance;
pub mod context;
pub mod guard;
pub mod session;

// Re-export commonly used state components
pub use attendance::{AttendanceSheet, CommitReport, SelectionTicket};
pub use context::{AppContext, View};
pub use guard::{GuardState, Navigation, Route, RouteGuard};
pub use session::{Session, SessionStore};
