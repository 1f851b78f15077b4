//! Route guard
//!
//! A small state machine deciding which view may render. It starts in
//! `Loading` until the session store has been consulted, then cycles between
//! `Authenticated(role)` and `Unauthenticated` with each login and logout.

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    Authenticated(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    Home,
    Admin,
    Student,
    Unauthorized,
}

impl Route {
    /// The role a route is scoped to, if any
    pub fn required_role(self) -> Option<Role> {
        match self {
            Route::Admin => Some(Role::Admin),
            Route::Student => Some(Role::Student),
            _ => None,
        }
    }

    /// Landing route for a signed-in role
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Route::Admin,
            Role::Student => Route::Student,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = match self {
            Route::Login => "/login",
            Route::Home => "/",
            Route::Admin => "/admin",
            Route::Student => "/student",
            Route::Unauthorized => "/unauthorized",
        };
        f.write_str(path)
    }
}

/// Outcome of asking the guard for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
    /// Session state not yet known
    Wait,
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    state: GuardState,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self { state: GuardState::Loading }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Resolve the loading state once the session store has been read
    pub fn finish_loading(&mut self, role: Option<Role>) {
        self.transition(match role {
            Some(role) => GuardState::Authenticated(role),
            None => GuardState::Unauthenticated,
        });
    }

    pub fn on_login(&mut self, role: Role) {
        self.transition(GuardState::Authenticated(role));
    }

    pub fn on_logout(&mut self) {
        self.transition(GuardState::Unauthenticated);
    }

    fn transition(&mut self, next: GuardState) {
        debug!(from = ?self.state, to = ?next, "Route guard transition");
        self.state = next;
    }

    pub fn navigate(&self, route: Route) -> Navigation {
        let role = match self.state {
            GuardState::Loading => return Navigation::Wait,
            GuardState::Unauthenticated => None,
            GuardState::Authenticated(role) => Some(role),
        };

        match route {
            Route::Login | Route::Unauthorized => Navigation::Render(route),
            Route::Home => match role {
                Some(role) => Navigation::Redirect(Route::for_role(role)),
                None => Navigation::Redirect(Route::Login),
            },
            Route::Admin | Route::Student => match (role, route.required_role()) {
                (None, _) => Navigation::Redirect(Route::Login),
                (Some(have), Some(need)) if have != need => Navigation::Redirect(Route::Unauthorized),
                _ => Navigation::Render(route),
            },
        }
    }
}
