//! Route guard: may a view render for the current session?

use crate::{Route, Session, SessionStatus};

use serde::Serialize;

/// Outcome of a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum Decision {
    /// Session still restoring: show a neutral spinner, nothing else.
    Wait,
    Redirect(Route),
    Render,
}

pub struct RouteGuard;

impl RouteGuard {
    /// Decision for a protected view.
    ///
    /// `Loading` never counts as signed in or signed out.
    pub fn decide(session: &Session) -> Decision {
        match (session.status, &session.identity) {
            (SessionStatus::Loading, _) => Decision::Wait,
            (SessionStatus::Ready, None) => Decision::Redirect(Route::SIGN_IN_ENTRY),
            (SessionStatus::Ready, Some(_)) => Decision::Render,
        }
    }

    /// Decision for any route.
    ///
    /// Auth pages render for visitors and bounce signed-in users home.
    pub fn navigate(session: &Session, route: &Route) -> Decision {
        if route.is_protected() {
            return Self::decide(session);
        }

        if session.is_signed_in() {
            Decision::Redirect(Route::Home)
        } else {
            Decision::Render
        }
    }
}
