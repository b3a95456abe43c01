//! Client-side routes.

use crate::{SessionError, SessionResult};

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Explore,
    Notifications,
    Messages,
    Profile(String),
    Settings,
    Compose,
    Login,
    Signup,
}

impl Route {
    /// Where unauthenticated visitors are sent.
    pub const SIGN_IN_ENTRY: Route = Route::Login;

    /// Parse a URL path. Query string and fragment are ignored, as is a
    /// trailing slash.
    #[track_caller]
    pub fn parse(path: &str) -> SessionResult<Self> {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let route = match trimmed {
            "" => Self::Home,
            "/explore" => Self::Explore,
            "/notifications" => Self::Notifications,
            "/messages" => Self::Messages,
            "/settings" => Self::Settings,
            "/compose" => Self::Compose,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            other => match other.strip_prefix("/profile/") {
                Some(username) if !username.is_empty() && !username.contains('/') => {
                    Self::Profile(username.to_string())
                }
                _ => return Err(SessionError::unknown_route(path)),
            },
        };

        Ok(route)
    }

    /// Whether this route requires a signed-in session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login | Self::Signup)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Explore => "/explore".to_string(),
            Self::Notifications => "/notifications".to_string(),
            Self::Messages => "/messages".to_string(),
            Self::Profile(username) => format!("/profile/{username}"),
            Self::Settings => "/settings".to_string(),
            Self::Compose => "/compose".to_string(),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
        }
    }
}

impl FromStr for Route {
    type Err = SessionError;

    #[track_caller]
    fn from_str(s: &str) -> SessionResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
