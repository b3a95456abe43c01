//! Command execution against the session and the mock data source.
//!
//! Every method returns the JSON value the binary prints.

use crate::error::{CliError, Result as CliResult};

use lu_config::Config;
use lu_core::{
    Credentials, Draft, FieldLimits, FollowToggle, MockDataSource, Registration, Theme,
    TweetInteractions,
};
use lu_session::{
    ClientStorage, Decision, FileStorage, IdentityProvider, MockIdentityProvider, Route,
    RouteGuard, Session, SessionManager, SessionSettings, ThemeStore,
};

use std::sync::Arc;

use clap::ValueEnum;
use log::info;
use serde_json::{Value, json};

/// Tweet card actions. The result is not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Interaction {
    Like,
    Retweet,
    Bookmark,
}

pub struct App {
    manager: SessionManager,
    themes: ThemeStore,
    data: MockDataSource,
    limits: FieldLimits,
}

impl App {
    pub fn new(
        storage: Arc<dyn ClientStorage>,
        provider: Arc<dyn IdentityProvider>,
        settings: SessionSettings,
    ) -> Self {
        let limits = settings.limits;
        Self {
            manager: SessionManager::new(storage.clone(), provider, settings),
            themes: ThemeStore::new(storage),
            data: MockDataSource::new(),
            limits,
        }
    }

    /// File-backed storage under the config directory and the mock provider.
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let storage = FileStorage::open(config.storage_path()?)?;
        info!("Client storage: {}", storage.dir().display());

        Ok(Self::new(
            Arc::new(storage),
            Arc::new(MockIdentityProvider::new()),
            SessionSettings::from(config),
        ))
    }

    /// Replace the canned data source, e.g. with one pinned in time.
    pub fn with_data(mut self, data: MockDataSource) -> Self {
        self.data = data;
        self
    }

    /// Restore the stored session. Must run before any other command.
    pub fn start(&self) -> Session {
        self.manager.initialize()
    }

    pub fn status(&self) -> CliResult<Value> {
        Ok(serde_json::to_value(self.manager.current_session())?)
    }

    pub async fn login(&self, email: &str, password: &str) -> CliResult<Value> {
        let identity = self
            .manager
            .sign_in(&Credentials::new(email, password))
            .await?;
        Ok(serde_json::to_value(identity)?)
    }

    pub async fn signup(&self, registration: &Registration) -> CliResult<Value> {
        let identity = self.manager.sign_up(registration).await?;
        Ok(serde_json::to_value(identity)?)
    }

    pub fn logout(&self) -> CliResult<Value> {
        self.manager.sign_out();
        self.status()
    }

    /// Resolve `path` through the router and guard, rendering its view if allowed.
    pub fn open(&self, path: &str) -> CliResult<Value> {
        let route = Route::parse(path)?;
        self.navigate(&route)
    }

    pub fn navigate(&self, route: &Route) -> CliResult<Value> {
        self.guarded(route, |session| {
            Ok(json!({
                "decision": "render",
                "route": route,
                "view": self.view(route, session)?,
            }))
        })
    }

    /// Profile of `username`, or of the signed-in user when omitted.
    pub fn profile(&self, username: Option<&str>) -> CliResult<Value> {
        let username = match username {
            Some(username) => username.to_string(),
            None => match self.manager.current_session().trusted_identity() {
                Some(identity) => identity.username.clone(),
                // Signed out: every protected route redirects to login.
                None => return self.navigate(&Route::Home),
            },
        };
        self.navigate(&Route::Profile(username))
    }

    pub fn compose(&self, text: &str) -> CliResult<Value> {
        self.guarded(&Route::Compose, |_| {
            let draft = Draft::with_limit(text, self.limits.max_tweet_length);
            let remaining = draft.remaining();
            let content = draft.into_post()?;
            info!("Posted tweet ({} characters)", content.chars().count());

            Ok(json!({ "posted": content, "remaining": remaining }))
        })
    }

    /// Toggle an interaction on a home feed tweet.
    pub fn interact(&self, tweet_id: u64, interaction: Interaction) -> CliResult<Value> {
        self.guarded(&Route::Home, |_| {
            let tweet = self
                .data
                .home_feed()
                .into_iter()
                .find(|tweet| tweet.id == tweet_id)
                .ok_or_else(|| CliError::not_found(format!("Tweet {tweet_id}")))?;

            let mut state = TweetInteractions::from(&tweet);
            match interaction {
                Interaction::Like => state.toggle_like(),
                Interaction::Retweet => state.toggle_retweet(),
                Interaction::Bookmark => state.toggle_bookmark(),
            };

            Ok(serde_json::to_value(state)?)
        })
    }

    pub fn follow(&self, username: &str) -> CliResult<Value> {
        let route = Route::Profile(username.to_string());
        self.guarded(&route, |_| {
            let mut follow = FollowToggle::default();
            follow.toggle();
            Ok(json!({
                "username": username,
                "following": follow.following,
                "label": follow.label(),
            }))
        })
    }

    pub fn theme(&self) -> CliResult<Value> {
        Ok(json!({ "theme": self.themes.load() }))
    }

    pub fn set_theme(&self, theme: &str) -> CliResult<Value> {
        let theme: Theme = theme.parse()?;
        self.themes.save(theme)?;
        self.theme()
    }

    pub fn toggle_theme(&self) -> CliResult<Value> {
        let theme = self.themes.toggle()?;
        Ok(json!({ "theme": theme }))
    }

    /// Run `render` only if the guard lets `route` through; otherwise
    /// report the guard's decision.
    fn guarded<F>(&self, route: &Route, render: F) -> CliResult<Value>
    where
        F: FnOnce(&Session) -> CliResult<Value>,
    {
        let session = self.manager.current_session();
        match RouteGuard::navigate(&session, route) {
            Decision::Render => render(&session),
            decision => {
                info!("Not rendering {route}: {decision:?}");
                Ok(serde_json::to_value(decision)?)
            }
        }
    }

    fn view(&self, route: &Route, session: &Session) -> CliResult<Value> {
        let view = match route {
            Route::Home => serde_json::to_value(self.data.home_feed())?,
            Route::Explore => serde_json::to_value(self.data.trending())?,
            Route::Notifications => self
                .data
                .notifications()
                .iter()
                .map(|notification| {
                    json!({ "summary": notification.summary(), "notification": notification })
                })
                .collect(),
            Route::Messages => match session.trusted_identity() {
                Some(viewer) => serde_json::to_value(self.data.conversations(viewer))?,
                None => Value::Null,
            },
            Route::Profile(username) => {
                let profile = self.data.profile(username);
                let tweets = self.data.profile_tweets(&profile);
                json!({
                    "profile": profile,
                    "tweets": tweets,
                    "follow": FollowToggle::default(),
                })
            }
            Route::Settings => json!({
                "identity": session.identity,
                "theme": self.themes.load(),
            }),
            Route::Compose => json!({ "max_length": self.limits.max_tweet_length }),
            Route::Login | Route::Signup => Value::Null,
        };
        Ok(view)
    }
}
