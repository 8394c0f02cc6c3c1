use secrecy::{ExposeSecret, Secret};

use crate::api::ApiClient;
use crate::config::Settings;
use crate::domain::task::Task;
use crate::store::{FileTokenStore, TokenStore};

pub mod console;
pub mod error;
pub mod notice;
pub mod ui;

mod auth;
mod task;

use self::error::{AppError, AppResult};
use self::notice::Notice;

/// Which form the unauthenticated view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Derived from token presence only. The token itself is never checked.
#[derive(Debug, Clone)]
pub enum Session {
    Unauthenticated,
    Authenticated(Secret<String>),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[derive(Debug, Clone)]
pub struct AuthState {
    pub username: String,
    pub password: Secret<String>,
    pub confirm_password: Secret<String>,
    pub mode: AuthMode,
    pub session: Session,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: Secret::new(String::new()),
            confirm_password: Secret::new(String::new()),
            mode: AuthMode::Login,
            session: Session::Unauthenticated,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskState {
    pub items: Vec<Task>,
    /// Pending input of the "add task" form.
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// `None` when the service is used without authentication.
    pub auth: Option<AuthState>,
    pub tasks: TaskState,
}

impl AppState {
    pub fn new(require_auth: bool) -> Self {
        Self {
            auth: require_auth.then(AuthState::default),
            tasks: TaskState::default(),
        }
    }

    /// Whether the task form and the task actions are on screen.
    pub fn shows_tasks(&self) -> bool {
        match &self.auth {
            None => true,
            Some(auth) => auth.session.is_authenticated(),
        }
    }
}

/// The whole client: state, the service and the token slot.
#[derive(Debug)]
pub struct App<S> {
    api: ApiClient,
    store: S,
    state: AppState,
    notices: Vec<Notice>,
}

impl App<FileTokenStore> {
    pub fn with(config: &Settings) -> AppResult<Self> {
        let api = ApiClient::new(config.api.base_url.clone(), config.api.timeout())?;
        let store = FileTokenStore::new(config.storage.slot_path());

        Ok(Self::new(api, store, config.api.require_auth))
    }
}

impl<S: TokenStore> App<S> {
    pub fn new(api: ApiClient, store: S, require_auth: bool) -> Self {
        Self {
            api,
            store,
            state: AppState::new(require_auth),
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hand the raised notices over to whoever displays them.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        tracing::info!(%notice, "notice");
        self.notices.push(notice);
    }

    /// Initial load: restore a persisted session and show its tasks.
    #[tracing::instrument(name = "Start client", skip(self))]
    pub async fn start(&mut self) -> AppResult<()> {
        let Some(auth) = self.state.auth.as_mut() else {
            return self.fetch_tasks().await;
        };

        match self.store.get().await? {
            Some(token) => {
                tracing::debug!("restoring persisted session");
                auth.session = Session::Authenticated(token);
                self.fetch_tasks().await
            }
            None => Ok(()),
        }
    }

    /// Credential attached to task requests.
    fn bearer(&self) -> AppResult<Option<&Secret<String>>> {
        match &self.state.auth {
            None => Ok(None),
            Some(AuthState {
                session: Session::Authenticated(token),
                ..
            }) => Ok(Some(token)),
            Some(_) => Err(AppError::Unavailable("Log in to manage tasks.")),
        }
    }

    fn auth_mut(&mut self) -> AppResult<&mut AuthState> {
        self.state
            .auth
            .as_mut()
            .ok_or(AppError::Unavailable("This service does not use accounts."))
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> AppResult<()> {
        self.auth_mut()?.username = username.into();
        Ok(())
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> AppResult<()> {
        self.auth_mut()?.password = Secret::new(password.into());
        Ok(())
    }

    pub fn set_confirm_password(&mut self, password: impl Into<String>) -> AppResult<()> {
        self.auth_mut()?.confirm_password = Secret::new(password.into());
        Ok(())
    }

    pub fn toggle_mode(&mut self) -> AppResult<AuthMode> {
        let auth = self.auth_mut()?;
        auth.mode = auth.mode.toggled();
        Ok(auth.mode)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.tasks.title = title.into();
    }

    /// The session token in clear, if there is a session.
    pub fn token(&self) -> Option<&str> {
        match &self.state.auth {
            Some(AuthState {
                session: Session::Authenticated(token),
                ..
            }) => Some(token.expose_secret().as_str()),
            _ => None,
        }
    }
}
