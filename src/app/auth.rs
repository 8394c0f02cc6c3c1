use secrecy::Secret;

use super::error::{AppError, AppResult};
use super::notice::Notice;
use super::{App, AuthMode, Session};
use crate::api::SignupOutcome;
use crate::domain::credentials::NewUser;
use crate::store::TokenStore;

impl<S: TokenStore> App<S> {
    /// Submit whichever auth form is showing.
    pub async fn submit_auth(&mut self) -> AppResult<()> {
        let mode = self.auth_mut()?.mode;
        match mode {
            AuthMode::Login => self.login().await,
            AuthMode::Signup => self.signup().await,
        }
    }

    #[tracing::instrument(
        name = "Login",
        skip(self),
        fields(username = tracing::field::Empty)
    )]
    pub async fn login(&mut self) -> AppResult<()> {
        let auth = self.auth_mut()?;
        if auth.session.is_authenticated() {
            return Err(AppError::Unavailable("Already logged in."));
        }
        let username = auth.username.clone();
        let password = auth.password.clone();
        tracing::Span::current().record("username", &tracing::field::display(&username));

        match self.api.login(&username, &password).await? {
            Some(token) => {
                self.store.set(&token).await?;
                self.auth_mut()?.session = Session::Authenticated(token);
                self.notify(Notice::LoggedIn);
                self.fetch_tasks().await
            }
            None => {
                self.notify(Notice::LoginFailed);
                Ok(())
            }
        }
    }

    #[tracing::instrument(
        name = "Signup",
        skip(self),
        fields(username = tracing::field::Empty)
    )]
    pub async fn signup(&mut self) -> AppResult<()> {
        let auth = self.auth_mut()?;
        if auth.session.is_authenticated() {
            return Err(AppError::Unavailable("Already logged in."));
        }
        tracing::Span::current().record("username", &tracing::field::display(&auth.username));

        let new_user = match NewUser::parse(&auth.username, &auth.password, &auth.confirm_password)
        {
            Ok(new_user) => new_user,
            Err(e) => {
                tracing::debug!(reason = %e, "signup refused locally");
                self.notify(Notice::InvalidSignup(e));
                return Ok(());
            }
        };

        match self.api.signup(&new_user).await? {
            SignupOutcome::Created => {
                let auth = self.auth_mut()?;
                auth.mode = AuthMode::Login;
                auth.password = Secret::new(String::new());
                auth.confirm_password = Secret::new(String::new());
                self.notify(Notice::SignupSucceeded);
            }
            SignupOutcome::Rejected(detail) => self.notify(Notice::SignupFailed(detail)),
        }

        Ok(())
    }

    /// Forget the session locally. The service is not told.
    ///
    /// The stored token goes first: if it cannot be removed the session is
    /// kept, otherwise the next start would silently restore it.
    #[tracing::instrument(name = "Logout", skip(self))]
    pub async fn logout(&mut self) -> AppResult<()> {
        self.auth_mut()?;
        self.store.clear().await?;

        self.auth_mut()?.session = Session::Unauthenticated;
        self.state.tasks.items.clear();
        self.notify(Notice::LoggedOut);

        Ok(())
    }
}
