use derive_more::Display;

use crate::domain::credentials::CredentialsError;

/// A blocking message for the user, the console equivalent of an alert box.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    #[display(fmt = "Logged in!")]
    LoggedIn,
    #[display(fmt = "Login failed")]
    LoginFailed,
    #[display(fmt = "{}", _0)]
    InvalidSignup(CredentialsError),
    #[display(fmt = "Signup successful! Now login.")]
    SignupSucceeded,
    #[display(fmt = "Signup failed: {}", _0)]
    SignupFailed(String),
    #[display(fmt = "Logged out!")]
    LoggedOut,
}
