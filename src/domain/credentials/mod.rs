pub mod password;
pub mod username;

use secrecy::Secret;

use self::password::Password;
use self::username::Username;

/// Reasons a signup form is refused before it reaches the service.
///
/// Variants are declared in the order the rules are checked.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Username must be at least {} characters.", username::MIN_LENGTH)]
    UsernameTooShort,
    #[error("Password must be at least {} characters.", password::MIN_LENGTH)]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// A signup that passed every local rule.
#[derive(Debug)]
pub struct NewUser {
    pub username: Username,
    pub password: Password,
}

impl NewUser {
    /// Check the signup rules, stopping at the first one that fails.
    pub fn parse(
        username: &str,
        password: &Secret<String>,
        confirm_password: &Secret<String>,
    ) -> Result<Self, CredentialsError> {
        let username = Username::try_from(username.to_owned())?;
        let password = Password::try_from(password.clone())?;

        if !password.matches(confirm_password) {
            return Err(CredentialsError::PasswordMismatch);
        }

        Ok(Self { username, password })
    }
}
