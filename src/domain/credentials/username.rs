use derive_more::Display;

use super::CredentialsError;

/// Counted in UTF-16 code units, the way the browser form measured it.
pub const MIN_LENGTH: usize = 3;

/// Domain used to synthesize the account email at signup.
const EMAIL_DOMAIN: &str = "test.com";

#[derive(Display, Debug, Clone, PartialEq, Eq)]
#[display(fmt = "{}", _0)]
pub struct Username(String);

impl Username {
    /// The service wants an email on signup but the form never asks for one.
    pub fn email(&self) -> String {
        format!("{}@{}", self.0, EMAIL_DOMAIN)
    }
}

impl TryFrom<String> for Username {
    type Error = CredentialsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.encode_utf16().count() < MIN_LENGTH {
            return Err(CredentialsError::UsernameTooShort);
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
