use secrecy::{ExposeSecret, Secret};

use super::CredentialsError;

/// Counted in UTF-16 code units, like [`super::username::MIN_LENGTH`].
pub const MIN_LENGTH: usize = 5;

#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn matches(&self, confirmation: &Secret<String>) -> bool {
        self.0.expose_secret() == confirmation.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = CredentialsError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().encode_utf16().count() < MIN_LENGTH {
            return Err(CredentialsError::PasswordTooShort);
        }

        Ok(Self(value))
    }
}

impl ExposeSecret<String> for Password {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
