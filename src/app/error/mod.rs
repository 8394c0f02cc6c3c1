use crate::api::ApiError;
use crate::store::StoreError;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// Everything a handler can fail with.
///
/// Refused signups and logins are not errors: they surface as notices.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    /// The action is not offered in the current session state.
    #[error("{0}")]
    Unavailable(&'static str),
    #[error(transparent)]
    ApiError(#[from] ApiError),
    #[error(transparent)]
    StoreError(#[from] StoreError),
}

impl AppError {
    /// Whether the user gets to see this error, as opposed to it only being
    /// logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::Unavailable(_))
    }
}
