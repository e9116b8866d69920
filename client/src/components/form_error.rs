//! Errors the forms surface to the user.

use crate::error::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    #[error("{field} is not valid: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("invalid email or password")]
    InvalidCredentials,

    /// The server refused the submission; carries its `detail` when present.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Required { .. } | Self::NotPositive { .. } | Self::Invalid { .. } | Self::PasswordMismatch => {
                "E_INVALID_REQUEST"
            }
            Self::InvalidCredentials | Self::Rejected(_) => "E_API",
            Self::Api(e) => e.error_code(),
        }
    }

    /// True when nothing was sent to the server.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Required { .. } | Self::NotPositive { .. } | Self::Invalid { .. } | Self::PasswordMismatch)
    }
}

/// Reject blank input.
///
/// # Errors
///
/// `Required` when `value` is empty after trimming.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(FormError::Required { field }) } else { Ok(trimmed) }
}

#[cfg(test)]
#[path = "form_error_test.rs"]
mod tests;
