//! Username/password login.

use super::form_error::{FormError, require};
use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::state::navigation::Route;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// # Errors
    ///
    /// `Required` for a blank field.
    pub fn validate(&self) -> Result<(), FormError> {
        require("username", &self.username)?;
        if self.password.is_empty() {
            return Err(FormError::Required { field: "password" });
        }
        Ok(())
    }

    /// Log in, store the token and go to the dashboard.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the server refuses the pair; transport and
    /// storage failures pass through as `Api`.
    pub async fn submit(&self, api: &PeaApi) -> Result<(), FormError> {
        self.validate()?;
        match api.login(self.username.trim(), &self.password).await {
            Ok(_) => {
                api.gateway().navigator().navigate(Route::Dashboard);
                Ok(())
            }
            Err(ApiError::Api { status, .. }) if (400..500).contains(&status) => {
                tracing::warn!(status, "login refused");
                Err(FormError::InvalidCredentials)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "login_form_test.rs"]
mod tests;
