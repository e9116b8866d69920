//! Account creation with password confirmation.

use super::form_error::{FormError, require};
use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::net::types::{RegisterRequest, RegisterResponse};
use crate::state::navigation::Route;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Build the request, or explain why it cannot be sent.
    ///
    /// # Errors
    ///
    /// `Required` for blank fields, `Invalid` for an email without `@`,
    /// `PasswordMismatch` when the confirmation differs.
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let username = require("username", &self.username)?;
        let email = require("email", &self.email)?;
        if !email.contains('@') {
            return Err(FormError::Invalid { field: "email", reason: "missing '@'".into() });
        }
        if self.password.is_empty() {
            return Err(FormError::Required { field: "password" });
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: self.password.clone() })
    }

    /// Create the account and go to the login view.
    ///
    /// # Errors
    ///
    /// Validation errors before sending; `Rejected` with the server detail
    /// when the API refuses the account.
    pub async fn submit(&self, api: &PeaApi) -> Result<RegisterResponse, FormError> {
        let request = self.validate()?;
        match api.register(&request).await {
            Ok(response) => {
                api.gateway().navigator().navigate(Route::Login);
                Ok(response)
            }
            Err(e @ ApiError::Api { .. }) => Err(FormError::Rejected(e.user_message())),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "register_form_test.rs"]
mod tests;
