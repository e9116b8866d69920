//! Current user's avatar initials and email.

use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::net::types::UserProfile;

pub const UNKNOWN_INITIALS: &str = "UN";
pub const MISSING_EMAIL: &str = "No email";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileCard {
    pub profile: Option<UserProfile>,
}

impl ProfileCard {
    #[must_use]
    pub fn new(profile: Option<UserProfile>) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn initials(&self) -> String {
        initials(self.profile.as_ref().map(|p| p.username.as_str()))
    }

    #[must_use]
    pub fn username(&self) -> &str {
        self.profile.as_ref().map_or("", |p| p.username.as_str())
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match &self.profile {
            Some(p) if !p.email.is_empty() => &p.email,
            _ => MISSING_EMAIL,
        }
    }
}

/// First two characters of the username, uppercased; `UN` when unknown.
#[must_use]
pub fn initials(username: Option<&str>) -> String {
    let prefix: String = username.unwrap_or("").chars().take(2).collect();
    if prefix.is_empty() { UNKNOWN_INITIALS.to_owned() } else { prefix.to_uppercase() }
}

/// # Errors
///
/// Any gateway error.
pub async fn load(api: &PeaApi) -> Result<ProfileCard, ApiError> {
    Ok(ProfileCard::new(Some(api.me().await?)))
}

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod tests;
