//! Route navigation requested by the data-access layer and the forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway must force a trip to the login view on a 401 without knowing
//! what a "view" is in the host UI. Hosts implement `Navigator`; the terminal
//! front end prints a hint, tests record the calls.

use std::fmt;

/// Top-level views of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Transactions,
}

impl Route {
    /// Path of the route in the web layout.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Transactions => "/transactions",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Full navigation to another view. Implementations must not block.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
