//! Per-view fetch state.
//!
//! ERROR HANDLING
//! ==============
//! Dashboard views never surface fetch failures. A failed cycle is logged and
//! the view keeps what it had: a skeleton if nothing ever loaded, the last
//! good value otherwise. A successful cycle replaces the value wholesale.

use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    /// Nothing has loaded yet; render a placeholder.
    Loading,
    /// Last successfully loaded value.
    Ready(T),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    /// Fold one fetch cycle into the state.
    ///
    /// `view` names the component in the diagnostic log.
    #[must_use]
    pub fn apply(self, view: &'static str, result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => {
                tracing::error!(view, code = e.error_code(), error = %e, "fetch failed");
                self
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Ready(value) => Some(value),
        }
    }

    #[must_use]
    pub fn into_ready(self) -> Option<T> {
        match self {
            Self::Loading => None,
            Self::Ready(value) => Some(value),
        }
    }
}

#[cfg(test)]
#[path = "loadable_test.rs"]
mod tests;
