//! # pea-client
//!
//! Native client for the PEA tracker API.
//!
//! This crate holds the session store, the authenticated request gateway,
//! typed API calls, the view models behind every dashboard component, and
//! the polling runtime that keeps them fresh. The `pea` binary at the repo
//! root renders these models in a terminal.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod poll;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ClientConfig;
pub use error::ApiError;
pub use net::api::PeaApi;
pub use net::gateway::Gateway;
pub use state::session::{Session, SessionState};
