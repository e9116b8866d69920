//! Shared fixtures for unit tests that talk to a mock API.

use std::sync::{Arc, Mutex};

use crate::config::ClientConfig;
use crate::net::api::PeaApi;
use crate::net::gateway::Gateway;
use crate::state::navigation::{Navigator, Route};
use crate::state::session::Session;
use crate::state::storage::MemoryStorage;

/// Navigator that records every requested route.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Gateway pointed at `base_url`, optionally pre-authenticated with `token`.
pub fn gateway(base_url: &str, token: Option<&str>) -> (Gateway, Arc<RecordingNavigator>) {
    let config = ClientConfig { base_url: base_url.to_owned(), ..ClientConfig::default() };
    let session = Session::new(Arc::new(MemoryStorage::new()));
    if let Some(token) = token {
        session.set(token).unwrap();
    }
    let navigator = Arc::new(RecordingNavigator::default());
    let gateway = Gateway::new(&config, session, navigator.clone()).unwrap();
    (gateway, navigator)
}

pub fn api(base_url: &str, token: Option<&str>) -> (PeaApi, Arc<RecordingNavigator>) {
    let (gateway, navigator) = gateway(base_url, token);
    (PeaApi::new(gateway), navigator)
}
