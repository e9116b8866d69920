//! Background refresh of view models.
//!
//! DESIGN
//! ======
//! Each mounted component gets one task that runs its loader once, or on a
//! fixed interval, and publishes the result through a `watch` channel as a
//! `Loadable`. Views read the latest value and never see partial updates:
//! a loader either returns the whole model or an error.
//!
//! LIFECYCLE
//! =========
//! Dropping the `Poller` aborts the task. A result still in flight is lost
//! with it and never reaches the channel. A loader that fails with an auth
//! error stops its poller; the gateway has already sent the user to login.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::loadable::Loadable;

/// When a poller runs its loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Load on mount only.
    Once,
    /// Load on mount, then every period.
    Every(Duration),
}

pub struct Poller<T> {
    view: &'static str,
    state: watch::Receiver<Loadable<T>>,
    task: JoinHandle<()>,
}

impl<T: Clone> Poller<T> {
    /// Latest published state.
    #[must_use]
    pub fn current(&self) -> Loadable<T> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Loadable<T>> {
        self.state.clone()
    }

    /// Wait for the next published value. `false` once the task has ended.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.task.abort();
        debug!(view = self.view, "poller stopped");
    }
}

impl<T> std::fmt::Debug for Poller<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("view", &self.view)
            .field("finished", &self.task.is_finished())
            .finish_non_exhaustive()
    }
}

/// Spawn a task running `load` on `schedule`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_poller<T, F, Fut>(view: &'static str, schedule: Schedule, mut load: F) -> Poller<T>
where
    T: Send + Sync + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send,
{
    let (tx, rx) = watch::channel(Loadable::Loading);

    let task = tokio::spawn(async move {
        let mut ticker = match schedule {
            Schedule::Once => None,
            Schedule::Every(period) => {
                let mut ticker = tokio::time::interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                Some(ticker)
            }
        };

        loop {
            if let Some(ticker) = ticker.as_mut() {
                ticker.tick().await;
            }

            let result = load().await;
            let stop = matches!(&result, Err(e) if e.requires_login());
            tx.send_if_modified(|state| {
                let updated = result.is_ok();
                *state = std::mem::replace(state, Loadable::Loading).apply(view, result);
                updated
            });

            if stop {
                info!(view, "poller stopped: session no longer valid");
                break;
            }
            if ticker.is_none() || tx.is_closed() {
                break;
            }
        }
    });

    Poller { view, state: rx, task }
}

#[cfg(test)]
#[path = "poll_test.rs"]
mod tests;
